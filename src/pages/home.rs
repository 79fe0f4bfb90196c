use log::{debug, info};
use web_sys::{HtmlInputElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::catalog::{ServiceOption, ADD_ONS, SERVICES, TRUST_BADGES};
use crate::booking::dispatch;
use crate::booking::fields::FormField;
use crate::booking::flow::{BookingForm, SubmitOutcome};
use crate::booking::message::compose_inquiry_message;
use crate::components::attention::use_attention;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::checkbox::Checkbox;
use crate::components::input::TextInput;
use crate::components::logo::{Logo, LogoVariant};
use crate::components::notification::{use_toast, Toast};
use crate::components::textarea::Textarea;
use crate::config::BUSINESS_NAME;

const SERVICES_SECTION_ID: &str = "services";

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn scroll_to_services() {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SERVICES_SECTION_ID));
    if let Some(element) = element {
        let mut options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn focus(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        if let Err(e) = input.focus() {
            log::warn!("Could not focus invalid field: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static ServiceOption,
    selected: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let id = props.service.id;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: ()| on_toggle.emit(id))
    };

    html! {
        <div
            class={classes!("service-card", props.service.accent, props.selected.then(|| "selected"))}
            {onclick}
        >
            <div class="service-card__icon">{props.service.icon}</div>
            <div class="service-card__body">
                <div class="service-card__header">
                    <h3>{props.service.name}</h3>
                    <Checkbox
                        id={format!("service-{}", id)}
                        checked={props.selected}
                        onchange={onchange}
                        stop_propagation=true
                    />
                </div>
                <p>{props.service.description}</p>
            </div>
            if props.selected {
                <div class="service-card__bar"></div>
            }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let form = use_state(BookingForm::new);
    let reduce_motion = use_state(|| false);
    let toast = use_toast();
    let attention = use_attention();
    let name_ref = use_node_ref();
    let date_ref = use_node_ref();

    {
        let reduce_motion = reduce_motion.clone();
        use_mount(move || {
            reduce_motion.set(prefers_reduced_motion());
        });
    }

    let on_inquiry = Callback::from(|_: MouseEvent| {
        dispatch::dispatch_whatsapp(&compose_inquiry_message());
    });

    let on_call = Callback::from(|_: MouseEvent| dispatch::dispatch_call());

    let on_view_services = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_services();
    });

    let on_toggle_service = {
        let form = form.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*form).clone();
            next.toggle_service(id);
            form.set(next);
        })
    };

    let toggle_add_on = {
        let form = form.clone();
        move |label: &'static str| {
            let form = form.clone();
            Callback::from(move |_: ()| {
                let mut next = (*form).clone();
                next.toggle_add_on(label);
                form.set(next);
            })
        }
    };

    let set_field = {
        let form = form.clone();
        move |field: FormField| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set_field(field, value);
                form.set(next);
            })
        }
    };

    let on_book = {
        let form = form.clone();
        let toast = toast.clone();
        let attention = attention.clone();
        let name_ref = name_ref.clone();
        let date_ref = date_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.submit() {
                SubmitOutcome::Rejected { focus: Some(field) } => {
                    match field {
                        FormField::EventDate => focus(&date_ref),
                        _ => focus(&name_ref),
                    }
                    attention.trigger(field);
                }
                SubmitOutcome::Rejected { focus: None } => {}
                SubmitOutcome::Ready { url, .. } => {
                    info!("Booking ready with {} service(s)", next.selection.service_count());
                    toast.show("Opening WhatsApp with your booking details…");
                    dispatch::open_chat(&url);
                }
            }
            debug!("Submission finished as {:?}", next.state());
            next.settle();
            form.set(next);
        })
    };

    let value_of = |field: FormField| AttrValue::from(form.fields.get(field).to_string());
    let selected_count = form.selection.service_count();

    html! {
        <div class={classes!("home", (*reduce_motion).then(|| "reduce-motion"))}>
            <style>{HOME_STYLES}</style>
            <Toast message={toast.message()} />

            <section class="hero">
                <div class="hero__glow hero__glow--left"></div>
                <div class="hero__glow hero__glow--right"></div>
                <div class="hero__content">
                    <Logo class="hero__logo" />
                    <Badge variant={BadgeVariant::Secondary} class="hero__tag">
                        {"✨ Premium Event Solutions"}
                    </Badge>
                    <h1>{BUSINESS_NAME}</h1>
                    <p class="hero__tagline">{"Feel the vibe, watch it live"}</p>
                    <p class="hero__summary">
                        {"LED Walls, LED TVs, Internet Live Streaming, Drone Coverage."}
                        <br />
                        {"End-to-end event solutions."}
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--whatsapp" onclick={on_inquiry.clone()}>
                            {"💬 WhatsApp"}
                        </button>
                        <button class="btn btn--call" onclick={on_call.clone()}>
                            {"📞 Call Now"}
                        </button>
                        <button class="btn btn--link" onclick={on_view_services}>
                            {"View services ↓"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={SERVICES_SECTION_ID} class="services">
                <h2>{"Services & Rentals"}</h2>
                if form.service_warning {
                    <div class="warning-banner" role="alert">
                        {"Select at least one service to continue."}
                    </div>
                }
                <div class="services__grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard
                            key={service.id}
                            service={service}
                            selected={form.selection.is_service_selected(service.id)}
                            on_toggle={on_toggle_service.clone()}
                        />
                    }) }
                </div>
            </section>

            <section class="quote">
                <h2>{"Quick Quote"}</h2>
                <div class="quote__card">
                    <div class="field">
                        <label>{"Name "}<span class="required">{"*"}</span></label>
                        <TextInput
                            node_ref={name_ref.clone()}
                            placeholder="Your full name"
                            value={value_of(FormField::Name)}
                            oninput={set_field(FormField::Name)}
                            invalid={form.errors.name}
                            shaking={attention.is_active(FormField::Name)}
                        />
                    </div>
                    <div class="field">
                        <label>{"Event Date "}<span class="required">{"*"}</span></label>
                        <TextInput
                            node_ref={date_ref.clone()}
                            input_type="date"
                            value={value_of(FormField::EventDate)}
                            oninput={set_field(FormField::EventDate)}
                            invalid={form.errors.date}
                            shaking={attention.is_active(FormField::EventDate)}
                        />
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label>{"Venue/Location"}</label>
                            <TextInput
                                placeholder="Event venue"
                                value={value_of(FormField::Venue)}
                                oninput={set_field(FormField::Venue)}
                            />
                        </div>
                        <div class="field">
                            <label>{"City"}</label>
                            <TextInput
                                placeholder="City"
                                value={value_of(FormField::City)}
                                oninput={set_field(FormField::City)}
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label>{"Expected Audience"}</label>
                        <TextInput
                            input_type="number"
                            placeholder="Number of attendees"
                            value={value_of(FormField::Audience)}
                            oninput={set_field(FormField::Audience)}
                        />
                    </div>
                    <div class="field">
                        <label>{"Notes"}</label>
                        <Textarea
                            placeholder="Any additional requirements or details"
                            value={value_of(FormField::Notes)}
                            oninput={set_field(FormField::Notes)}
                        />
                    </div>
                    <div class="field">
                        <label>{"Optional Add-ons"}</label>
                        <div class="add-ons">
                            { for ADD_ONS.iter().enumerate().map(|(index, label)| {
                                let id = format!("add-on-{}", index);
                                html! {
                                    <div class="add-on" key={*label}>
                                        <Checkbox
                                            id={id.clone()}
                                            checked={form.selection.is_add_on_selected(label)}
                                            onchange={toggle_add_on(*label)}
                                        />
                                        <label for={id}>{*label}</label>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </div>
                <div class="quote__submit">
                    <button class="btn btn--whatsapp btn--large" onclick={on_book.clone()}>
                        {"💬 Book on WhatsApp"}
                    </button>
                </div>
            </section>

            <section class="trust">
                { for TRUST_BADGES.iter().map(|badge| html! {
                    <div class="trust__badge" key={badge.text}>
                        <span class="trust__icon">{badge.icon}</span>
                        <span class="trust__text">{badge.text}</span>
                    </div>
                }) }
            </section>

            <footer class="footer">
                <Logo variant={LogoVariant::Light} />
                <p>{"Live Production & Equipment Rentals"}</p>
                <div class="footer__actions">
                    <button class="btn btn--whatsapp" onclick={on_inquiry}>{"💬 WhatsApp"}</button>
                    <button class="btn btn--call" onclick={on_call}>{"📞 Call Now"}</button>
                </div>
            </footer>

            <div class="sticky-cta">
                <div class="sticky-cta__status">
                    if selected_count > 0 {
                        <>
                            <Badge class="sticky-cta__count">{selected_count.to_string()}</Badge>
                            <span>{format!("{} selected", selected_count)}</span>
                        </>
                    } else {
                        <span>{"Pick services to build your booking."}</span>
                    }
                </div>
                <button class="btn btn--whatsapp btn--small" onclick={on_book}>
                    {"💬 Book Now"}
                </button>
            </div>
            <div class="sticky-cta__spacer" aria-hidden="true"></div>
        </div>
    }
}

const HOME_STYLES: &str = r#"
.home {
    min-height: 100vh;
    background: linear-gradient(to bottom, #f9fafb, #ffffff);
    color: #111827;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.hero {
    position: relative;
    padding: 5rem 1rem;
    overflow: hidden;
    text-align: center;
}
.hero__glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
    pointer-events: none;
    animation: pulse 3s ease-in-out infinite;
}
.hero__glow--left {
    top: 5rem;
    left: 2.5rem;
    width: 18rem;
    height: 18rem;
    background: rgba(216, 180, 254, 0.3);
}
.hero__glow--right {
    bottom: 5rem;
    right: 2.5rem;
    width: 24rem;
    height: 24rem;
    background: rgba(165, 243, 252, 0.3);
    animation-delay: 1s;
}
.hero__content {
    position: relative;
    z-index: 1;
    max-width: 56rem;
    margin: 0 auto;
    animation: rise 0.6s ease-out;
}
.hero h1 {
    font-size: clamp(2.25rem, 6vw, 3.75rem);
    font-weight: 800;
    margin: 1.5rem 0;
}
.hero__tagline {
    font-size: 1.5rem;
    font-weight: 700;
    color: #374151;
}
.hero__summary {
    font-size: 1.2rem;
    color: #4b5563;
    margin-bottom: 2.5rem;
}
.hero__actions, .footer__actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
    align-items: center;
}
.logo {
    display: flex;
    justify-content: center;
}
.logo__image {
    width: 8rem;
    height: 8rem;
    object-fit: contain;
}
@media (min-width: 640px) {
    .logo__image { width: 10rem; height: 10rem; }
}
.logo--light .logo__image {
    filter: drop-shadow(0 0 12px rgba(255, 255, 255, 0.25));
}
.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.4rem 1rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 600;
}
.badge--default { background: #111827; color: #fff; }
.badge--secondary { background: linear-gradient(to right, #f3e8ff, #fce7f3); color: #7e22ce; }
.btn {
    border: none;
    border-radius: 0.6rem;
    padding: 0.75rem 1.5rem;
    font-weight: 600;
    cursor: pointer;
    color: #fff;
    transition: transform 0.2s, box-shadow 0.2s;
}
.btn:hover { transform: translateY(-2px); }
.btn--whatsapp {
    background: linear-gradient(to right, #22c55e, #059669);
    box-shadow: 0 10px 20px rgba(34, 197, 94, 0.3);
}
.btn--call {
    background: linear-gradient(to right, #3b82f6, #2563eb);
    box-shadow: 0 10px 20px rgba(59, 130, 246, 0.3);
}
.btn--link {
    background: none;
    color: #374151;
    box-shadow: none;
}
.btn--large { font-size: 1.1rem; padding: 1rem 2rem; }
.btn--small { font-size: 0.875rem; padding: 0.5rem 1rem; }
.services, .quote {
    padding: 3rem 1rem;
    max-width: 72rem;
    margin: 0 auto;
}
.services h2, .quote h2 {
    font-size: 2.25rem;
    font-weight: 800;
    text-align: center;
    margin-bottom: 3rem;
}
.warning-banner {
    margin-bottom: 1.5rem;
    padding: 1rem;
    background: #fef2f2;
    border-left: 4px solid #ef4444;
    border-radius: 0.5rem;
    color: #b91c1c;
    font-weight: 500;
    text-align: center;
    animation: rise 0.3s ease-out;
}
.services__grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 1.5rem;
}
.service-card {
    position: relative;
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    background: #fff;
    border: 2px solid #e5e7eb;
    border-radius: 0.75rem;
    cursor: pointer;
    overflow: hidden;
    transition: all 0.3s;
}
.service-card:hover { border-color: #d1d5db; box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08); }
.service-card.selected {
    border-color: #000;
    box-shadow: 0 20px 30px rgba(0, 0, 0, 0.12);
    transform: scale(1.02);
}
.service-card__icon {
    font-size: 1.75rem;
    padding: 1rem;
    border-radius: 0.75rem;
    background: #f3f4f6;
    transition: transform 0.3s;
}
.service-card.selected .service-card__icon { transform: scale(1.1) rotate(5deg); }
.accent-purple.selected .service-card__icon { background: linear-gradient(135deg, #a855f7, #ec4899); }
.accent-blue.selected .service-card__icon { background: linear-gradient(135deg, #3b82f6, #06b6d4); }
.accent-orange.selected .service-card__icon { background: linear-gradient(135deg, #f97316, #ef4444); }
.accent-green.selected .service-card__icon { background: linear-gradient(135deg, #22c55e, #10b981); }
.service-card__body { flex: 1; }
.service-card__header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.service-card__header h3 { font-size: 1.1rem; font-weight: 700; margin: 0 0 0.5rem; }
.service-card p { font-size: 0.875rem; color: #4b5563; margin: 0; }
.service-card__bar {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 4px;
    background: linear-gradient(to right, #a855f7, #ec4899, #f97316);
}
.checkbox { width: 1.25rem; height: 1.25rem; accent-color: #000; cursor: pointer; }
.quote { max-width: 42rem; }
.quote__card {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    background: #fff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
}
.field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.field-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.required { color: #ef4444; }
.input, .textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.6rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font: inherit;
}
.input--invalid { border-color: #ef4444; box-shadow: 0 0 0 1px #ef4444; }
.shake { animation: shake 0.5s; }
.add-ons { display: flex; flex-direction: column; gap: 0.5rem; }
.add-on { display: flex; align-items: center; gap: 0.5rem; }
.add-on label { margin: 0; font-weight: 400; color: #374151; cursor: pointer; }
.quote__submit { margin-top: 2rem; text-align: center; }
.trust {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem 3rem;
    padding: 3rem 1rem;
}
.trust__badge {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
    padding: 1.5rem 2rem;
    background: #fff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.06);
}
.trust__icon {
    font-size: 1.5rem;
    padding: 0.75rem;
    border-radius: 50%;
    background: linear-gradient(135deg, #f3e8ff, #fce7f3);
}
.trust__text { font-size: 0.875rem; font-weight: 700; }
.footer {
    padding: 4rem 1rem;
    text-align: center;
    color: #fff;
    background: linear-gradient(135deg, #111827, #1f2937, #000);
}
.footer p { color: #d1d5db; font-size: 1.1rem; margin-bottom: 2rem; }
.sticky-cta {
    position: fixed;
    left: 0;
    right: 0;
    bottom: 0;
    z-index: 50;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem;
    background: rgba(255, 255, 255, 0.95);
    border-top: 2px solid #e5e7eb;
    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.1);
    animation: slideUp 0.3s ease-out;
}
.sticky-cta__status { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; font-weight: 600; }
.sticky-cta__count { background: linear-gradient(to right, #a855f7, #ec4899); padding: 0.25rem 0.6rem; }
.sticky-cta__spacer { height: 5rem; }
@media (min-width: 640px) {
    .sticky-cta, .sticky-cta__spacer { display: none; }
}
.toast {
    position: fixed;
    top: 1rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 60;
    background: #000;
    color: #fff;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.25);
}
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    20%, 60% { transform: translateX(-6px); }
    40%, 80% { transform: translateX(6px); }
}
@keyframes rise {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideUp {
    from { opacity: 0; transform: translateY(100px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}
.reduce-motion *, .reduce-motion *::before, .reduce-motion *::after {
    animation: none !important;
    transition: none !important;
}
.reduce-motion .shake {
    animation: shake 0.5s !important;
}
"#;

#[cfg(test)]
mod tests {
    use super::HOME_STYLES;

    #[test]
    fn invalid_field_still_shakes_with_reduced_motion() {
        let reset = HOME_STYLES
            .find(".reduce-motion *,")
            .expect("reduced motion reset rule");
        let exemption = HOME_STYLES
            .find(".reduce-motion .shake {\n    animation: shake 0.5s !important;")
            .expect("shake exemption under reduced motion");
        assert!(exemption > reset, "exemption must come after the reset to win the cascade");
    }
}
