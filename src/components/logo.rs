use yew::prelude::*;

use crate::config::BUSINESS_NAME;

const LOGO_SRC: &str = "/JS LOGO.png";
const LOGO_SIZE: &str = "200";

#[derive(Clone, Copy, PartialEq, Default)]
pub enum LogoVariant {
    #[default]
    Default,
    /// For dark backgrounds.
    Light,
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub variant: LogoVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let variant_class = match props.variant {
        LogoVariant::Default => "logo--default",
        LogoVariant::Light => "logo--light",
    };

    html! {
        <div class={classes!("logo", variant_class, props.class.clone())}>
            <img
                src={LOGO_SRC}
                alt={format!("{} Logo", BUSINESS_NAME)}
                width={LOGO_SIZE}
                height={LOGO_SIZE}
                class="logo__image"
            />
        </div>
    }
}
