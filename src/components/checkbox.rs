use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,
    pub onchange: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Set when the checkbox sits inside a clickable card, so a click on the
    /// box doesn't also reach the card's handler and toggle twice.
    #[prop_or_default]
    pub stop_propagation: bool,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |_: Event| onchange.emit(()))
    };

    let onclick = {
        let stop = props.stop_propagation;
        Callback::from(move |e: MouseEvent| {
            if stop {
                e.stop_propagation();
            }
        })
    };

    html! {
        <input
            type="checkbox"
            id={props.id.clone()}
            class={classes!("checkbox", props.class.clone())}
            checked={props.checked}
            {onchange}
            {onclick}
        />
    }
}
