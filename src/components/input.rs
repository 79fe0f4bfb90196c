use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub shaking: bool,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    html! {
        <input
            ref={props.node_ref.clone()}
            type={props.input_type.clone()}
            class={classes!(
                "input",
                props.invalid.then_some("input--invalid"),
                props.shaking.then_some("shake"),
            )}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            aria-invalid={if props.invalid { "true" } else { "false" }}
            {oninput}
        />
    }
}
