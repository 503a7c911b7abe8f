use yew::prelude::*;

use crate::whatsapp;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Chamar no WhatsApp"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let onclick = {
        let message = props.message.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            whatsapp::open_chat(&message);
        })
    };

    html! {
        <button class={classes!("whatsapp-button", props.class.clone())} {onclick}>
            <span class="whatsapp-icon" aria-hidden="true">{"🟢"}</span>
            <span>{props.label.clone()}</span>
        </button>
    }
}
