use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::whatsapp::messages;

#[function_component(QuickCta)]
pub fn quick_cta() -> Html {
    html! {
        <section class="quick-cta">
            <p>{"📲 Chame no WhatsApp e receba resposta rápida"}</p>
            <WhatsAppButton message={messages::QUICK_CTA} label="Chamar agora" />
        </section>
    }
}
