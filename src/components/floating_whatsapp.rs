use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::whatsapp::messages;

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    html! {
        <div class="floating-whatsapp" aria-label="Chamar no WhatsApp">
            <WhatsAppButton message={messages::FLOATING} label="WhatsApp" />
        </div>
    }
}
