use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::content::PRICES;
use crate::hooks::use_in_view;
use crate::whatsapp::messages;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="precos" class={classes!("section", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Preços"}</span>
                <h2>{"Exemplos de valores"}</h2>
                <p>{"Valor final sempre combinado antes do serviço, sem surpresas"}</p>
            </div>
            <div class="price-grid">
                { for PRICES.iter().map(|example| html! {
                    <div class="price-card">
                        <span class="price-icon">{example.icon}</span>
                        <h3>{example.title}</h3>
                        <p class="price">{example.price}</p>
                    </div>
                }) }
            </div>
            <p class="price-note">
                {"ℹ Os valores podem variar conforme a complexidade. Mande uma foto pelo WhatsApp para um orçamento exato."}
            </p>
            <WhatsAppButton message={messages::PRICING} label="Pedir orçamento exato" />
        </section>
    }
}
