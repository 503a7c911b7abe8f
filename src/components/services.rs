use yew::prelude::*;

use crate::components::carousel::CarouselView;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::config::SERVICES_CAROUSEL;
use crate::content::SERVICES;
use crate::hooks::use_in_view;
use crate::whatsapp;

#[function_component(Services)]
pub fn services() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let slides: Vec<Html> = SERVICES
        .iter()
        .map(|service| {
            html! {
                <article class="service-card">
                    <div class="service-icon">{service.icon}</div>
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <WhatsAppButton message={whatsapp::service_message(service.title)} />
                </article>
            }
        })
        .collect();

    html! {
        <section id="servicos" class={classes!("section", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Nossos Serviços"}</span>
                <h2>{"O que podemos fazer por você"}</h2>
                <p>{"Soluções completas para sua casa, com qualidade e preço justo"}</p>
            </div>
            <CarouselView
                {slides}
                config={SERVICES_CAROUSEL}
                label="Serviços"
                class="services-carousel"
                show_dots={false}
            />
        </section>
    }
}
