use yew::prelude::*;

use crate::components::carousel::CarouselView;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::config::TESTIMONIALS_CAROUSEL;
use crate::content::TESTIMONIALS;
use crate::hooks::use_in_view;
use crate::whatsapp::messages;

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let slides: Vec<Html> = TESTIMONIALS
        .iter()
        .map(|t| {
            html! {
                <blockquote class="testimonial">
                    <span class="quote-mark" aria-hidden="true">{"“"}</span>
                    <div class="stars" aria-label={format!("{} de 5 estrelas", t.rating)}>{stars(t.rating)}</div>
                    <p>{t.text}</p>
                    <footer>
                        <strong>{t.name}</strong>
                        <span>{t.location}</span>
                    </footer>
                </blockquote>
            }
        })
        .collect();

    html! {
        <section id="depoimentos" class={classes!("section", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Depoimentos"}</span>
                <h2>{"O que dizem os clientes"}</h2>
            </div>
            <CarouselView {slides} config={TESTIMONIALS_CAROUSEL} label="Depoimentos" class="testimonials" />
            <WhatsAppButton message={messages::TESTIMONIALS} label="Quero meu orçamento também" />
        </section>
    }
}
