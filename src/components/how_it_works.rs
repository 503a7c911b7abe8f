use yew::prelude::*;

use crate::components::carousel::CarouselView;
use crate::config::GALLERY_CAROUSEL;
use crate::content::{GALLERY, STEPS};
use crate::hooks::use_in_view;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let photos: Vec<Html> = GALLERY
        .iter()
        .map(|photo| {
            html! {
                <figure class="gallery-photo">
                    <img src={photo.src} alt={photo.alt} loading="lazy" draggable="false" />
                    <figcaption>{photo.alt}</figcaption>
                </figure>
            }
        })
        .collect();

    html! {
        <section id="como-funciona" class={classes!("section", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Como Funciona"}</span>
                <h2>{"Simples, rápido e sem burocracia"}</h2>
                <p>{format!("Em {} passos você resolve seu problema em casa", STEPS.len())}</p>
            </div>
            <ol class="steps">
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li class="step" style={format!("--step-delay: {}ms;", 500 + i * 350)}>
                        <span class="step-number">{step.number}</span>
                        <span class="step-icon">{step.icon}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </li>
                }) }
            </ol>
            <CarouselView
                slides={photos}
                config={GALLERY_CAROUSEL}
                label="Serviços realizados"
                class="gallery"
                show_arrows={false}
            />
        </section>
    }
}
