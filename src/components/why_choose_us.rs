use yew::prelude::*;

use crate::content::FEATURES;
use crate::hooks::use_in_view;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section class={classes!("section", "why-us", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Por que escolher"}</span>
                <h2>{"Serviço bem feito, do orçamento ao acabamento"}</h2>
            </div>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-item">
                        <span class="feature-icon">{feature.icon}</span>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
