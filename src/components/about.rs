use yew::prelude::*;

use crate::content::{Stat, STATS};
use crate::hooks::{use_count_up, use_in_view};

const COUNT_UP_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    value: u32,
    suffix: &'static str,
    label: &'static str,
    active: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let count = use_count_up(props.value, COUNT_UP_MS, props.active);

    html! {
        <div class="stat">
            <span class="stat-value">{count}{props.suffix}</span>
            <span class="stat-label">{props.label}</span>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="sobre" class={classes!("section", "about", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="about-image">
                <img src="/assets/sobre.jpg" alt="PH Soluções Residenciais" loading="lazy" />
                <div class="about-badge">
                    <strong>{"PH"}</strong>
                    <span>{"Soluções Residenciais"}</span>
                </div>
            </div>
            <div class="about-content">
                <span class="eyebrow">{"Sobre"}</span>
                <h2>{"Experiência e cuidado em cada serviço"}</h2>
                <p>
                    {"Trabalho com elétrica, instalações e reparos residenciais, com atenção aos detalhes e respeito pela sua casa."}
                </p>
                <p>
                    {"Tradição e modernidade se encontram para resolver seus problemas com rapidez, segurança e preço justo."}
                </p>
                <div class="stats">
                    { for STATS.iter().map(|Stat { value, suffix, label }| html! {
                        <StatCounter value={*value} suffix={*suffix} label={*label} active={in_view} />
                    }) }
                </div>
            </div>
        </section>
    }
}
