use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::config::HERO_FLIP_MS;
use crate::content::{HERO_WORDS, TRUST_BADGES};
use crate::whatsapp::messages;

#[derive(Properties, PartialEq)]
pub struct TextFlipProps {
    pub words: &'static [&'static str],
    pub interval_ms: u32,
}

/// Cycles through `words` in place. The longest word reserves the width.
#[function_component(TextFlip)]
pub fn text_flip(props: &TextFlipProps) -> Html {
    let current = use_state(|| 0usize);
    let len = props.words.len();

    {
        let current = current.clone();
        use_interval(
            move || {
                if len > 0 {
                    current.set((*current + 1) % len);
                }
            },
            if len > 1 { props.interval_ms } else { 0 },
        );
    }

    let longest = props
        .words
        .iter()
        .copied()
        .max_by_key(|w| w.chars().count())
        .unwrap_or("");
    let word = props.words.get(*current).copied().unwrap_or("");

    html! {
        <span class="text-flip">
            <span class="text-flip-word" key={*current}>{word}</span>
            <span class="text-flip-sizer" aria-hidden="true">{longest}</span>
        </span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="inicio" class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="trust-badges">
                    { for TRUST_BADGES.iter().map(|badge| html! {
                        <span class="trust-badge">{"✔ "}{*badge}</span>
                    }) }
                </div>
                <h1>
                    <span>{"Soluções"}</span>
                    <TextFlip words={HERO_WORDS} interval_ms={HERO_FLIP_MS} />
                </h1>
                <p class="hero-subtitle">
                    {"Atendimento rápido e confiável para sua casa. Pequenos reparos e soluções completas com agilidade."}
                </p>
                <div class="hero-cta-group">
                    <WhatsAppButton message={messages::HERO} label="Pedir orçamento" class="hero-cta" />
                    <a href="#servicos" class="hero-secondary">{"Ver serviços"}</a>
                </div>
            </div>
        </section>
    }
}
