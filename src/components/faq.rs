use yew::prelude::*;

use crate::content::FAQS;
use crate::hooks::use_in_view;

/// Only one answer is shown at a time. Clicking the open question closes it.
fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class={classes!("section", "faq-section", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Dúvidas"}</span>
                <h2>{"Perguntas frequentes"}</h2>
            </div>
            { for FAQS.iter().enumerate().map(|(i, faq)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(toggled(*open, i)))
                };
                html! {
                    <FaqItem
                        question={faq.question}
                        answer={faq.answer}
                        open={*open == Some(i)}
                        {on_toggle}
                    />
                }
            }) }
        </section>
    }
}
