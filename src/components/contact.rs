use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::config::SERVICE_AREA;
use crate::content::SERVICE_OPTIONS;
use crate::hooks::use_in_view;
use crate::hours::HOURS;
use crate::whatsapp::{self, messages, ContactRequest, Urgency};

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let form = use_state(ContactRequest::default);
    let open_now = HOURS.is_open_now();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactRequest { name: input.value(), ..(*form).clone() });
        })
    };

    let on_neighborhood = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactRequest { neighborhood: input.value(), ..(*form).clone() });
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactRequest { service: select.value(), ..(*form).clone() });
        })
    };

    let on_urgency = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactRequest {
                urgency: Urgency::from_value(&select.value()),
                ..(*form).clone()
            });
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactRequest { description: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Contact form submitted");
            whatsapp::open_chat(&form.message());
        })
    };

    html! {
        <section id="contato" class={classes!("section", "contact", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="section-header">
                <span class="eyebrow">{"Contato"}</span>
                <h2>{"Fale comigo agora"}</h2>
                <p>{"Preencha o formulário ou chame direto no WhatsApp. Respondo rápido e passo o orçamento sem compromisso."}</p>
            </div>
            <div class="contact-grid">
                <div class="contact-info">
                    <div class="info-card">
                        <h4>{"Horário de atendimento"}</h4>
                        <p>{HOURS.summary()}</p>
                        <span class={classes!("status", if open_now { "open" } else { "closed" })}>
                            { if open_now { "Atendendo agora" } else { "Fora do horário, deixe sua mensagem" } }
                        </span>
                    </div>
                    <div class="info-card">
                        <h4>{"Região de atendimento"}</h4>
                        <p>{SERVICE_AREA}</p>
                    </div>
                    <div class="info-card">
                        <h4>{"Resposta rápida"}</h4>
                        <p>{"Respondo em até 2 horas no horário comercial"}</p>
                    </div>
                    <WhatsAppButton message={messages::CONTACT} label="Chamar direto no WhatsApp" />
                </div>

                <form class="contact-form" {onsubmit}>
                    <label>
                        {"Seu nome"}
                        <input type="text" placeholder="Como posso te chamar?" value={form.name.clone()} oninput={on_name} />
                    </label>
                    <label>
                        {"Bairro"}
                        <input type="text" placeholder="Onde você mora?" value={form.neighborhood.clone()} oninput={on_neighborhood} />
                    </label>
                    <label>
                        {"Serviço"}
                        <select onchange={on_service}>
                            <option value="" selected={form.service.is_empty()}>{"Selecione o serviço"}</option>
                            { for SERVICE_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={form.service == *option}>{*option}</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        {"Urgência"}
                        <select onchange={on_urgency}>
                            <option value="" selected={form.urgency.is_none()}>{"Quando precisa?"}</option>
                            { for Urgency::ALL.iter().map(|urgency| html! {
                                <option value={urgency.value()} selected={form.urgency == Some(*urgency)}>
                                    {urgency.label()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label>
                        {"Descreva o problema"}
                        <textarea
                            rows="4"
                            placeholder="Conte um pouco sobre o que precisa"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </label>
                    <button type="submit" class="whatsapp-button submit">{"Enviar pelo WhatsApp"}</button>
                </form>
            </div>
        </section>
    }
}
