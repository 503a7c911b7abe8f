use log::{info, warn};
use web_sys::window;

use crate::config::WHATSAPP_NUMBER;

/// Pre-filled messages for the fixed calls to action.
pub mod messages {
    pub const HEADER: &str = "Olá! Gostaria de saber mais sobre os serviços da PH Soluções Residenciais.";
    pub const HERO: &str = "Olá! Quero solicitar um orçamento para serviços residenciais.";
    pub const QUICK_CTA: &str = "Olá! Preciso de um serviço residencial. Pode me ajudar?";
    pub const FLOATING: &str = "Olá! Preciso de um serviço residencial.";
    pub const TESTIMONIALS: &str = "Olá! Vi os depoimentos e quero um orçamento também!";
    pub const PRICING: &str = "Olá! Vi os preços no site e gostaria de um orçamento.";
    pub const CONTACT: &str = "Olá! Quero falar sobre um serviço.";
    pub const FOOTER: &str = "Olá! Gostaria de mais informações sobre os serviços.";
}

pub fn chat_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

pub fn service_message(service: &str) -> String {
    format!(
        "Olá! Tenho interesse no serviço de {}. Pode me passar mais informações?",
        service
    )
}

/// Opens the chat in a new tab. A blocked popup is only logged.
pub fn open_chat(message: &str) {
    let url = chat_url(message);
    match window().map(|w| w.open_with_url_and_target(&url, "_blank")) {
        Some(Ok(_)) => info!("Opened WhatsApp chat"),
        Some(Err(e)) => warn!("Could not open WhatsApp chat: {:?}", e),
        None => warn!("No window to open WhatsApp chat from"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Today,
    ThisWeek,
    NoRush,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Today, Urgency::ThisWeek, Urgency::NoRush];

    /// Form value of the option.
    pub fn value(self) -> &'static str {
        match self {
            Urgency::Today => "hoje",
            Urgency::ThisWeek => "semana",
            Urgency::NoRush => "sem-pressa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Today => "Hoje (urgente)",
            Urgency::ThisWeek => "Essa semana",
            Urgency::NoRush => "Sem pressa",
        }
    }

    pub fn from_value(value: &str) -> Option<Urgency> {
        Urgency::ALL.into_iter().find(|u| u.value() == value)
    }
}

/// Contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub neighborhood: String,
    pub service: String,
    pub urgency: Option<Urgency>,
    pub description: String,
}

impl ContactRequest {
    pub fn message(&self) -> String {
        let name = self.name.trim();
        let mut message = format!(
            "Olá! Meu nome é {}.",
            if name.is_empty() { "não informado" } else { name }
        );

        let neighborhood = self.neighborhood.trim();
        if !neighborhood.is_empty() {
            message.push_str(&format!(" Moro em {}.", neighborhood));
        }
        let service = self.service.trim();
        if !service.is_empty() {
            message.push_str(&format!(" Preciso de: {}.", service));
        }
        if let Some(urgency) = self.urgency {
            message.push_str(&format!(" Urgência: {}.", urgency.label()));
        }
        let description = self.description.trim();
        if !description.is_empty() {
            message.push_str(&format!(" Detalhes: {}", description));
        }
        message
    }
}
