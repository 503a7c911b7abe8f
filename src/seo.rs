use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};
use web_sys::window;

use crate::config;
use crate::content::{Faq, FAQS, SERVICES};
use crate::hours::HOURS;

const SCRIPT_ID: &str = "structured-data";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Question<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    accepted_answer: Answer<'a>,
}

#[derive(Serialize)]
struct Answer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

impl<'a> From<&'a Faq> for Question<'a> {
    fn from(faq: &'a Faq) -> Self {
        Question {
            kind: "Question",
            name: faq.question,
            accepted_answer: Answer {
                kind: "Answer",
                text: faq.answer,
            },
        }
    }
}

pub fn business_schema() -> Value {
    json!({
        "@type": "HomeAndConstructionBusiness",
        "name": config::BUSINESS_NAME,
        "url": config::get_site_url(),
        "telephone": format!("+{}", config::WHATSAPP_NUMBER),
        "openingHours": HOURS.schema_value(),
        "areaServed": config::SERVICE_AREA,
        "sameAs": [config::INSTAGRAM_URL],
        "makesOffer": SERVICES
            .iter()
            .map(|s| json!({
                "@type": "Offer",
                "itemOffered": { "@type": "Service", "name": s.title, "description": s.description }
            }))
            .collect::<Vec<_>>(),
    })
}

pub fn faq_schema(faqs: &[Faq]) -> Value {
    let questions: Vec<Question> = faqs.iter().map(Question::from).collect();
    json!({
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@graph": [business_schema(), faq_schema(FAQS)],
    })
}

/// Adds the JSON-LD script to `<head>` once; later calls leave it alone.
pub fn install_structured_data() {
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("No document, skipping structured data");
        return;
    };
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        warn!("Document has no <head>, skipping structured data");
        return;
    };
    let script = match document.create_element("script") {
        Ok(script) => script,
        Err(e) => {
            warn!("Could not create structured data script: {:?}", e);
            return;
        }
    };
    script.set_id(SCRIPT_ID);
    let _ = script.set_attribute("type", "application/ld+json");
    script.set_text_content(Some(&structured_data().to_string()));
    if let Err(e) = head.append_child(&script) {
        warn!("Could not append structured data: {:?}", e);
        return;
    }
    debug!("Structured data installed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_page_lists_every_question() {
        let schema = faq_schema(FAQS);
        let entities = schema["mainEntity"].as_array().expect("array");
        assert_eq!(entities.len(), FAQS.len());
        assert_eq!(entities[0]["@type"], "Question");
        assert_eq!(entities[0]["name"], FAQS[0].question);
        assert_eq!(entities[0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(entities[0]["acceptedAnswer"]["text"], FAQS[0].answer);
    }

    #[test]
    fn business_carries_contact_and_hours() {
        let schema = business_schema();
        assert_eq!(schema["name"], "PH Soluções Residenciais");
        assert_eq!(schema["telephone"], "+5511968888724");
        assert_eq!(schema["openingHours"], "Mo-Sa 07:00-19:00");
        assert_eq!(
            schema["makesOffer"].as_array().map(Vec::len),
            Some(SERVICES.len())
        );
    }

    #[test]
    fn graph_has_both_nodes() {
        let data = structured_data();
        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(data["@graph"].as_array().map(Vec::len), Some(2));
    }
}
