use chrono::{Datelike, Utc};
use chrono_tz::America::Sao_Paulo;
use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::config::{BUSINESS_NAME, INSTAGRAM_URL, SERVICE_AREA};
use crate::content::NAV_LINKS;
use crate::hours::HOURS;
use crate::whatsapp::messages;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().with_timezone(&Sao_Paulo).year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <a href="#inicio" class="footer-logo">
                        <img src="/assets/logo.png" alt={BUSINESS_NAME} />
                    </a>
                    <p>
                        {"Soluções rápidas e serviço bem feito para sua casa. Elétrica, hidráulica, instalações e reparos com qualidade e transparência."}
                    </p>
                    <p class="footer-contact">{"📍 "}{SERVICE_AREA}</p>
                    <p class="footer-contact">{"🕖 "}{HOURS.summary()}</p>
                </div>
                <nav class="footer-links">
                    <h4>{"Navegação"}</h4>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={format!("#{}", link.id)}>{link.label}</a>
                    }) }
                </nav>
                <div class="footer-cta">
                    <h4>{"Fale comigo"}</h4>
                    <WhatsAppButton message={messages::FOOTER} />
                    <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-link">
                        {"Instagram"}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. Todos os direitos reservados.", year, BUSINESS_NAME)}
            </div>
        </footer>
    }
}
