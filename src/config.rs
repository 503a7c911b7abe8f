use crate::carousel::CarouselConfig;

/// Number every call to action opens a chat with, in wa.me format (country code, no `+`).
pub const WHATSAPP_NUMBER: &str = "5511968888724";

pub const BUSINESS_NAME: &str = "PH Soluções Residenciais";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/borboremaae";
pub const SERVICE_AREA: &str = "Região Metropolitana de São Paulo";

pub const SERVICES_CAROUSEL: CarouselConfig = CarouselConfig::new(3500, 1500, 30.0);
pub const TESTIMONIALS_CAROUSEL: CarouselConfig = CarouselConfig::new(5000, 5000, 30.0);
pub const GALLERY_CAROUSEL: CarouselConfig = CarouselConfig::new(2500, 3000, 30.0);

/// Interval of the rotating word in the hero headline.
pub const HERO_FLIP_MS: u32 = 2500;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://phsolucoesresidenciais.com.br"
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
