use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, faq::Faq, floating_whatsapp::FloatingWhatsApp,
    footer::Footer, header::Header, hero::Hero, how_it_works::HowItWorks, pricing::Pricing,
    quick_cta::QuickCta, services::Services, testimonials::Testimonials,
    why_choose_us::WhyChooseUs,
};
use crate::seo;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            seo::install_structured_data();
            info!("Home mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header />
            <main>
                <Hero />
                <QuickCta />
                <Services />
                <About />
                <HowItWorks />
                <WhyChooseUs />
                <Pricing />
                <Testimonials />
                <Faq />
                <Contact />
            </main>
            <Footer />
            <FloatingWhatsApp />
        </div>
    }
}
