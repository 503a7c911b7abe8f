//! Copy and static data shown on the page.

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "inicio", label: "Início" },
    NavLink { id: "servicos", label: "Serviços" },
    NavLink { id: "sobre", label: "Sobre" },
    NavLink { id: "como-funciona", label: "Como Funciona" },
    NavLink { id: "depoimentos", label: "Depoimentos" },
    NavLink { id: "faq", label: "FAQ" },
    NavLink { id: "contato", label: "Contato" },
];

pub const HERO_WORDS: &[&str] = &["Elétrica", "Hidráulica", "Reparos", "Manutenção", "Instalações"];

pub const TRUST_BADGES: &[&str] = &["Orçamento Grátis", "Resposta Rápida", "Garantia"];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "⚡",
        title: "Elétrica Residencial",
        description: "Tomadas, disjuntores, chuveiro elétrico e luminárias",
    },
    Service {
        icon: "💡",
        title: "Instalações",
        description: "Lustres, ventilador de teto, TV, suportes e prateleiras",
    },
    Service {
        icon: "🔧",
        title: "Reparos e Manutenção",
        description: "Ajustes, consertos e troca de peças em geral",
    },
    Service {
        icon: "⏱",
        title: "Soluções Rápidas",
        description: "Pequenos chamados do dia a dia resolvidos com agilidade",
    },
];

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 15, suffix: "+", label: "Anos de Experiência" },
    Stat { value: 800, suffix: "+", label: "Clientes Atendidos" },
    Stat { value: 999, suffix: "+", label: "Serviços Realizados" },
];

pub struct Step {
    pub icon: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        icon: "💬",
        number: "01",
        title: "Você chama no WhatsApp",
        description: "Entre em contato de forma rápida e prática pelo WhatsApp",
    },
    Step {
        icon: "📷",
        number: "02",
        title: "Manda foto ou vídeo",
        description: "Envie imagens do problema para eu avaliar melhor",
    },
    Step {
        icon: "📄",
        number: "03",
        title: "Recebe orientação e orçamento",
        description: "Passo o diagnóstico e valor antes de qualquer serviço",
    },
    Step {
        icon: "✅",
        number: "04",
        title: "Agendamos e resolvo no local",
        description: "Vou até você no melhor horário e resolvo o problema",
    },
];

pub struct GalleryPhoto {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryPhoto] = &[
    GalleryPhoto { src: "/assets/gallery/quadro-eletrico.jpg", alt: "Organização de quadro elétrico" },
    GalleryPhoto { src: "/assets/gallery/chuveiro.jpg", alt: "Troca de resistência de chuveiro" },
    GalleryPhoto { src: "/assets/gallery/ventilador.jpg", alt: "Instalação de ventilador de teto" },
    GalleryPhoto { src: "/assets/gallery/luminaria.jpg", alt: "Instalação de luminária" },
    GalleryPhoto { src: "/assets/gallery/suporte-tv.jpg", alt: "Suporte de TV instalado" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "👁",
        title: "Transparência no orçamento",
        description: "Você sabe o valor antes de eu começar qualquer serviço",
    },
    Feature {
        icon: "⏰",
        title: "Pontualidade e respeito",
        description: "Chego no horário combinado e respeito sua casa",
    },
    Feature {
        icon: "✨",
        title: "Capricho e acabamento",
        description: "Trabalho com atenção aos detalhes e qualidade",
    },
    Feature {
        icon: "🛡",
        title: "Segurança no serviço elétrico",
        description: "Sigo todas as normas de segurança para sua tranquilidade",
    },
    Feature {
        icon: "💬",
        title: "Atendimento simples e rápido",
        description: "WhatsApp direto comigo, sem enrolação",
    },
];

pub struct PriceExample {
    pub icon: &'static str,
    pub title: &'static str,
    pub price: &'static str,
}

pub const PRICES: &[PriceExample] = &[
    PriceExample { icon: "🔌", title: "Troca de tomada", price: "A partir de R$ 50" },
    PriceExample { icon: "💡", title: "Instalação de luminária", price: "A partir de R$ 60" },
    PriceExample { icon: "⚡", title: "Troca de disjuntor", price: "A partir de R$ 80" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Maria Aparecida",
        location: "Zona Sul",
        text: "Resolveu rápido e ficou perfeito! Meu chuveiro não esquentava e ele trocou a resistência em menos de uma hora.",
        rating: 5,
    },
    Testimonial {
        name: "Carlos Eduardo",
        location: "Centro",
        text: "Explicou tudo direitinho e cobrou justo. Já indiquei pra toda família.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Paula",
        location: "Zona Norte",
        text: "Super pontual e educado. Instalou meu ventilador de teto e deixou tudo limpinho.",
        rating: 5,
    },
    Testimonial {
        name: "Roberto Silva",
        location: "Zona Oeste",
        text: "Finalmente um eletricista de confiança! Fez o serviço certinho e deu garantia.",
        rating: 5,
    },
    Testimonial {
        name: "Lucia Santos",
        location: "Zona Leste",
        text: "Mandei foto pelo WhatsApp e ele já passou o orçamento na hora. Muito prático!",
        rating: 5,
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Você atende quais regiões?",
        answer: "Atendo toda a região metropolitana. Mande sua localização pelo WhatsApp que confirmo a disponibilidade na sua área.",
    },
    Faq {
        question: "Faz orçamento por WhatsApp?",
        answer: "Sim! Mande fotos ou vídeos do problema e passo o orçamento sem compromisso. Simples e rápido.",
    },
    Faq {
        question: "Tem garantia no serviço?",
        answer: "Todos os serviços têm garantia. Se houver qualquer problema relacionado ao trabalho feito, volto sem custo adicional.",
    },
    Faq {
        question: "Atende aos finais de semana?",
        answer: "Sim, atendo de segunda a sábado. Domingos e feriados apenas em casos de urgência, com taxa adicional.",
    },
    Faq {
        question: "O que preciso enviar pra você avaliar?",
        answer: "Fotos ou vídeos do problema ajudam muito. Se for elétrica, mostre o disjuntor e a área afetada. Quanto mais detalhes, melhor o orçamento.",
    },
    Faq {
        question: "Quanto tempo demora pra responder?",
        answer: "Respondo em até 2 horas durante o horário comercial. Urgências são atendidas mais rápido.",
    },
];

pub const SERVICE_OPTIONS: &[&str] = &[
    "Elétrica residencial",
    "Instalação de luminária",
    "Instalação de ventilador de teto",
    "Troca de tomada/interruptor",
    "Problema no disjuntor",
    "Instalação de chuveiro",
    "Montagem/instalação",
    "Outro serviço",
];
