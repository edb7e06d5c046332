// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! The marketing copy is fixed at compile time. Business contact data
//! ([`BusinessInfo`]) has defaults here and can be overridden from the
//! `[business]` section of the settings file.

pub mod copy;

/// Pictogram shown next to a piece of content. The presentation layer maps
/// each glyph to an icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Building,
    Brush,
    Wrench,
    Door,
    TrendingDown,
    ShieldAlert,
    Eye,
    CheckCircle,
}

/// Accent used by a pain-point card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Neutral,
}

/// A service offered by the contractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

/// A warning sign that the building needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainPoint {
    pub title: &'static str,
    pub body: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

/// A reason to choose the contractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub text: &'static str,
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Page sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    /// All navigable sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Início",
            Section::Services => "Serviços",
            Section::Portfolio => "Portfólio",
            Section::Contact => "Contato",
        }
    }

    /// Anchor slug (accent-free, lowercase).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::Services => "servicos",
            Section::Portfolio => "portfolio",
            Section::Contact => "contato",
        }
    }
}

/// Contact data of the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessInfo {
    pub name: String,
    /// Street address, also used as the location lookup query.
    pub address: String,
    /// Phone number as displayed in the footer.
    pub phone_display: String,
    /// WhatsApp number (digits only, with country code) behind the quote buttons.
    pub whatsapp_number: String,
    /// WhatsApp number behind the floating button.
    pub whatsapp_floating_number: String,
    /// Pre-filled WhatsApp message.
    pub whatsapp_message: String,
    pub copyright_year: u16,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Vertical Cor".to_string(),
            address: "R. Papa João Paulo II, 4000 - Ataíde, Vila Velha - ES".to_string(),
            phone_display: "(27) 99999-9999".to_string(),
            whatsapp_number: "5527999999999".to_string(),
            whatsapp_floating_number: "5527999351626".to_string(),
            whatsapp_message: "Olá! Gostaria de um orçamento para pintura predial.".to_string(),
            copyright_year: 2025,
        }
    }
}

impl BusinessInfo {
    /// Copyright line of the footer.
    #[must_use]
    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. Todos os direitos reservados.",
            self.copyright_year, self.name
        )
    }
}

pub const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        title: "Pintura Predial",
        description: "Restauração completa e lavagem de fachadas.",
        glyph: Glyph::Building,
    },
    ServiceItem {
        title: "Efeitos Decorativos",
        description: "Cimento Queimado, Marmorato e Texturas (Alta tendência).",
        glyph: Glyph::Brush,
    },
    ServiceItem {
        title: "Tratamento de Superfícies",
        description: "Impermeabilização, reparo de trincas e Drywall.",
        glyph: Glyph::Wrench,
    },
    ServiceItem {
        title: "Acabamentos Especiais",
        description: "Verniz em madeiras e pintura de portas.",
        glyph: Glyph::Door,
    },
];

pub const PAIN_POINTS: [PainPoint; 3] = [
    PainPoint {
        title: "Desvalorização",
        body: "Pintura descascada e suja reduz em até 20% o valor de venda ou aluguel.",
        glyph: Glyph::TrendingDown,
        tone: Tone::Danger,
    },
    PainPoint {
        title: "Infiltrações",
        body: "Pequenas trincas hoje tornam-se grandes prejuízos estruturais amanhã.",
        glyph: Glyph::ShieldAlert,
        tone: Tone::Warning,
    },
    PainPoint {
        title: "Má Impressão",
        body: "O que seus clientes ou visitas pensam ao ver sua fachada mal cuidada?",
        glyph: Glyph::Eye,
        tone: Tone::Neutral,
    },
];

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Limpeza Extrema",
        text: "Protegemos seu piso e móveis. Entregamos a obra limpa.",
    },
    Benefit {
        title: "Prazo Garantido",
        text: "Cronograma seguido à risca.",
    },
    Benefit {
        title: "Materiais Premium",
        text: "Só trabalhamos com tintas e insumos de primeira linha.",
    },
    Benefit {
        title: "Orçamento Transparente",
        text: "Sem surpresas no final da obra.",
    },
];

pub const FAQS: [FaqItem; 4] = [
    FaqItem {
        question: "Vocês cobram pelo orçamento?",
        answer: "Não! A visita técnica e o orçamento são 100% gratuitos em Vila Velha e região.",
    },
    FaqItem {
        question: "A pintura faz muita sujeira?",
        answer: "Nossa equipe segue um protocolo rigoroso de isolamento de áreas. A limpeza é nossa prioridade e protegemos pisos e móveis.",
    },
    FaqItem {
        question: "Aceitam cartão de crédito?",
        answer: "Sim, parcelamos seu projeto para facilitar a realização do serviço.",
    },
    FaqItem {
        question: "Qual o prazo médio de uma obra?",
        answer: "Depende do tamanho do projeto, mas estabelecemos um cronograma fixo no contrato e seguimos à risca.",
    },
];
