// SPDX-License-Identifier: MPL-2.0
//! Headlines and body copy of each page section.

pub mod hero {
    pub const TITLE: &str = "Sua fachada é o seu cartão de visitas.";
    pub const TITLE_ACCENT: &str = "Não deixe seu patrimônio desvalorizar.";
    pub const SUBTITLE: &str =
        "Especialistas em pintura predial, residencial e acabamentos de alto padrão em Vila Velha.";
    pub const CTA: &str = "QUERO VALORIZAR MEU IMÓVEL";
}

pub mod showcase {
    pub const TITLE: &str = "Qualidade que valoriza seu imóvel";
    pub const BODY: &str = "Assista ao vídeo e veja como nosso processo de pintura predial transforma e protege seu patrimônio com excelência.";
    pub const CAPTION: &str = "Vídeo Institucional - 01:30";
}

pub mod pain {
    pub const TITLE: &str = "Sinais de que seu imóvel pede socorro";
}

pub mod services {
    pub const EYEBROW: &str = "NOSSA EXPERTISE";
    pub const TITLE: &str = "Acabamento Fino e\nProteção Duradoura";
    pub const BODY: &str = "Utilizamos técnicas avançadas e materiais de alta performance para garantir durabilidade extrema.";
}

pub mod portfolio {
    pub const TITLE: &str = "Veja a Transformação";
    pub const BODY: &str = "Arraste para ver o resultado do Padrão Vertical Cor.";
    pub const CTA: &str = "Quero esse resultado";
    pub const DISCLAIMER: &str = "Imagens meramente ilustrativas para demonstração da interface";
}

pub mod comparison {
    pub const BEFORE_BADGE: &str = "ANTES";
    pub const AFTER_BADGE: &str = "DEPOIS";
    pub const CAPTION: &str = "Arraste para comparar";
    pub const LOADING: &str = "Carregando imagens…";
}

pub mod benefits {
    pub const TITLE: &str = "Por que escolher a Vertical Cor?";
}

pub mod faq {
    pub const TITLE: &str = "Dúvidas Frequentes";
}

pub mod contact {
    pub const TITLE: &str = "Pronto para transformar seu imóvel?";
    pub const BODY: &str = "Entre em contato hoje e receba uma visita técnica gratuita de um engenheiro ou técnico especializado.";
    pub const NAME_PLACEHOLDER: &str = "Seu nome completo";
    pub const PHONE_PLACEHOLDER: &str = "(27) 99999-9999";
    pub const SUBMIT: &str = "SOLICITAR ORÇAMENTO";
    pub const TAGLINE: &str = "Excelência em pintura predial e acabamentos.";
    pub const AVAILABILITY: &str = "Equipes disponíveis para início imediato";
    pub const PRIVACY: &str = "Política de Privacidade";
    pub const TERMS: &str = "Termos de Uso";
}

pub mod location {
    pub const TITLE: &str = "Localização";
    pub const SEARCHING: &str = "Buscando localização exata via satélite...";
    pub const OPEN_MAP: &str = "Abrir no Google Maps";
    pub const FALLBACK_LINK: &str = "Ver no Mapa";
    pub const SUMMARY_UNAVAILABLE: &str = "Informação de mapa não disponível no momento.";
}

pub mod header {
    pub const WORDMARK_TOP: &str = "VERTICAL";
    pub const WORDMARK_BOTTOM: &str = "COR";
    pub const QUOTE: &str = "Orçamento";
    pub const QUOTE_WHATSAPP: &str = "Orçamento via WhatsApp";
    pub const LOGO_FALLBACK: &str = "V";
}

pub mod notice {
    pub const LINK_COPIED: &str = "Link copiado para a área de transferência";
    pub const LOCATION_UNAVAILABLE: &str =
        "Localização exata indisponível; use o link \"Ver no Mapa\"";
    pub const CONFIG_FALLBACK: &str =
        "Não foi possível ler settings.toml; usando configuração padrão";
}
