// 多言語対応 - フォームの文言テーブル (en / es / ca)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Ca,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Ca];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ca => "ca",
        }
    }

    /// Name shown in the language menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Ca => "Català",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "ca" => Ok(Language::Ca),
            other => Err(AppError::validation(
                "language",
                format!("unsupported language code: {other}"),
            )),
        }
    }
}

/// Every user-visible string of the form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub explanation: &'static str,
    pub message_label: &'static str,
    pub start_color: &'static str,
    pub end_color: &'static str,
    pub opacity: &'static str,
    pub generated_code: &'static str,
    pub copy: &'static str,
    pub save: &'static str,
    pub favorites: &'static str,
    pub no_favorites: &'static str,
    pub icons: &'static str,
    pub chars: &'static str,
    pub too_many_icons: &'static str,
    pub char_limit_exceeded: &'static str,
    pub recent_colors: &'static str,
    pub system: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

static EN: Messages = Messages {
    explanation: "Write your message, pick the start and end colors and copy the generated code into the game chat.",
    message_label: "Message",
    start_color: "Start color",
    end_color: "End color",
    opacity: "Opacity",
    generated_code: "Generated code",
    copy: "Copy",
    save: "Save to favorites",
    favorites: "Favorites",
    no_favorites: "No favorites yet",
    icons: "icons",
    chars: "chars",
    too_many_icons: "Too many icons (maximum 4)",
    char_limit_exceeded: "Character limit exceeded",
    recent_colors: "Recent colors",
    system: "System",
    light: "Light",
    dark: "Dark",
};

static ES: Messages = Messages {
    explanation: "Escribe tu mensaje, elige los colores de inicio y fin y copia el código generado en el chat del juego.",
    message_label: "Mensaje",
    start_color: "Color inicial",
    end_color: "Color final",
    opacity: "Opacidad",
    generated_code: "Código generado",
    copy: "Copiar",
    save: "Guardar en favoritos",
    favorites: "Favoritos",
    no_favorites: "Todavía no hay favoritos",
    icons: "iconos",
    chars: "caracteres",
    too_many_icons: "Demasiados iconos (máximo 4)",
    char_limit_exceeded: "Límite de caracteres superado",
    recent_colors: "Colores recientes",
    system: "Sistema",
    light: "Claro",
    dark: "Oscuro",
};

static CA: Messages = Messages {
    explanation: "Escriu el teu missatge, tria els colors d'inici i final i copia el codi generat al xat del joc.",
    message_label: "Missatge",
    start_color: "Color inicial",
    end_color: "Color final",
    opacity: "Opacitat",
    generated_code: "Codi generat",
    copy: "Copiar",
    save: "Desa als preferits",
    favorites: "Preferits",
    no_favorites: "Encara no hi ha preferits",
    icons: "icones",
    chars: "caràcters",
    too_many_icons: "Massa icones (màxim 4)",
    char_limit_exceeded: "S'ha superat el límit de caràcters",
    recent_colors: "Colors recents",
    system: "Sistema",
    light: "Clar",
    dark: "Fosc",
};

pub fn messages(lang: Language) -> &'static Messages {
    match lang {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Ca => &CA,
    }
}
