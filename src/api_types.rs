// API型定義 - TypeScript自動生成対応
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::favorites::Favorite;
use crate::icon_catalog::{IconCategory, IconEntry};
use crate::i18n::Language;
use crate::settings::AppSettings;
use crate::tag_validator::{ValidationErrorKind, ValidationReport};

// =============================================================================
// Generation
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub message: String,
    pub start_color: String,
    pub end_color: String,
    pub start_opacity: Option<i64>,
    pub end_opacity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub icon_count: u32,
    pub char_count: u32,
    pub limit: u32,
    pub error_kind: Option<String>,
    pub helper_text: String,
}

impl ValidationResult {
    pub fn from_report(report: &ValidationReport, lang: Language) -> Self {
        Self {
            icon_count: report.icon_count as u32,
            char_count: report.char_count as u32,
            limit: report.limit as u32,
            error_kind: report.error.map(|kind| match kind {
                ValidationErrorKind::TooManyIcons => "tooManyIcons".to_string(),
                ValidationErrorKind::CharLimitExceeded => "charLimitExceeded".to_string(),
            }),
            helper_text: report.helper_text(lang),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub code: String,
    pub validation: ValidationResult,
    /// copy / save が可能かどうか
    pub usable: bool,
}

// =============================================================================
// Favorites
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: i64,
    pub message: String,
    pub start_color: String,
    pub end_color: String,
    pub start_opacity: Option<u8>,
    pub end_opacity: Option<u8>,
}

impl From<&Favorite> for FavoriteRecord {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id,
            message: favorite.message.clone(),
            start_color: favorite.start_color.to_hex_string(),
            end_color: favorite.end_color.to_hex_string(),
            start_opacity: favorite.start_opacity.map(|o| o.value()),
            end_opacity: favorite.end_opacity.map(|o| o.value()),
        }
    }
}

// =============================================================================
// Icons / Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IconItem {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IconGroup {
    pub name: String,
    pub items: Vec<IconItem>,
}

impl From<&IconEntry> for IconItem {
    fn from(entry: &IconEntry) -> Self {
        Self {
            code: entry.code.clone(),
            label: entry.label.clone(),
        }
    }
}

impl From<&IconCategory> for IconGroup {
    fn from(category: &IconCategory) -> Self {
        Self {
            name: category.name.clone(),
            items: category.items.iter().map(IconItem::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub language: String,
    pub language_name: String,
    pub theme_mode: String,
}

impl From<&AppSettings> for SettingsRecord {
    fn from(settings: &AppSettings) -> Self {
        let theme_mode = serde_json::to_value(settings.theme_mode)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        Self {
            language: settings.language.code().to_string(),
            language_name: settings.language.native_name().to_string(),
            theme_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Opacity};
    use crate::tag_validator::validate;
    use crate::theme::ThemeMode;

    #[test]
    fn test_validation_result() {
        let result = ValidationResult::from_report(&validate("abcdefghijklmnop"), Language::Es);
        assert_eq!(result.error_kind.as_deref(), Some("charLimitExceeded"));
        assert_eq!(result.helper_text, "Límite de caracteres superado");
        assert_eq!(result.limit, 15);
    }

    #[test]
    fn test_favorite_record() {
        let favorite = Favorite {
            id: 7,
            message: "m".to_string(),
            start_color: Color::new(0xab, 0, 0),
            end_color: Color::new(0, 0, 0xcd),
            start_opacity: Some(Opacity(1)),
            end_opacity: None,
        };
        let record = FavoriteRecord::from(&favorite);
        assert_eq!(record.start_color, "#AB0000");
        assert_eq!(record.start_opacity, Some(1));
        assert_eq!(record.end_opacity, None);
    }

    #[test]
    fn test_settings_record() {
        let record = SettingsRecord::from(&AppSettings {
            language: Language::Ca,
            theme_mode: ThemeMode::Light,
        });
        assert_eq!(record.language, "ca");
        assert_eq!(record.language_name, "Català");
        assert_eq!(record.theme_mode, "light");
    }

    #[test]
    fn test_generate_request_schema_is_camel_case() {
        let schema = serde_json::to_value(schemars::schema_for!(GenerateRequest)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("startColor"));
        assert!(properties.contains_key("endOpacity"));
    }
}
