// 設定の保存・読み込み (言語とテーマ)

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::app;
use crate::errors::{AppError, AppResult};
use crate::i18n::Language;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub language: Language,
    pub theme_mode: ThemeMode,
}

/// Missing or unreadable settings fall back to the defaults.
pub fn load_settings(data_dir: &Path) -> AppSettings {
    let config_path = data_dir.join(app::SETTINGS_FILENAME);
    if !config_path.exists() {
        return AppSettings::default();
    }

    let parsed = std::fs::read_to_string(&config_path)
        .map_err(AppError::from)
        .and_then(|content| serde_json::from_str::<AppSettings>(&content).map_err(AppError::from));

    match parsed {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to read settings, using defaults: {e}");
            AppSettings::default()
        }
    }
}

pub fn save_settings(data_dir: &Path, settings: &AppSettings) -> AppResult<()> {
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir).map_err(|e| {
            AppError::custom(format!("Failed to create app data directory: {e}"))
        })?;
    }

    let config_path = data_dir.join(app::SETTINGS_FILENAME);
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(&config_path, content)
        .map_err(|e| AppError::custom(format!("Failed to save settings: {e}")))?;
    Ok(())
}
