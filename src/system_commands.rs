use std::path::Path;

use crate::api_types::{IconGroup, SettingsRecord};
use crate::errors::to_command_result;
use crate::i18n::{messages, Language, Messages};
use crate::icon_catalog::load_icon_data;
use crate::settings::{load_settings, save_settings};
use crate::theme::{Palette, ThemeMode};
use crate::AppState;

// 設定保存・読み込みコマンド
pub fn get_settings(state: &AppState) -> Result<SettingsRecord, String> {
    Ok(SettingsRecord::from(&load_settings(&state.data_dir)))
}

pub fn set_language(state: &AppState, code: String) -> Result<SettingsRecord, String> {
    let language: Language = to_command_result(code.parse())?;
    let mut settings = load_settings(&state.data_dir);
    settings.language = language;
    to_command_result(save_settings(&state.data_dir, &settings))?;
    Ok(SettingsRecord::from(&settings))
}

pub fn set_theme_mode(state: &AppState, mode: String) -> Result<SettingsRecord, String> {
    let theme_mode: ThemeMode = to_command_result(mode.parse())?;
    let mut settings = load_settings(&state.data_dir);
    settings.theme_mode = theme_mode;
    to_command_result(save_settings(&state.data_dir, &settings))?;
    Ok(SettingsRecord::from(&settings))
}

/// Palette for the saved theme mode, resolving `system` with `prefers_dark`.
pub fn get_palette(state: &AppState, prefers_dark: bool) -> Result<Palette, String> {
    let settings = load_settings(&state.data_dir);
    to_command_result(Palette::for_mode(settings.theme_mode.resolve(prefers_dark)))
}

pub fn get_messages(state: &AppState) -> &'static Messages {
    messages(load_settings(&state.data_dir).language)
}

// アイコンデータ読み込みコマンド
pub fn load_icon_catalog(path: &Path) -> Result<Vec<IconGroup>, String> {
    let categories = to_command_result(load_icon_data(path))?;
    Ok(categories.iter().map(IconGroup::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::PaletteMode;
    use tempfile::tempdir;

    #[test]
    fn test_language_and_theme_settings() {
        let dir = tempdir().unwrap();
        let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();

        assert_eq!(get_settings(&state).unwrap().language, "en");

        set_language(&state, "es".to_string()).unwrap();
        assert_eq!(get_messages(&state).copy, "Copiar");

        let settings = set_theme_mode(&state, "dark".to_string()).unwrap();
        assert_eq!(settings.language, "es");
        assert_eq!(settings.theme_mode, "dark");

        assert!(set_language(&state, "de".to_string()).is_err());
        assert!(set_theme_mode(&state, "neon".to_string()).is_err());
    }

    #[test]
    fn test_palette_follows_theme_mode() {
        let dir = tempdir().unwrap();
        let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();

        assert_eq!(get_palette(&state, true).unwrap().mode, PaletteMode::Dark);
        set_theme_mode(&state, "light".to_string()).unwrap();
        assert_eq!(get_palette(&state, true).unwrap().mode, PaletteMode::Light);
    }

    #[test]
    fn test_load_icon_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.txt");
        std::fs::write(&path, "GAMES\n<TX2> Pong\n<TX1> Chess\n").unwrap();

        let groups = load_icon_catalog(&path).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].label, "Chess");
        assert!(load_icon_catalog(&dir.path().join("missing.txt")).is_err());
    }
}
