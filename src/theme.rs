// テーマ - ライト/ダーク/システム設定とパレット

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::color::Color;
use crate::config::theme;
use crate::errors::{AppError, AppResult};

/// Theme preference chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Mode actually applied after resolving `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn resolve(self, prefers_dark: bool) -> PaletteMode {
        match self {
            ThemeMode::Light => PaletteMode::Light,
            ThemeMode::Dark => PaletteMode::Dark,
            ThemeMode::System if prefers_dark => PaletteMode::Dark,
            ThemeMode::System => PaletteMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::validation(
                "themeMode",
                format!("unknown theme mode: {other}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub mode: PaletteMode,
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub paper: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border_radius: u32,
}

impl Palette {
    pub fn for_mode(mode: PaletteMode) -> AppResult<Self> {
        let (background, paper, text_primary, text_secondary) = match mode {
            PaletteMode::Dark => (
                theme::DARK_BACKGROUND,
                theme::DARK_PAPER,
                theme::DARK_TEXT_PRIMARY,
                theme::DARK_TEXT_SECONDARY,
            ),
            PaletteMode::Light => (
                theme::LIGHT_BACKGROUND,
                theme::LIGHT_PAPER,
                theme::LIGHT_TEXT_PRIMARY,
                theme::LIGHT_TEXT_SECONDARY,
            ),
        };

        Ok(Self {
            mode,
            primary: Color::from_hex(theme::PRIMARY)?,
            secondary: Color::from_hex(theme::SECONDARY)?,
            background: Color::from_hex(background)?,
            paper: Color::from_hex(paper)?,
            text_primary: Color::from_hex(text_primary)?,
            text_secondary: Color::from_hex(text_secondary)?,
            border_radius: theme::BORDER_RADIUS,
        })
    }
}
