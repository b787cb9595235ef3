// フォームの状態 - 入力が変わるたびに生成コードと検証結果を同期的に再計算する

use serde::{Deserialize, Serialize};

use crate::color::{Color, Opacity};
use crate::config::gradient::{DEFAULT_END_COLOR, DEFAULT_START_COLOR};
use crate::errors::AppResult;
use crate::favorites::Favorite;
use crate::gradient::{generate, GradientSpec};
use crate::tag_validator::{validate, ValidationReport};

/// In-memory form fields.
///
/// Nothing is cached: `code()` and `validation()` are recomputed from the
/// current fields on every call, so they can never be stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientForm {
    pub message: String,
    pub start_color: Color,
    pub end_color: Color,
    pub start_opacity: Opacity,
    pub end_opacity: Opacity,
}

impl Default for GradientForm {
    fn default() -> Self {
        Self {
            message: String::new(),
            start_color: Color::from_hex(DEFAULT_START_COLOR).unwrap_or(Color::new(255, 0, 0)),
            end_color: Color::from_hex(DEFAULT_END_COLOR).unwrap_or(Color::new(0, 0, 255)),
            start_opacity: Opacity::OPAQUE,
            end_opacity: Opacity::OPAQUE,
        }
    }
}

impl GradientForm {
    pub fn spec(&self) -> GradientSpec {
        GradientSpec::new(self.start_color, self.end_color)
            .with_opacity(self.start_opacity, self.end_opacity)
    }

    pub fn code(&self) -> String {
        generate(&self.message, &self.spec())
    }

    pub fn validation(&self) -> ValidationReport {
        validate(&self.message)
    }

    /// Code for the copy action; fails while the message is invalid.
    pub fn copyable_code(&self) -> AppResult<String> {
        self.validation().into_result()?;
        Ok(self.code())
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Parse and apply a start color. The previous value is kept on error.
    pub fn set_start_color(&mut self, hex: &str) -> AppResult<Color> {
        self.start_color = Color::from_hex(hex)?;
        Ok(self.start_color)
    }

    pub fn set_end_color(&mut self, hex: &str) -> AppResult<Color> {
        self.end_color = Color::from_hex(hex)?;
        Ok(self.end_color)
    }

    pub fn set_start_opacity(&mut self, value: i64) {
        self.start_opacity = Opacity::clamped(value);
    }

    pub fn set_end_opacity(&mut self, value: i64) {
        self.end_opacity = Opacity::clamped(value);
    }

    /// Append an icon token, separated by a space.
    pub fn insert_icon(&mut self, code: &str) {
        self.message.push(' ');
        self.message.push_str(code);
    }

    /// Load a favorite into the form. Missing opacities keep current values.
    pub fn apply_favorite(&mut self, favorite: &Favorite) {
        self.message = favorite.message.clone();
        self.start_color = favorite.start_color;
        self.end_color = favorite.end_color;
        if let Some(opacity) = favorite.start_opacity {
            self.start_opacity = opacity;
        }
        if let Some(opacity) = favorite.end_opacity {
            self.end_opacity = opacity;
        }
    }

    pub fn to_favorite(&self, id: i64) -> Favorite {
        Favorite {
            id,
            message: self.message.clone(),
            start_color: self.start_color,
            end_color: self.end_color,
            start_opacity: Some(self.start_opacity),
            end_opacity: Some(self.end_opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_defaults() {
        let form = GradientForm::default();
        assert_eq!(form.start_color, Color::new(255, 0, 0));
        assert_eq!(form.end_color, Color::new(0, 0, 255));
        assert_eq!(form.start_opacity, Opacity::OPAQUE);
        assert_eq!(form.code(), "");
        assert!(form.validation().is_valid());
    }

    #[test]
    fn test_code_follows_every_change() {
        let mut form = GradientForm::default();
        form.set_message("AB");
        assert_eq!(form.code(), "<FGFF0000FF>A<FG0000FFFF>B");

        form.set_end_color("#00ff00").unwrap();
        assert_eq!(form.code(), "<FGFF0000FF>A<FG00FF00FF>B");

        form.set_start_opacity(0);
        form.set_end_opacity(1000);
        assert_eq!(form.code(), "<FGFF000000>A<FG00FF00FF>B");
    }

    #[test]
    fn test_malformed_color_keeps_previous_value() {
        let mut form = GradientForm::default();
        let err = form.set_start_color("#12").unwrap_err();
        assert!(matches!(err, AppError::MalformedColor { .. }));
        assert_eq!(form.start_color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_insert_icon() {
        let mut form = GradientForm::default();
        form.set_message("gg");
        form.insert_icon("<TXC00000000001234>");
        assert_eq!(form.message, "gg <TXC00000000001234>");
        assert_eq!(form.validation().icon_count, 1);
    }

    #[test]
    fn test_copy_is_gated_by_validation() {
        let mut form = GradientForm::default();
        form.set_message("this message is far too long");
        assert!(matches!(
            form.copyable_code(),
            Err(AppError::CharLimitExceeded { .. })
        ));

        form.set_message("short");
        assert_eq!(form.copyable_code().unwrap(), form.code());
    }

    #[test]
    fn test_apply_favorite_without_opacity_keeps_current() {
        let mut form = GradientForm::default();
        form.set_start_opacity(10);
        form.set_end_opacity(20);

        let favorite = Favorite {
            id: 1,
            message: "fav".to_string(),
            start_color: Color::new(1, 2, 3),
            end_color: Color::new(4, 5, 6),
            start_opacity: None,
            end_opacity: Some(Opacity(99)),
        };
        form.apply_favorite(&favorite);

        assert_eq!(form.message, "fav");
        assert_eq!(form.start_color, Color::new(1, 2, 3));
        assert_eq!(form.start_opacity, Opacity(10));
        assert_eq!(form.end_opacity, Opacity(99));
    }

    #[test]
    fn test_to_favorite() {
        let mut form = GradientForm::default();
        form.set_message("hello");
        let favorite = form.to_favorite(42);
        assert_eq!(favorite.id, 42);
        assert_eq!(favorite.code(), form.code());
    }
}
