// メッセージのバリデーション機能のモジュール
// アイコン数と文字数から、コピー・保存が可能かを判定する

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::config::validation::{CHAR_LIMITS, ICON_TOKEN_PATTERN, MAX_ICONS};
use crate::errors::AppError;
use crate::i18n::{messages, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    TooManyIcons,
    CharLimitExceeded,
}

/// Result of validating one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub icon_count: usize,
    pub char_count: usize,
    pub limit: usize,
    pub error: Option<ValidationErrorKind>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Localized error, or the `"n icons, c/l chars"` counter line.
    pub fn helper_text(&self, lang: Language) -> String {
        let t = messages(lang);
        match self.error {
            Some(ValidationErrorKind::TooManyIcons) => t.too_many_icons.to_string(),
            Some(ValidationErrorKind::CharLimitExceeded) => t.char_limit_exceeded.to_string(),
            None => format!(
                "{} {}, {}/{} {}",
                self.icon_count, t.icons, self.char_count, self.limit, t.chars
            ),
        }
    }

    /// エラーがあれば AppError に変換
    pub fn into_result(self) -> Result<Self, AppError> {
        match self.error {
            Some(ValidationErrorKind::TooManyIcons) => Err(AppError::TooManyIcons {
                count: self.icon_count,
            }),
            Some(ValidationErrorKind::CharLimitExceeded) => Err(AppError::CharLimitExceeded {
                count: self.char_count,
                limit: self.limit,
            }),
            None => Ok(self),
        }
    }
}

fn icon_token_regex() -> &'static Regex {
    static ICON_TOKEN: OnceLock<Regex> = OnceLock::new();
    ICON_TOKEN.get_or_init(|| Regex::new(ICON_TOKEN_PATTERN).expect("icon token pattern is valid"))
}

/// Number of `<tx...>` icon tokens in the message.
pub fn count_icons(message: &str) -> usize {
    icon_token_regex().find_iter(message).count()
}

/// Plain character limit for a given icon count.
pub fn char_limit(icon_count: usize) -> usize {
    CHAR_LIMITS[icon_count.min(CHAR_LIMITS.len() - 1)]
}

/// メインのバリデーション関数
pub fn validate(message: &str) -> ValidationReport {
    let icon_count = count_icons(message);
    let char_count = icon_token_regex().replace_all(message, "").encode_utf16().count();
    let limit = char_limit(icon_count);

    let error = if icon_count > MAX_ICONS {
        Some(ValidationErrorKind::TooManyIcons)
    } else if char_count > limit {
        Some(ValidationErrorKind::CharLimitExceeded)
    } else {
        None
    };

    ValidationReport {
        icon_count,
        char_count,
        limit,
        error,
    }
}
