use thiserror::Error;

/// アプリケーション全体で使用する統一エラー型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Malformed color '{input}': {reason}")]
    MalformedColor { input: String, reason: String },

    #[error("Too many icons: {count} (max 4)")]
    TooManyIcons { count: usize },

    #[error("Character limit exceeded: {count}/{limit}")]
    CharLimitExceeded { count: usize, limit: usize },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // 元のメッセージをそのまま表示する
    #[error("{0}")]
    DatabaseLock(String),

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// 不正なカラー文字列エラーを作成
    pub fn malformed_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// バリデーションエラーを作成
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 未検出エラーを作成
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 設定エラーを作成
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// データベースロックエラーを作成
    pub fn database_lock(message: impl Into<String>) -> Self {
        Self::DatabaseLock(message.into())
    }

    /// カスタムエラーを作成 (任意の文字列エラーメッセージ用)
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// アプリケーション全体で使用するResult型
pub type AppResult<T> = Result<T, AppError>;

/// エラーのカテゴリ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// ユーザー操作エラー（修正可能）
    UserError,
    /// システムエラー（再試行可能）
    SystemError,
    /// 設定エラー（設定変更が必要）
    ConfigError,
    /// 重大なエラー（アプリケーション終了）
    FatalError,
}

impl AppError {
    /// エラーのカテゴリを取得
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::MalformedColor { .. } => ErrorCategory::UserError,
            AppError::TooManyIcons { .. } => ErrorCategory::UserError,
            AppError::CharLimitExceeded { .. } => ErrorCategory::UserError,
            AppError::Validation { .. } => ErrorCategory::UserError,
            AppError::NotFound(_) => ErrorCategory::UserError,
            AppError::Configuration(_) => ErrorCategory::ConfigError,
            AppError::Database(_) => ErrorCategory::SystemError,
            AppError::Io(_) => ErrorCategory::SystemError,
            AppError::Internal(_) => ErrorCategory::SystemError,
            AppError::DatabaseLock(_) => ErrorCategory::SystemError,
            AppError::Custom(_) => ErrorCategory::SystemError,
            AppError::Serialization(_) => ErrorCategory::FatalError,
        }
    }

    /// ユーザー向けメッセージを取得
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => {
                "A storage error occurred. Please restart the application.".to_string()
            }
            AppError::Io(_) => {
                "A file operation failed. Please check the file permissions.".to_string()
            }
            AppError::Serialization(_) => "Failed to convert stored data.".to_string(),
            AppError::Internal(err) => format!("Internal error: {err}"),
            AppError::MalformedColor { input, .. } => {
                format!("'{input}' is not a 6-digit hex color.")
            }
            AppError::TooManyIcons { count } => format!("Too many icons ({count})."),
            AppError::CharLimitExceeded { count, limit } => {
                format!("Character limit exceeded ({count}/{limit}).")
            }
            AppError::Validation { field, message } => format!("{field}: {message}"),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Configuration(msg) => format!("Configuration error: {msg}"),
            AppError::DatabaseLock(msg) => msg.clone(),
            AppError::Custom(msg) => msg.clone(),
        }
    }

    /// 再試行可能かどうか
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::SystemError)
    }
}

/// String から AppError への変換 (既存のエラーメッセージを保持)
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Custom(msg)
    }
}

/// &str から AppError への変換 (既存のエラーメッセージを保持)
impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Custom(msg.to_string())
    }
}

/// AppError を String に変換 (エラーメッセージの表示)
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

/// Convert AppResult<T> to Result<T, String> for command handlers
pub fn to_command_result<T>(result: AppResult<T>) -> Result<T, String> {
    result.map_err(|e| e.to_string())
}
