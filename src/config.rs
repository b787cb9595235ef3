// Configuration constants for Gradient Tagger
// This module centralizes all magic numbers and hardcoded strings to improve maintainability

/// Application configuration constants
pub mod app {
    /// Name of the application data directory
    pub const DATA_DIR_NAME: &str = "GradientTagger";

    /// Database file name
    pub const DATABASE_FILENAME: &str = "gradient_tagger.db";

    /// User settings file name
    pub const SETTINGS_FILENAME: &str = "settings.json";
}

/// Gradient generation constants
pub mod gradient {
    /// Prefix of a generated color tag
    pub const TAG_PREFIX: &str = "<FG";

    /// Suffix of a generated color tag
    pub const TAG_SUFFIX: char = '>';

    /// Opening delimiter of an inline tag span
    pub const SPAN_OPEN: char = '<';

    /// Closing delimiter of an inline tag span
    pub const SPAN_CLOSE: char = '>';

    /// Fully opaque alpha
    pub const DEFAULT_OPACITY: u8 = 255;

    /// Default start color of a new form
    pub const DEFAULT_START_COLOR: &str = "#ff0000";

    /// Default end color of a new form
    pub const DEFAULT_END_COLOR: &str = "#0000ff";
}

/// Message validation constants
pub mod validation {
    /// Icon token pattern (`<tx...>`, case-insensitive)
    pub const ICON_TOKEN_PATTERN: &str = r"(?i)<tx[^>]+>";

    /// Plain character limit indexed by icon count (capped at the last entry)
    pub const CHAR_LIMITS: [usize; 5] = [15, 13, 12, 10, 9];

    /// Maximum number of icons allowed in one message
    pub const MAX_ICONS: usize = 4;
}

/// Persisted list configuration constants
pub mod storage {
    /// Key of the favorites list
    pub const FAVORITES_KEY: &str = "owFavorites";

    /// Key of the recent colors list
    pub const RECENT_COLORS_KEY: &str = "owRecentColors";

    /// Maximum number of recent colors kept
    pub const MAX_RECENT_COLORS: usize = 10;
}

/// Database schema constants
pub mod database {
    /// Key-value table name
    pub const KV_TABLE: &str = "kv_store";
}

/// Icon catalog constants
pub mod icons {
    /// Categories shown in the icon picker, in display order
    pub const WANTED_CATEGORIES: &[&str] = &["2D ART", "3D ART", "GAMES", "RANDOM"];
}

/// Color picker presets
pub mod palette {
    pub const PRESET_COLORS: &[&str] = &[
        "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B9B9B", "#3A3A3A",
        "#4A90E2", "#43A047",
    ];
}

/// Theme palette colors
pub mod theme {
    pub const PRIMARY: &str = "#218ffe";
    pub const SECONDARY: &str = "#f99e1a";

    pub const DARK_BACKGROUND: &str = "#000000";
    pub const DARK_PAPER: &str = "#43484c";
    pub const DARK_TEXT_PRIMARY: &str = "#ffffff";
    pub const DARK_TEXT_SECONDARY: &str = "#f99e1a";

    pub const LIGHT_BACKGROUND: &str = "#ffffff";
    pub const LIGHT_PAPER: &str = "#ffffff";
    pub const LIGHT_TEXT_PRIMARY: &str = "#000000";
    pub const LIGHT_TEXT_SECONDARY: &str = "#405275";

    /// Corner radius in pixels
    pub const BORDER_RADIUS: u32 = 8;
}

/// Common test values (for test files only)
#[cfg(test)]
pub mod test_values {
    /// Test colors
    pub const TEST_COLOR_RED: &str = "#FF0000";
    pub const TEST_COLOR_GREEN: &str = "#00FF00";
    pub const TEST_COLOR_BLUE: &str = "#0000FF";
    pub const TEST_COLOR_BLACK: &str = "#000000";
    pub const TEST_COLOR_WHITE: &str = "#FFFFFF";

    /// Icon tokens
    pub const TEST_ICON_1: &str = "<TXC00000000001234>";
    pub const TEST_ICON_2: &str = "<txC0000000000ABCD>";
}
