use crate::color::Color;
use crate::config::palette::PRESET_COLORS;
use crate::errors::to_command_result;
use crate::repositories::SqliteRecentColorRepository;
use crate::services::recent_color_service;
use crate::{AppError, AppState};

/// Record an accepted color change and return the updated list.
pub fn record_recent_color(state: &AppState, color: String) -> Result<Vec<String>, String> {
    let color = to_command_result(Color::from_hex(&color))?;

    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteRecentColorRepository::new(db.conn());
    to_command_result(recent_color_service::record_color(&repo, color))
}

pub fn get_recent_colors(state: &AppState) -> Result<Vec<String>, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteRecentColorRepository::new(db.conn());
    to_command_result(recent_color_service::list_recent_colors(&repo))
}

pub fn get_preset_colors() -> Vec<String> {
    PRESET_COLORS.iter().map(|c| c.to_string()).collect()
}
