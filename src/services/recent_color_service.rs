use log::debug;

use crate::color::Color;
use crate::config::storage::MAX_RECENT_COLORS;
use crate::errors::AppResult;
use crate::repositories::RecentColorRepository;

/// Move `color` to the front of `recent`, dropping duplicates and the overflow.
pub fn push_recent_color(recent: &[String], color: Color) -> Vec<String> {
    let hex = color.to_hex_string();
    let mut updated = Vec::with_capacity(MAX_RECENT_COLORS);
    updated.push(hex.clone());
    updated.extend(
        recent
            .iter()
            .filter(|c| !c.eq_ignore_ascii_case(&hex))
            .cloned(),
    );
    updated.truncate(MAX_RECENT_COLORS);
    updated
}

pub fn list_recent_colors(repo: &dyn RecentColorRepository) -> AppResult<Vec<String>> {
    Ok(repo.load()?)
}

/// Record an accepted color change.
pub fn record_color(repo: &dyn RecentColorRepository, color: Color) -> AppResult<Vec<String>> {
    let updated = push_recent_color(&repo.load()?, color);
    repo.save(&updated)?;
    debug!("Recorded recent color {}", color.to_hex_string());
    Ok(updated)
}
