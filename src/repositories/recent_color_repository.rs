// RecentColorRepository - 最近使った色リストの永続化ポート

use anyhow::Result;
use log::warn;
use rusqlite::Connection;

use crate::config::storage::RECENT_COLORS_KEY;
use crate::database::{read_value, write_value};

pub trait RecentColorRepository {
    /// Stored list, most recent first. Corrupt data yields an empty list.
    fn load(&self) -> Result<Vec<String>>;
    fn save(&self, colors: &[String]) -> Result<()>;
}

/// SQLite実装のRecentColorRepository
pub struct SqliteRecentColorRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRecentColorRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> RecentColorRepository for SqliteRecentColorRepository<'a> {
    fn load(&self) -> Result<Vec<String>> {
        let Some(raw) = read_value(self.conn, RECENT_COLORS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(colors) => Ok(colors),
            Err(e) => {
                warn!("Stored recent colors are unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, colors: &[String]) -> Result<()> {
        let raw = serde_json::to_string(colors)?;
        write_value(self.conn, RECENT_COLORS_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    #[test]
    fn test_round_trip_and_corruption() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqliteRecentColorRepository::new(db.conn());
        assert!(repo.load().unwrap().is_empty());

        let colors = vec!["#FF0000".to_string(), "#00FF00".to_string()];
        repo.save(&colors).unwrap();
        assert_eq!(repo.load().unwrap(), colors);

        write_value(db.conn(), RECENT_COLORS_KEY, "[1, 2").unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
