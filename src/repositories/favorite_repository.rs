// FavoriteRepository - お気に入りリストの永続化ポート

use anyhow::Result;
use log::warn;
use rusqlite::Connection;

use crate::config::storage::FAVORITES_KEY;
use crate::database::{read_value, write_value};
use crate::favorites::Favorite;

/// お気に入りリスト全体を読み書きする Repository trait
pub trait FavoriteRepository {
    /// Stored list. An unreadable list yields an empty list and unreadable
    /// entries are skipped.
    fn load(&self) -> Result<Vec<Favorite>>;
    /// Rewrite the whole list.
    fn save(&self, favorites: &[Favorite]) -> Result<()>;
}

/// SQLite実装のFavoriteRepository
pub struct SqliteFavoriteRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteFavoriteRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> FavoriteRepository for SqliteFavoriteRepository<'a> {
    fn load(&self) -> Result<Vec<Favorite>> {
        let Some(raw) = read_value(self.conn, FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                // 壊れたデータはフォーム全体を止めずに空リストとして扱う
                warn!("Stored favorites are unreadable, starting empty: {e}");
                return Ok(Vec::new());
            }
        };

        // 読めないエントリだけを除外し、残りは保持する
        let favorites = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Favorite>(entry) {
                Ok(favorite) => Some(favorite),
                Err(e) => {
                    warn!("Skipping unreadable favorite entry: {e}");
                    None
                }
            })
            .collect();
        Ok(favorites)
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        write_value(self.conn, FAVORITES_KEY, &raw)?;
        Ok(())
    }
}
