// Repository Pattern実装
// 永続化されたリストへのアクセスを trait で抽象化する

pub mod favorite_repository;
pub mod recent_color_repository;

pub use favorite_repository::{FavoriteRepository, SqliteFavoriteRepository};
pub use recent_color_repository::{RecentColorRepository, SqliteRecentColorRepository};
