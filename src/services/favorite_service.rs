use log::info;

use crate::errors::{AppError, AppResult};
use crate::favorites::Favorite;
use crate::form::GradientForm;
use crate::repositories::FavoriteRepository;

/// Id for a new favorite: the creation time, bumped past the newest id so
/// two saves within the same millisecond stay distinct.
pub fn next_favorite_id(existing: &[Favorite], now_millis: i64) -> i64 {
    existing
        .iter()
        .map(|f| f.id)
        .max()
        .map_or(now_millis, |max_id| now_millis.max(max_id + 1))
}

pub fn list_favorites(repo: &dyn FavoriteRepository) -> AppResult<Vec<Favorite>> {
    Ok(repo.load()?)
}

pub fn find_favorite(repo: &dyn FavoriteRepository, id: i64) -> AppResult<Favorite> {
    repo.load()?
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AppError::not_found(format!("favorite {id}")))
}

/// Append the form to the favorites list. Rejected while the message is invalid.
pub fn save_favorite(
    repo: &dyn FavoriteRepository,
    form: &GradientForm,
    now_millis: i64,
) -> AppResult<Favorite> {
    form.validation().into_result()?;

    let mut favorites = repo.load()?;
    let favorite = form.to_favorite(next_favorite_id(&favorites, now_millis));
    favorites.push(favorite.clone());
    repo.save(&favorites)?;

    info!("Saved favorite {} ({} total)", favorite.id, favorites.len());
    Ok(favorite)
}

/// Remove every favorite with `id`. Returns the remaining list.
pub fn delete_favorite(repo: &dyn FavoriteRepository, id: i64) -> AppResult<Vec<Favorite>> {
    let mut favorites = repo.load()?;
    let before = favorites.len();
    favorites.retain(|f| f.id != id);

    if favorites.len() == before {
        return Err(AppError::not_found(format!("favorite {id}")));
    }

    repo.save(&favorites)?;
    info!("Deleted favorite {id} ({} remaining)", favorites.len());
    Ok(favorites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::repositories::SqliteFavoriteRepository;

    fn form(message: &str) -> GradientForm {
        let mut form = GradientForm::default();
        form.set_message(message);
        form
    }

    #[test]
    fn test_next_favorite_id() {
        assert_eq!(next_favorite_id(&[], 1000), 1000);

        let existing = vec![form("a").to_favorite(1000)];
        assert_eq!(next_favorite_id(&existing, 1000), 1001);
        assert_eq!(next_favorite_id(&existing, 5000), 5000);
    }

    #[test]
    fn test_save_appends_in_order() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqliteFavoriteRepository::new(db.conn());

        save_favorite(&repo, &form("first"), 100).unwrap();
        save_favorite(&repo, &form("second"), 100).unwrap();

        let favorites = list_favorites(&repo).unwrap();
        let messages: Vec<&str> = favorites.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(favorites[0].id, 100);
        assert_eq!(favorites[1].id, 101);
    }

    #[test]
    fn test_save_rejects_invalid_message() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqliteFavoriteRepository::new(db.conn());

        let err = save_favorite(&repo, &form("<tx1><tx2><tx3><tx4><tx5>"), 1).unwrap_err();
        assert!(matches!(err, AppError::TooManyIcons { count: 5 }));
        assert!(list_favorites(&repo).unwrap().is_empty());
    }

    #[test]
    fn test_delete_and_find() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqliteFavoriteRepository::new(db.conn());

        let keep = save_favorite(&repo, &form("keep"), 1).unwrap();
        let drop = save_favorite(&repo, &form("drop"), 2).unwrap();

        assert_eq!(find_favorite(&repo, drop.id).unwrap().message, "drop");

        let remaining = delete_favorite(&repo, drop.id).unwrap();
        assert_eq!(remaining, vec![keep.clone()]);
        assert_eq!(list_favorites(&repo).unwrap(), vec![keep]);

        assert!(matches!(
            delete_favorite(&repo, drop.id),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(find_favorite(&repo, 999), Err(AppError::NotFound(_))));
    }
}
