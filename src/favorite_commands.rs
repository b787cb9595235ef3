use chrono::Utc;

use crate::api_types::{FavoriteRecord, GenerateRequest};
use crate::errors::to_command_result;
use crate::gradient_commands::form_from_request;
use crate::repositories::SqliteFavoriteRepository;
use crate::services::favorite_service;
use crate::{AppError, AppState};

fn to_records(favorites: &[crate::favorites::Favorite]) -> Vec<FavoriteRecord> {
    favorites.iter().map(FavoriteRecord::from).collect()
}

pub fn get_favorites(state: &AppState) -> Result<Vec<FavoriteRecord>, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteFavoriteRepository::new(db.conn());
    let favorites = to_command_result(favorite_service::list_favorites(&repo))?;
    Ok(to_records(&favorites))
}

pub fn save_favorite(state: &AppState, request: GenerateRequest) -> Result<FavoriteRecord, String> {
    let form = to_command_result(form_from_request(&request))?;

    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteFavoriteRepository::new(db.conn());
    let favorite = to_command_result(favorite_service::save_favorite(
        &repo,
        &form,
        Utc::now().timestamp_millis(),
    ))?;
    Ok(FavoriteRecord::from(&favorite))
}

pub fn delete_favorite(state: &AppState, id: i64) -> Result<Vec<FavoriteRecord>, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteFavoriteRepository::new(db.conn());
    let remaining = to_command_result(favorite_service::delete_favorite(&repo, id))?;
    Ok(to_records(&remaining))
}

/// Code of a stored favorite. Not gated by validation.
pub fn copy_favorite_code(state: &AppState, id: i64) -> Result<String, String> {
    let db = state
        .db
        .lock()
        .map_err(|e| AppError::database_lock(format!("Database lock error: {e}")).to_string())?;

    let repo = SqliteFavoriteRepository::new(db.conn());
    let favorite = to_command_result(favorite_service::find_favorite(&repo, id))?;
    Ok(favorite.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request(message: &str) -> GenerateRequest {
        GenerateRequest {
            message: message.to_string(),
            start_color: "#ff0000".to_string(),
            end_color: "#0000ff".to_string(),
            start_opacity: Some(255),
            end_opacity: Some(255),
        }
    }

    #[test]
    fn test_favorite_lifecycle() {
        let dir = tempdir().unwrap();
        let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();

        assert!(get_favorites(&state).unwrap().is_empty());

        let saved = save_favorite(&state, request("AB")).unwrap();
        assert_eq!(saved.start_color, "#FF0000");
        assert_eq!(get_favorites(&state).unwrap().len(), 1);

        assert_eq!(
            copy_favorite_code(&state, saved.id).unwrap(),
            "<FGFF0000FF>A<FG0000FFFF>B"
        );

        assert!(delete_favorite(&state, saved.id).unwrap().is_empty());
        assert!(copy_favorite_code(&state, saved.id).is_err());
    }

    #[test]
    fn test_favorites_survive_restart() {
        let dir = tempdir().unwrap();
        {
            let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();
            save_favorite(&state, request("keep")).unwrap();
        }

        let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();
        let favorites = get_favorites(&state).unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].message, "keep");
    }

    #[test]
    fn test_invalid_message_is_not_saved() {
        let dir = tempdir().unwrap();
        let state = AppState::with_data_dir(dir.path().to_path_buf()).unwrap();

        let err = save_favorite(&state, request("way too long for the limit")).unwrap_err();
        assert!(err.contains("Character limit exceeded"));
        assert!(get_favorites(&state).unwrap().is_empty());
    }
}
