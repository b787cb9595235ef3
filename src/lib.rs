use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Mutex;

pub mod api_types;
mod cli;
mod color_commands;
pub mod color;
pub mod config;
pub mod database;
pub mod errors;
mod favorite_commands;
pub mod favorites;
pub mod form;
pub mod gradient;
mod gradient_commands;
pub mod i18n;
pub mod icon_catalog;
pub mod repositories;
pub mod services;
pub mod settings;
mod system_commands;
pub mod tag_validator;
pub mod theme;

use crate::cli::{Cli, Commands, FavoriteAction, RecentAction, SettingsAction};
use crate::config::app;
use database::Database;
pub use errors::{AppError, AppResult};
pub use gradient::{generate, GradientSpec};
pub use tag_validator::{validate, ValidationReport};

// アプリケーション状態管理
pub struct AppState {
    pub db: Mutex<Database>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let app_data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| AppError::config("Could not determine a data directory; pass --data-dir"))?
            .join(app::DATA_DIR_NAME);

        Self::with_data_dir(app_data_dir)
    }

    pub fn with_data_dir(app_data_dir: PathBuf) -> Result<Self> {
        // ディレクトリが存在しない場合は作成
        if !app_data_dir.exists() {
            std::fs::create_dir_all(&app_data_dir)?;
        }

        let db_path = app_data_dir.join(app::DATABASE_FILENAME);
        let db = Database::new(&db_path.to_string_lossy())?;
        info!("Opened database at {}", db_path.display());

        Ok(AppState {
            db: Mutex::new(db),
            data_dir: app_data_dir,
        })
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::from(e).to_string())?;
    println!("{text}");
    Ok(())
}

fn dispatch(state: &AppState, command: Commands) -> Result<(), String> {
    match command {
        Commands::Generate { gradient, json } => {
            let request = gradient.to_request();
            let response = gradient_commands::generate_gradient_code(state, request.clone())?;

            // 受け付けた色は最近使った色に記録する
            color_commands::record_recent_color(state, request.start_color)?;
            color_commands::record_recent_color(state, request.end_color)?;

            if json {
                print_json(&response)?;
            } else {
                println!("{}", response.code);
                eprintln!("{}", response.validation.helper_text);
            }
        }
        Commands::Copy { gradient } => {
            println!("{}", gradient_commands::copy_gradient_code(gradient.to_request())?);
        }
        Commands::Validate { message } => {
            let result = gradient_commands::validate_message(state, message)?;
            if result.error_kind.is_some() {
                return Err(result.helper_text);
            }
            println!("{}", result.helper_text);
        }
        Commands::Favorites { action } => match action {
            FavoriteAction::List => {
                let favorites = favorite_commands::get_favorites(state)?;
                if favorites.is_empty() {
                    println!("{}", system_commands::get_messages(state).no_favorites);
                }
                for favorite in favorites {
                    println!(
                        "{}\t{}\t{} -> {}",
                        favorite.id, favorite.message, favorite.start_color, favorite.end_color
                    );
                }
            }
            FavoriteAction::Save { gradient } => {
                let saved = favorite_commands::save_favorite(state, gradient.to_request())?;
                println!("{}", saved.id);
            }
            FavoriteAction::Delete { id } => {
                favorite_commands::delete_favorite(state, id)?;
            }
            FavoriteAction::Copy { id } => {
                println!("{}", favorite_commands::copy_favorite_code(state, id)?);
            }
        },
        Commands::Recent { action } => {
            let colors = match action {
                RecentAction::List => color_commands::get_recent_colors(state)?,
                RecentAction::Add { color } => color_commands::record_recent_color(state, color)?,
                RecentAction::Presets => color_commands::get_preset_colors(),
            };
            for color in colors {
                println!("{color}");
            }
        }
        Commands::Icons { path } => {
            for group in system_commands::load_icon_catalog(&path)? {
                println!("{}", group.name);
                for item in group.items {
                    println!("  {}\t{}", item.code, item.label);
                }
            }
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => print_json(&system_commands::get_settings(state)?)?,
            SettingsAction::Language { code } => {
                print_json(&system_commands::set_language(state, code)?)?
            }
            SettingsAction::Theme { mode } => {
                print_json(&system_commands::set_theme_mode(state, mode)?)?
            }
            SettingsAction::Palette { prefers_dark } => {
                print_json(&system_commands::get_palette(state, prefers_dark)?)?
            }
        },
    }
    Ok(())
}

pub fn run() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    // アプリケーション状態を初期化
    let state = match cli.data_dir {
        Some(dir) => AppState::with_data_dir(dir),
        None => AppState::new(),
    };
    let state = match state {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {e}");
            let message = match e.downcast::<AppError>() {
                Ok(app_error) => app_error.user_message(),
                Err(other) => AppError::from(other).user_message(),
            };
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    if let Err(message) = dispatch(&state, cli.command) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
