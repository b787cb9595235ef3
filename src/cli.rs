use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api_types::GenerateRequest;
use crate::config::gradient::{DEFAULT_END_COLOR, DEFAULT_OPACITY, DEFAULT_START_COLOR};

#[derive(Parser, Debug)]
#[command(name = "gradient-tagger")]
#[command(about = "Generate gradient color tags for chat messages", long_about = None)]
pub struct Cli {
    /// Data directory (default: the per-user data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Message and gradient shared by `generate` and `favorites save`.
#[derive(Args, Debug, Clone)]
pub struct GradientArgs {
    /// Message text, may contain `<...>` icon tokens
    pub message: String,

    /// Start color (RRGGBB, optional leading #)
    #[arg(short, long, default_value = DEFAULT_START_COLOR)]
    pub start: String,

    /// End color (RRGGBB, optional leading #)
    #[arg(short, long, default_value = DEFAULT_END_COLOR)]
    pub end: String,

    /// Start opacity, clamped to 0-255
    #[arg(long, default_value_t = DEFAULT_OPACITY as i64, allow_hyphen_values = true)]
    pub start_opacity: i64,

    /// End opacity, clamped to 0-255
    #[arg(long, default_value_t = DEFAULT_OPACITY as i64, allow_hyphen_values = true)]
    pub end_opacity: i64,
}

impl GradientArgs {
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            message: self.message.clone(),
            start_color: self.start.clone(),
            end_color: self.end.clone(),
            start_opacity: Some(self.start_opacity),
            end_opacity: Some(self.end_opacity),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the tagged code for a message
    Generate {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the code only if the message passes validation
    Copy {
        #[command(flatten)]
        gradient: GradientArgs,
    },

    /// Show icon/character counts for a message
    Validate {
        message: String,
    },

    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Recently used colors
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },

    /// List icons from an icon data file
    Icons {
        path: PathBuf,
    },

    /// Language and theme settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoriteAction {
    /// List saved favorites
    List,
    /// Save a message and gradient
    Save {
        #[command(flatten)]
        gradient: GradientArgs,
    },
    /// Delete a favorite by id
    Delete { id: i64 },
    /// Print the code of a favorite
    Copy { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum RecentAction {
    /// List recent colors
    List,
    /// Record a color
    Add { color: String },
    /// List preset colors
    Presets,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Set the language (en, es, ca)
    Language { code: String },
    /// Set the theme mode (system, light, dark)
    Theme { mode: String },
    /// Print the resolved palette
    Palette {
        /// Resolve `system` as dark
        #[arg(long)]
        prefers_dark: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["gradient-tagger", "generate", "hello"]);
        let Commands::Generate { gradient, json } = cli.command else {
            panic!("expected generate");
        };
        assert!(!json);
        let request = gradient.to_request();
        assert_eq!(request.start_color, "#ff0000");
        assert_eq!(request.end_color, "#0000ff");
        assert_eq!(request.start_opacity, Some(255));
    }

    #[test]
    fn test_favorite_save_arguments() {
        let cli = Cli::parse_from([
            "gradient-tagger",
            "--data-dir",
            "/tmp/x",
            "favorites",
            "save",
            "gg",
            "-s",
            "00ff00",
            "--end-opacity",
            "-5",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        let Commands::Favorites {
            action: FavoriteAction::Save { gradient },
        } = cli.command
        else {
            panic!("expected favorites save");
        };
        assert_eq!(gradient.start, "00ff00");
        assert_eq!(gradient.end_opacity, -5);
    }
}
