pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

use serde::Deserialize;

use crate::app::core::add_friend::DEFAULT_AVATAR_BASE;
use crate::app::core::balance::Friend;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_log_dir, default_settings_path, project_dirs};
pub use read_settings::{load_settings, parse_settings};

/// User configuration, read from `settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Built-in theme name: `dark` or `light`.
    pub theme: String,
    /// Image URL new friends start with.
    pub avatar_base: String,
    /// Optional palette overriding the built-in theme colors.
    pub palette: Option<PaletteSettings>,
    /// Starting roster. Empty means the built-in sample roster.
    pub friends: Vec<Friend>,
}

/// Hex colors (`#RRGGBB`) for the base palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteSettings {
    pub bg: String,
    pub fg: String,
    pub accent: String,
    pub owe: Option<String>,
    pub owed: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            avatar_base: DEFAULT_AVATAR_BASE.to_string(),
            palette: None,
            friends: Vec::new(),
        }
    }
}
