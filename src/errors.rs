use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::app::FriendId;

/// Errors surfaced by the ambient layer (settings, terminal, logging).
/// The bill-splitting core itself never fails.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read settings `{path}`: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in `{path}`: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate friend id `{id}` in `{path}`")]
    DuplicateFriendId { path: PathBuf, id: FriendId },

    #[error("unknown theme `{0}` (expected `dark` or `light`)")]
    UnknownTheme(String),

    #[error("invalid color `{0}` (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
