use directories_next::ProjectDirs;
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.toml";
pub const LOG_FILE: &str = "billSplit.log";

/// Platform project directories, if a home directory can be determined.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "billSplit")
}

/// `<config dir>/settings.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(SETTINGS_FILE))
}

/// Directory the log file is written to when `--log-dir` is not given.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}
