//! billSplit: split bills with friends from the terminal.
//!
//! ```bash
//! billSplit                       # interactive UI
//! billSplit --theme light         # override the configured theme
//! billSplit --config my.toml roster
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use billSplit::app::settings::{self, load_settings};
use billSplit::logging::init_logging;
use billSplit::ui::{colors, Theme};
use billSplit::{roster_report, runner, App};

#[derive(Parser, Debug)]
#[command(name = "billSplit")]
#[command(about = "Split bills with friends and keep running balances")]
#[command(version)]
struct Args {
    /// Settings file (TOML). Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme name (dark, light); overrides the settings file
    #[arg(short, long)]
    theme: Option<String>,

    /// Directory for billSplit.log. Defaults to the platform cache directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every friend's balance and exit
    Roster,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging is best effort: a read-only cache dir must not stop the app.
    let _guard = match args.log_dir.clone().or_else(settings::default_log_dir) {
        Some(dir) => match init_logging(&dir, &args.log_level) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("billSplit: logging disabled: {}", e);
                None
            }
        },
        None => None,
    };

    let mut settings = load_settings(args.config.as_deref()).context("loading settings")?;
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    let theme = Theme::from_settings(&settings)?;
    colors::set_from_theme(&theme);
    tracing::info!(theme = %settings.theme, "settings ready");

    let app = App::new(settings);
    match args.command {
        Some(Command::Roster) => print!("{}", roster_report(app.roster())),
        None => {
            let app = runner::run_app(app)?;
            print!("{}", roster_report(app.roster()));
        }
    }
    Ok(())
}
