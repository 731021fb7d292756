pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{Action, App, AppState, Friend, FriendId, Mode, Payer, Roster};
pub use crate::errors::AppError;

/// One `"{name}: {status}"` line per friend, in roster order.
pub fn roster_report(roster: &Roster) -> String {
    roster
        .iter()
        .map(|f| format!("{}: {}\n", f.name, f.status_line()))
        .collect()
}
