use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

use std::time::Duration;
use tracing::info;

/// Run the interactive UI until the user quits. The terminal is restored
/// even when the loop fails.
pub fn run_app(mut app: App) -> anyhow::Result<App> {
    let mut terminal = init_terminal()?;
    info!(friends = app.roster().len(), "ui started");

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    result?;

    info!("ui stopped");
    Ok(app)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key) {
                        return Ok(());
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }
}
