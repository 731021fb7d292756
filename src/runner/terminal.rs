use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crate::errors::AppError;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Chain a panic hook that puts the terminal back before the panic message
/// is printed. Installed at most once per process.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = reset_terminal_modes();
            previous(info);
        }));
    });
}

fn reset_terminal_modes() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Enter the alternate screen in raw mode and return a ratatui terminal.
pub fn init_terminal() -> Result<Tui, AppError> {
    install_panic_hook();
    enable_raw_mode().map_err(AppError::Terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(AppError::Terminal)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(AppError::Terminal)
}

/// Leave the alternate screen, disable raw mode and show the cursor.
pub fn restore_terminal(mut terminal: Tui) -> Result<(), AppError> {
    disable_raw_mode().map_err(AppError::Terminal)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(AppError::Terminal)?;
    terminal.show_cursor().map_err(AppError::Terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_hook_keeps_unwinding() {
        install_panic_hook();
        install_panic_hook();
        let result = panic::catch_unwind(|| panic!("draw failed"));
        assert!(result.is_err());
    }
}
