use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::{Mutex, MutexGuard};

use crate::ui::Theme;

/// Concrete styles used by the widgets, derived from a `Theme`.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub block_style: Style,
    pub header_style: Style,
    pub footer_style: Style,
    /// Row under the roster cursor.
    pub highlight_style: Style,
    /// Marker of the selected friend.
    pub selected_style: Style,
    pub name_style: Style,
    pub owe_style: Style,
    pub owed_style: Style,
    pub even_style: Style,
    pub field_style: Style,
    pub focused_field_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn lock() -> MutexGuard<'static, Colors> {
    CURRENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn derive(theme: &Theme) -> Colors {
    let base = theme.style_fg();
    Colors {
        block_style: base,
        header_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
        footer_style: base,
        highlight_style: Style::default().fg(theme.bg).bg(theme.accent),
        selected_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
        name_style: base.add_modifier(Modifier::BOLD),
        owe_style: base.fg(theme.owe),
        owed_style: base.fg(theme.owed),
        even_style: base,
        field_style: base,
        focused_field_style: base.fg(theme.accent).add_modifier(Modifier::REVERSED),
    }
}

/// Derive concrete runtime styles from `theme` and make them current.
pub fn set_from_theme(theme: &Theme) {
    *lock() = derive(theme);
}

pub fn current() -> Colors {
    lock().clone()
}
