// Centralised keybind predicates.
//
// Handlers ask "is this the submit key" rather than matching raw `KeyCode`
// patterns, so a binding changes in one place.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q'))
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_select(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

pub fn is_toggle_add_form(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('a'))
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Backspace)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

pub fn is_focus_next(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Tab)
}

pub fn is_focus_prev(code: &KeyCode) -> bool {
    matches!(code, KeyCode::BackTab)
}

pub fn is_left(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left)
}

pub fn is_right(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right)
}

pub fn is_toggle_payer(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('p'))
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
    matches!(code, &KeyCode::Char(c) if c == want)
}
