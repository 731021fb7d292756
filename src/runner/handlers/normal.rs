use crate::app::settings::keybinds;
use crate::app::{Action, App};
use crate::input::KeyCode;

/// Keys while no friend is selected and the add form is closed.
pub fn handle_normal(app: &mut App, code: KeyCode) {
    if keybinds::is_quit(&code) || keybinds::is_esc(&code) {
        app.should_quit = true;
    } else if keybinds::is_down(&code) {
        app.dispatch(Action::CursorDown);
    } else if keybinds::is_up(&code) {
        app.dispatch(Action::CursorUp);
    } else if keybinds::is_select(&code) {
        app.dispatch(Action::SelectHighlighted);
    } else if keybinds::is_toggle_add_form(&code) {
        app.dispatch(Action::ToggleAddForm);
    }
}
