use crate::app::core::split::{amount_text, parse_amount};
use crate::app::settings::keybinds;
use crate::app::{Action, App, Mode, SplitField};
use crate::input::KeyCode;

/// Keys while a friend is selected and the split form is shown.
pub fn handle_split_bill(app: &mut App, code: KeyCode) {
    let Mode::Selected(session) = app.mode() else {
        return;
    };
    let focus = session.focus;
    let selected = session.friend_id.clone();
    let current = match focus {
        SplitField::Bill => session.draft.bill(),
        SplitField::UserPaid => session.draft.user_paid(),
        SplitField::Payer => None,
    };

    if keybinds::is_esc(&code) {
        app.dispatch(Action::SelectFriend(selected));
    } else if keybinds::is_enter(&code) {
        app.dispatch(Action::SubmitSplit);
    } else if keybinds::is_focus_next(&code) {
        app.dispatch(Action::FocusNext);
    } else if keybinds::is_focus_prev(&code) {
        app.dispatch(Action::FocusPrev);
    } else if matches!(code, KeyCode::Up | KeyCode::Down) {
        // Move to the neighbouring friend; stays put at either end.
        let before = app.state.cursor;
        let step = if matches!(code, KeyCode::Up) {
            Action::CursorUp
        } else {
            Action::CursorDown
        };
        app.dispatch(step);
        if app.state.cursor != before {
            app.dispatch(Action::SelectHighlighted);
        }
    } else if keybinds::is_toggle_add_form(&code) {
        app.dispatch(Action::ToggleAddForm);
    } else if keybinds::is_toggle_payer(&code)
        || (focus == SplitField::Payer
            && (keybinds::is_left(&code) || keybinds::is_right(&code) || keybinds::is_char(&code, ' ')))
    {
        app.dispatch(Action::TogglePayer);
    } else if focus != SplitField::Payer {
        let mut text = amount_text(current);
        if keybinds::is_backspace(&code) {
            text.pop();
        } else if let KeyCode::Char(c) = code {
            text.push(c);
        } else {
            return;
        }
        // Non-digit keystrokes fail to parse and are dropped.
        if let Ok(amount) = parse_amount(&text) {
            app.dispatch(match focus {
                SplitField::Bill => Action::EditBill(amount),
                _ => Action::EditUserPaid(amount),
            });
        }
    }
}
