use crate::app::settings::keybinds;
use crate::app::{Action, AddFriendField, App, Mode};
use crate::input::KeyCode;

/// Keys while the add-friend form is open.
pub fn handle_add_friend(app: &mut App, code: KeyCode) {
    let Mode::AddingFriend(form) = app.mode() else {
        return;
    };
    let focus = form.focus;
    let mut text = form.focused_text().to_string();

    if keybinds::is_esc(&code) {
        app.dispatch(Action::ToggleAddForm);
    } else if keybinds::is_enter(&code) {
        app.submit_add_friend();
    } else if keybinds::is_focus_next(&code) || matches!(code, KeyCode::Down) {
        app.dispatch(Action::FocusNext);
    } else if keybinds::is_focus_prev(&code) || matches!(code, KeyCode::Up) {
        app.dispatch(Action::FocusPrev);
    } else if keybinds::is_backspace(&code) {
        text.pop();
        app.dispatch(edit(focus, text));
    } else if let KeyCode::Char(c) = code {
        text.push(c);
        app.dispatch(edit(focus, text));
    }
}

fn edit(focus: AddFriendField, text: String) -> Action {
    match focus {
        AddFriendField::Name => Action::EditName(text),
        AddFriendField::Image => Action::EditImage(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;
    use crate::app::SequentialIds;

    fn typed(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_add_friend(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn type_name_and_submit() {
        let mut app = App::with_ids(Settings::default(), SequentialIds::new("n"));
        app.dispatch(Action::ToggleAddForm);
        typed(&mut app, "Mix");
        handle_add_friend(&mut app, KeyCode::Backspace);
        typed(&mut app, "a");
        handle_add_friend(&mut app, KeyCode::Enter);

        assert_eq!(app.mode(), &Mode::Idle);
        let last = app.roster().at(app.roster().len() - 1).unwrap();
        assert_eq!(last.name, "Mia");
        assert_eq!(last.image, "https://i.pravatar.cc/48?u=n1");
    }

    #[test]
    fn edit_image_field_after_tab() {
        let mut app = App::new(Settings::default());
        app.dispatch(Action::ToggleAddForm);
        handle_add_friend(&mut app, KeyCode::Tab);
        for _ in 0.."48".len() {
            handle_add_friend(&mut app, KeyCode::Backspace);
        }
        typed(&mut app, "64");
        match app.mode() {
            Mode::AddingFriend(form) => assert_eq!(form.image, "https://i.pravatar.cc/64"),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn submit_without_name_keeps_form_open() {
        let mut app = App::new(Settings::default());
        app.dispatch(Action::ToggleAddForm);
        handle_add_friend(&mut app, KeyCode::Enter);
        assert!(app.mode().is_adding_friend());
        assert_eq!(app.roster().len(), 3);

        handle_add_friend(&mut app, KeyCode::Esc);
        assert_eq!(app.mode(), &Mode::Idle);
    }
}
