use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use billSplit::app::settings::Settings;
use billSplit::ui::draw_state;
use billSplit::{Action, App, FriendId};

fn screen(app: &App) -> String {
    let backend = TestBackend::new(120, 24);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|f| draw_state(f, f.area(), &app.state))
        .expect("failed to draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(c) = buf.cell((x, y)) {
                out.push_str(c.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn roster_shows_status_of_every_friend() {
    let app = App::new(Settings::default());
    let text = screen(&app);
    assert!(text.contains("You owe Clark 7$"), "{}", text);
    assert!(text.contains("Sarah owes you 20$"), "{}", text);
    assert!(text.contains("You are even with Anthony"), "{}", text);
    assert!(text.contains("Select a friend to split a bill."), "{}", text);
    assert!(text.contains("a:add friend"), "{}", text);
}

#[test]
fn selected_friend_shows_split_form_with_derived_share() {
    let mut app = App::new(Settings::default());
    app.dispatch(Action::SelectFriend(FriendId::from("118836")));
    app.dispatch(Action::EditBill(Some(100)));
    app.dispatch(Action::EditUserPaid(Some(30)));
    let text = screen(&app);
    assert!(text.contains("Split a bill with Clark"), "{}", text);
    assert!(text.contains("Clark's expense"), "{}", text);
    assert!(text.contains("70"), "{}", text);
    assert!(text.contains("[Close]"), "{}", text);
}

#[test]
fn add_form_is_drawn_below_roster() {
    let mut app = App::new(Settings::default());
    app.dispatch(Action::ToggleAddForm);
    let text = screen(&app);
    assert!(text.contains("Add friend"), "{}", text);
    assert!(text.contains("https://i.pravatar.cc/48"), "{}", text);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = App::new(Settings::default());
    let backend = TestBackend::new(10, 4);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|f| draw_state(f, f.area(), &app.state))
        .expect("failed to draw");
}
