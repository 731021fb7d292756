use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, AppState, Mode};

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Rows taken by the add-friend form: two fields plus borders.
const ADD_FORM_HEIGHT: u16 = 4;

/// Draw one frame for `app`.
pub fn ui(f: &mut Frame, app: &App) {
    draw_state(f, f.area(), &app.state);
}

/// Draw the whole screen for `state` into `area`.
pub fn draw_state(f: &mut Frame, area: Rect, state: &AppState) {
    // header (3), main (min), footer help (3)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    widgets::header::render(f, chunks[0], state);

    // Sidebar: roster, with the add-friend form underneath while open.
    if let Mode::AddingFriend(form) = &state.mode {
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(ADD_FORM_HEIGHT)])
            .split(main[0]);
        widgets::friend_list::render(f, sidebar[0], state);
        widgets::add_friend_form::render(f, sidebar[1], form);
    } else {
        widgets::friend_list::render(f, main[0], state);
    }

    match (&state.mode, state.selected_friend()) {
        (Mode::Selected(session), Some(friend)) => {
            widgets::split_form::render(f, main[1], friend, session)
        }
        _ => {
            let colors = colors::current();
            let hint = Paragraph::new("Select a friend to split a bill.")
                .block(Block::default().borders(Borders::ALL).style(colors.block_style));
            f.render_widget(hint, main[1]);
        }
    }

    widgets::footer::render(f, chunks[2], &state.mode);
}
