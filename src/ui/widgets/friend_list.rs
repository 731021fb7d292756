use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{AppState, BalanceStatus, Friend};
use crate::ui::colors::{current as current_colors, Colors};

fn button_label(selected: bool) -> &'static str {
    if selected {
        "Close"
    } else {
        "Select"
    }
}

fn friend_line<'a>(friend: &'a Friend, selected: bool, colors: &Colors) -> Line<'a> {
    let status_style = match friend.status() {
        BalanceStatus::YouOwe(_) => colors.owe_style,
        BalanceStatus::OwesYou(_) => colors.owed_style,
        BalanceStatus::Even => colors.even_style,
    };
    let button_style = if selected {
        colors.selected_style
    } else {
        colors.block_style
    };
    Line::from(vec![
        Span::styled(friend.name.as_str(), colors.name_style),
        Span::raw("  "),
        Span::styled(friend.status_line(), status_style),
        Span::raw("  "),
        Span::styled(format!("[{}]", button_label(selected)), button_style),
    ])
}

/// Render the roster, highlighting the cursor row.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = current_colors();
    let selected = state.mode.selected_id();
    let items: Vec<ListItem> = state
        .roster
        .iter()
        .map(|friend| ListItem::new(friend_line(friend, Some(&friend.id) == selected, &colors)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Friends ")
                .style(colors.block_style),
        )
        .highlight_style(colors.highlight_style);
    let mut list_state = ListState::default();
    list_state.select((!state.roster.is_empty()).then_some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}
