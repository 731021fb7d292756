use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::core::split::amount_text;
use crate::app::{Friend, Payer, SplitField, SplitSession};
use crate::ui::colors::current as current_colors;

/// Label/value pairs shown by the split form, in display order. The
/// friend's share is derived from the draft on every call.
pub fn split_form_fields(friend: &Friend, session: &SplitSession) -> Vec<(String, String, Option<SplitField>)> {
    let draft = &session.draft;
    let payer = match draft.payer {
        Payer::User => "You".to_string(),
        Payer::Friend => friend.name.clone(),
    };
    vec![
        ("Bill value".into(), amount_text(draft.bill()), Some(SplitField::Bill)),
        ("Your expense".into(), amount_text(draft.user_paid()), Some(SplitField::UserPaid)),
        (format!("{}'s expense", friend.name), amount_text(draft.friend_paid()), None),
        ("Who is paying the bill".into(), payer, Some(SplitField::Payer)),
    ]
}

pub fn render(f: &mut Frame, area: Rect, friend: &Friend, session: &SplitSession) {
    let colors = current_colors();
    let lines: Vec<Line> = split_form_fields(friend, session)
        .into_iter()
        .map(|(label, value, field)| {
            let style = if field == Some(session.focus) {
                colors.focused_field_style
            } else {
                colors.field_style
            };
            Line::from(vec![
                Span::styled(format!("{:<24}", label), colors.name_style),
                Span::styled(value, style),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Split a bill with {} ", friend.name))
            .style(colors.block_style),
    );
    f.render_widget(p, area);
}
