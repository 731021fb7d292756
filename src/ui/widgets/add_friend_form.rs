use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AddFriendField, AddFriendForm};
use crate::ui::colors::current as current_colors;

pub fn render(f: &mut Frame, area: Rect, form: &AddFriendForm) {
    let colors = current_colors();
    let field = |label: &'static str, value: &str, which: AddFriendField| {
        let style = if form.focus == which {
            colors.focused_field_style
        } else {
            colors.field_style
        };
        Line::from(vec![
            Span::styled(label, colors.name_style),
            Span::styled(value.to_string(), style),
        ])
    };
    let lines = vec![
        field("Friend's name: ", &form.name, AddFriendField::Name),
        field("Image URL:     ", &form.image, AddFriendField::Image),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add friend ")
            .style(colors.block_style),
    );
    f.render_widget(p, area);
}
