use ratatui::{layout::Rect, widgets::{Block, Borders, Paragraph}, Frame};

use crate::app::AppState;
use crate::ui::colors::current as current_colors;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = current_colors();
    let (owed, owing) = state.roster.iter().fold((0i64, 0i64), |(owed, owing), fr| {
        if fr.balance > 0 {
            (owed.saturating_add(fr.balance), owing)
        } else {
            (owed, owing.saturating_sub(fr.balance))
        }
    });
    let text = format!(" billSplit | owed to you: {}$ | you owe: {}$ ", owed, owing);
    let p = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).style(colors.header_style))
        .style(colors.header_style);
    f.render_widget(p, area);
}
