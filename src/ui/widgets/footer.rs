use ratatui::{layout::Rect, widgets::{Block, Borders, Paragraph}, Frame};

use crate::app::Mode;
use crate::ui::colors::current as current_colors;

/// Key hints for the current mode.
pub fn help_text(mode: &Mode) -> &'static str {
    match mode {
        Mode::Idle => "↑/↓:navigate  Enter:select  a:add friend  q:quit",
        Mode::Selected(_) => {
            "Tab:next field  0-9:amount  p:payer  Enter:split bill  ↑/↓:other friend  Esc:close"
        }
        Mode::AddingFriend(_) => "Tab:next field  Enter:add  Esc:close",
    }
}

pub fn render(f: &mut Frame, area: Rect, mode: &Mode) {
    let colors = current_colors();
    let p = Paragraph::new(help_text(mode))
        .block(Block::default().borders(Borders::ALL).style(colors.footer_style));
    f.render_widget(p, area);
}
