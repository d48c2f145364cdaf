use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Bottom status line, left aligned like a window status bar.
    pub fn status(status: &str) -> Paragraph<'_> {
        Paragraph::new(status)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Status ")
            )
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Left)
    }
}
