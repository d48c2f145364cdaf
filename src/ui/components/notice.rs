use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Modal message box body.
    pub fn notice<'a>(title: &'a str, body: &'a str) -> Paragraph<'a> {
        Paragraph::new(body)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .title(title)
                    .title_style(Style::default().add_modifier(Modifier::BOLD))
                    .padding(Padding::uniform(1)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
    }
}
