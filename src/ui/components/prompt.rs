use ratatui::{
    prelude::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Single-line input dialog: label above, value with a cursor bar below.
    pub fn prompt<'a>(title: &'a str, label: &'a str, value: &'a str) -> Paragraph<'a> {
        let text = Text::from(vec![
            Line::from(label),
            Line::from(""),
            Line::from(vec![
                Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            ]),
        ]);

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(title)
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false })
    }
}
