use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::i18n::Msg;

pub fn render_menu_bar(app: &App, area: Rect, buf: &mut Buffer) {
    let text = Text::from(vec![
        Line::from(app.catalog.text(Msg::MenuBar)).fg(Color::White),
        Line::from(app.catalog.text(Msg::Toolbar)).fg(Color::Gray),
    ]);

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(format!(" {} ", app.catalog.text(Msg::AppTitle)))
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        )
        .render(area, buf);
}
