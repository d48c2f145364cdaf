use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::app::{App, Focus};
use crate::i18n::Msg;
use crate::ui::components::UiComponent;
use crate::ui::style::{border_color, checkbox, dim_unless_focused};

pub fn render_session_panel(app: &App, area: Rect, buf: &mut Buffer) {
    let focused = app.focus == Focus::Sessions && app.overlay.is_none();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)))
        .title(app.catalog.text(Msg::SessionsTitle));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Select-all header
            Constraint::Min(1),    // Rows
        ])
        .split(inner);

    let header = format!(
        "{} {}",
        checkbox(app.sessions.all_selected),
        app.catalog.text(Msg::SelectAll)
    );
    Paragraph::new(header)
        .style(dim_unless_focused(focused, Style::default().fg(Color::Yellow)))
        .render(chunks[0], buf);

    if app.sessions.is_empty() {
        UiComponent::empty_message(app.catalog.text(Msg::EmptySessions)).render(chunks[1], buf);
        return;
    }

    let items: Vec<ListItem> = app
        .sessions
        .rows()
        .iter()
        .map(|row| {
            let header = Line::from(vec![
                Span::raw(format!("{} ", checkbox(row.selected))),
                Span::styled(row.session.header(), Style::default().fg(Color::Gray)),
                Span::styled("  DEL", Style::default().fg(Color::Red)),
            ]);
            let name = Line::from(Span::styled(
                format!("    {}", row.session.name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            ListItem::new(Text::from(vec![header, name]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(app.sessions.cursor));
    StatefulWidget::render(list, chunks[1], buf, &mut state);
}
