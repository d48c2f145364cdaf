use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::app::{App, Focus};
use crate::i18n::Msg;
use crate::ui::components::UiComponent;
use crate::ui::style::{border_color, checkbox, dim_unless_focused};

pub fn render_chat_panel(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Chat list
            Constraint::Length(3), // Sampling row
            Constraint::Length(6), // Input
        ])
        .split(area);

    render_chat_list(app, chunks[0], buf);
    render_sampling_row(app, chunks[1], buf);
    render_input(app, chunks[2], buf);
}

fn render_chat_list(app: &App, area: Rect, buf: &mut Buffer) {
    let focused = app.focus == Focus::Chat && app.overlay.is_none();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)))
        .title(app.catalog.text(Msg::ChatTitle));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let header = format!(
        "{} {}",
        checkbox(app.chat.all_selected),
        app.catalog.text(Msg::SelectAll)
    );
    Paragraph::new(header)
        .style(dim_unless_focused(focused, Style::default().fg(Color::Yellow)))
        .render(chunks[0], buf);

    if app.chat.is_empty() {
        UiComponent::empty_message(app.catalog.text(Msg::EmptyChat)).render(chunks[1], buf);
        return;
    }

    let you = app.catalog.text(Msg::You);
    let items: Vec<ListItem> = app
        .chat
        .items()
        .iter()
        .map(|item| {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{} ", checkbox(item.selected))),
                Span::styled(
                    item.mode.label(you).to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}  {}", item.date, item.time),
                    Style::default().fg(Color::Gray),
                ),
            ])];
            lines.extend(item.body.lines().map(|line| Line::from(format!("    {}", line))));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };

    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(app.chat.cursor));
    StatefulWidget::render(list, chunks[1], buf, &mut state);
}

fn render_sampling_row(app: &App, area: Rect, buf: &mut Buffer) {
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);

    let line = Line::from(vec![
        Span::styled(format!("{}: ", app.catalog.text(Msg::Temperature)), label),
        Span::styled(format!("{:.1}", app.sampling.temperature), value),
        Span::raw("   "),
        Span::styled(format!("{}: ", app.catalog.text(Msg::TopP)), label),
        Span::styled(format!("{:.1}", app.sampling.top_p), value),
        Span::raw("   "),
        Span::styled(format!("{}: ", app.catalog.text(Msg::MaxTokens)), label),
        Span::styled(app.sampling.max_tokens.to_string(), value),
    ]);

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(app.catalog.text(Msg::SamplingTitle)),
        )
        .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let focused = app.focus == Focus::Input && app.overlay.is_none();

    let mut lines: Vec<Line> = app.input.split('\n').map(Line::from).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
    }

    Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(focused)))
                .title(app.catalog.text(Msg::InputTitle)),
        )
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
