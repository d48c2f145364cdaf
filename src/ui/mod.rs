pub mod components;
pub mod style;

mod chat_panel;
mod menu_bar;
mod overlay;
mod session_panel;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::{App, Focus, Overlay};
use crate::i18n::Msg;
use crate::ui::components::UiComponent;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Menu + toolbar
                Constraint::Min(1),    // Panels
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help
            ])
            .split(area);

        menu_bar::render_menu_bar(self, main_layout[0], buf);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_layout[1]);

        session_panel::render_session_panel(self, panels[0], buf);
        chat_panel::render_chat_panel(self, panels[1], buf);

        UiComponent::status(&self.status).render(main_layout[2], buf);

        let help_text = match (&self.overlay, self.focus) {
            (Some(Overlay::Prompt(_)), _) => Msg::HelpPrompt,
            (Some(Overlay::Notice(_)), _) => Msg::HelpNotice,
            (None, Focus::Sessions) => Msg::HelpSessions,
            (None, Focus::Chat) => Msg::HelpChat,
            (None, Focus::Input) => Msg::HelpInput,
        };
        UiComponent::help(self.catalog.text(help_text)).render(main_layout[3], buf);

        if let Some(overlay) = &self.overlay {
            overlay::render_overlay(self, overlay, centered_rect(60, 30, area), buf);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
