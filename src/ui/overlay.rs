use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use crate::app::{App, Overlay};
use crate::ui::components::UiComponent;

pub fn render_overlay(app: &App, overlay: &Overlay, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    match overlay {
        Overlay::Notice(notice) => {
            UiComponent::notice(&notice.title, &notice.body).render(area, buf);
        }
        Overlay::Prompt(prompt) => {
            UiComponent::prompt(
                app.catalog.text(prompt.kind.title()),
                app.catalog.text(prompt.kind.label()),
                &prompt.value,
            )
            .render(area, buf);
        }
    }
}
