use ratatui::style::{Color, Style, Stylize};

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

pub fn border_color(is_focused: bool) -> Color {
    if is_focused { Color::Cyan } else { Color::DarkGray }
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
