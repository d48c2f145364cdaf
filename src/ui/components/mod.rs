mod empty_message;
mod help;
mod notice;
mod prompt;
mod status;

/// Namespace for the small Paragraph builders shared by the panels.
pub struct UiComponent;
