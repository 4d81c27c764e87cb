mod empty_message;
mod error_box;
mod help;

pub struct UiComponent;
