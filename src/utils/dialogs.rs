use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::fmt::Display;
use std::process::exit;

fn popup(level: MessageLevel, title: &str, message: impl Display) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn popup_error(error: impl Display) {
    popup(MessageLevel::Error, "Error", error);
}

pub fn popup_warning(warning: impl Display) {
    popup(MessageLevel::Warning, "Warning", warning);
}

pub fn popup_error_and_exit(error: impl Display) -> ! {
    popup_error(error);
    exit(1)
}
