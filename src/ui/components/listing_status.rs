use crate::tr;
use crate::ui::messages::browse_message::BrowseMessage;
use iced::widget::{row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Spinner;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingState {
    Idle,
    Scanning,
    Summarizing { done: usize, total: usize },
    Completed { files_listed: usize },
}

pub fn listing_status<'a>(
    state: &ListingState,
    translations: &HashMap<String, String>,
) -> Element<'a, BrowseMessage> {
    match state {
        ListingState::Idle => text(tr!(translations, "resource_hint"))
            .style(text::secondary)
            .into(),
        ListingState::Scanning => spinning(text("")),
        ListingState::Summarizing { done, total } => spinning(
            text(tr!(
                translations,
                "listing_status",
                "done" => &done.to_string(),
                "total" => &total.to_string()
            ))
            .style(text::primary),
        ),
        ListingState::Completed { files_listed: 0 } => text(tr!(translations, "no_files"))
            .style(text::secondary)
            .into(),
        ListingState::Completed { files_listed } => {
            text(tr!(translations, "listing_done", "nb_files" => &files_listed.to_string()))
                .style(text::success)
                .into()
        }
    }
}

fn spinning<'a>(label: iced::widget::Text<'a>) -> Element<'a, BrowseMessage> {
    row![
        Spinner::new()
            .width(Length::Fixed(20.0))
            .height(Length::Fixed(20.0)),
        label
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
