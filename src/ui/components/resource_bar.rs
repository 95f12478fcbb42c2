use crate::domain::entities::drive::Drive;
use crate::domain::entities::resource::ResourceKind;
use crate::tr;
use crate::ui::messages::browse_message::BrowseMessage;
use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use std::collections::HashMap;

/// Resource kind menu, path field and the button that starts a selection.
#[derive(Default)]
pub struct ResourceBar {
    pub kind: Option<ResourceKind>,
    pub path: String,
    pub drives: Vec<Drive>,
    pub selected_drive: Option<Drive>,
}

impl ResourceBar {
    pub fn select_kind(&mut self, kind: ResourceKind) {
        self.kind = Some(kind);
        self.path = kind.label().to_string();
    }

    pub fn set_drives(&mut self, drives: Vec<Drive>) {
        if self.selected_drive.is_none() {
            self.selected_drive = drives.first().cloned();
        }
        self.drives = drives;
    }

    pub fn view(
        &'_ self,
        translations: &HashMap<String, String>,
        can_select: bool,
    ) -> Element<'_, BrowseMessage> {
        let kind_menu = pick_list(
            ResourceKind::ALL,
            self.kind,
            BrowseMessage::ResourceKindSelected,
        )
        .placeholder(tr!(translations, "select_resource"));

        let path_input = text_input(&tr!(translations, "resource_path_placeholder"), &self.path)
            .on_input(BrowseMessage::PathChanged)
            .padding(8)
            .width(Length::Fill);

        let select_button = button(text(tr!(translations, "select_button")))
            .on_press_maybe(can_select.then_some(BrowseMessage::SelectPressed))
            .padding(8)
            .style(button::primary);

        let mut bar = row![text("🖥️").size(32), kind_menu];
        if self.kind == Some(ResourceKind::Drive) {
            bar = bar.push(
                pick_list(
                    self.drives.as_slice(),
                    self.selected_drive.clone(),
                    BrowseMessage::DriveSelected,
                )
                .placeholder(tr!(translations, "select_drive_placeholder")),
            );
        }

        bar.push(path_input)
            .push(select_button)
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
    }
}
