use crate::domain::entities::directory_entry::DirectoryEntry;
use crate::tr;
use crate::ui::messages::browse_message::BrowseMessage;
use iced::widget::{column, container, row, scrollable, text};
use iced::font::Weight;
use iced::{Element, Font, Length};
use std::collections::HashMap;

const COLUMN_PORTIONS: [u16; 5] = [2, 1, 2, 2, 5];

/// Header row plus one row per listed file, in arrival order.
#[derive(Default)]
pub struct FileTable {
    rows: Vec<DirectoryEntry>,
}

impl FileTable {
    pub fn rows(&self) -> &[DirectoryEntry] {
        &self.rows
    }

    pub fn push(&mut self, entry: DirectoryEntry) {
        self.rows.push(entry);
    }

    /// Drops every file row. The header is rendered separately and stays.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn view(&'_ self, translations: &HashMap<String, String>) -> Element<'_, BrowseMessage> {
        let header = table_row(
            [
                tr!(translations, "header_name"),
                tr!(translations, "header_size"),
                tr!(translations, "header_last_modified"),
                tr!(translations, "header_type"),
                tr!(translations, "header_summary"),
            ],
            true,
        );

        let file_rows: Vec<Element<'_, BrowseMessage>> = self
            .rows
            .iter()
            .map(|entry| {
                table_row(
                    [
                        entry.name.clone(),
                        entry.size_label(),
                        entry.last_modified.clone(),
                        entry.mime_type.clone(),
                        entry.summary.clone(),
                    ],
                    false,
                )
            })
            .collect();

        let rows = scrollable(column(file_rows)).height(Length::Fill);
        column![header, rows].into()
    }
}

fn table_row<'a>(cells: [String; 5], bold: bool) -> Element<'a, BrowseMessage> {
    let font = if bold {
        Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };

    let cells = cells
        .into_iter()
        .zip(COLUMN_PORTIONS)
        .map(|(cell, portion)| {
            container(text(cell).font(font))
                .padding([5, 10])
                .width(Length::FillPortion(portion))
                .style(container::bordered_box)
                .into()
        });

    row(cells).into()
}
