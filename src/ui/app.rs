use crate::domain::entities::language::Language;
use crate::ui::app_factory::ExplorerAppService;
use crate::ui::messages::app_message::AppMessage;
use crate::ui::pages::browse_page::BrowsePage;
use iced::widget::{button, column, row, text};
use iced::window::Settings;
use iced::{Element, Length, Size, Task};
use std::collections::HashMap;

pub struct ExplorerApp {
    service: ExplorerAppService,
    current_language: Language,
    translations: HashMap<String, String>,
    page: BrowsePage,
}

impl ExplorerApp {
    pub fn new(service: ExplorerAppService) -> (Self, Task<AppMessage>) {
        let current_language = service.settings.ui_language();
        let translations = service
            .language_use_case
            .load_translations(&current_language);
        let (page, task) = BrowsePage::new(
            service.listing_use_case.clone(),
            service.selection_use_case.clone(),
        );

        (
            Self {
                service,
                current_language,
                translations,
                page,
            },
            task.map(AppMessage::Browse),
        )
    }

    #[must_use]
    pub fn window() -> Settings {
        Settings {
            size: Size::new(1200.0, 720.0),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} (v{})",
            BrowsePage::title(&self.translations),
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn view(&'_ self) -> Element<'_, AppMessage> {
        column![
            self.language_toggle(),
            self.page.view(&self.translations).map(AppMessage::Browse)
        ]
        .padding(10)
        .into()
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::ChangeLanguage(language) => self.change_language(language),
            AppMessage::LanguageChanged(language, translations) => {
                self.current_language = language;
                self.translations = translations;
                Task::none()
            }
            AppMessage::Browse(msg) => self
                .page
                .update(msg, &self.translations)
                .map(AppMessage::Browse),
        }
    }

    fn language_toggle(&'_ self) -> Element<'_, AppMessage> {
        let toggle_button = button(text(self.current_language.to_string()))
            .on_press(AppMessage::ChangeLanguage(self.current_language.toggle()));

        row![column![].width(Length::Fill), toggle_button]
            .width(Length::Fill)
            .into()
    }

    fn change_language(&self, language: Language) -> Task<AppMessage> {
        let language_use_case = self.service.language_use_case.clone();
        Task::perform(
            async move {
                let translations = language_use_case.load_translations(&language);
                (language, translations)
            },
            |(language, translations)| AppMessage::LanguageChanged(language, translations),
        )
    }
}
