use crate::domain::entities::language::Language;
use crate::ui::messages::browse_message::BrowseMessage;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub enum AppMessage {
    ChangeLanguage(Language),
    LanguageChanged(Language, HashMap<String, String>),
    Browse(BrowseMessage),
}
