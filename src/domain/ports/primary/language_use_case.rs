use crate::domain::entities::language::Language;
use std::collections::HashMap;

pub trait LanguageUseCase: Send + Sync {
    /// Loads all translations for the given language.
    ///
    /// Returns a [`HashMap`] of localized strings; missing keys fall back to
    /// the key itself when rendered.
    fn load_translations(&self, language: &Language) -> HashMap<String, String>;
}
