use crate::domain::entities::language::Language;
use crate::domain::ports::primary::language_use_case::LanguageUseCase;
use crate::domain::ports::secondary::translation_loader::TranslationLoader;
use std::collections::HashMap;
use std::sync::Arc;

pub struct LanguageService {
    translation_loader: Arc<dyn TranslationLoader>,
}

impl LanguageService {
    pub fn new(translation_loader: Arc<dyn TranslationLoader>) -> Self {
        Self { translation_loader }
    }
}

impl LanguageUseCase for LanguageService {
    fn load_translations(&self, language: &Language) -> HashMap<String, String> {
        self.translation_loader.load_translations(language)
    }
}
