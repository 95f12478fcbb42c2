use std::path::PathBuf;

pub trait ResourcePicker: Send + Sync {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
    fn pick_file(&self, title: &str) -> Option<PathBuf>;
}
