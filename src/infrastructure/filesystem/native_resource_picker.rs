use crate::domain::ports::secondary::resource_picker::ResourcePicker;
use rfd::FileDialog;
use std::path::PathBuf;

/// Native folder and file dialogs.
///
/// Meant to be called from tokio's blocking pool: the Linux portal backend
/// drives its D-Bus connection on the surrounding runtime.
pub struct NativeResourcePicker;

impl ResourcePicker for NativeResourcePicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        FileDialog::new().set_title(title).pick_folder()
    }

    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        FileDialog::new().set_title(title).pick_file()
    }
}
