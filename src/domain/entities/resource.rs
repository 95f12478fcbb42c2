use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Folder,
    File,
    Drive,
}

impl ResourceKind {
    pub const ALL: &'static [ResourceKind] = &[
        ResourceKind::Folder,
        ResourceKind::File,
        ResourceKind::Drive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Folder => "Folder",
            ResourceKind::File => "File",
            ResourceKind::Drive => "Hard Drive",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// Where a selection landed: the path shown to the user and the directory to list.
///
/// They differ only in file mode, where the chosen file is displayed but its
/// parent directory is listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedResource {
    pub display_path: PathBuf,
    pub directory: PathBuf,
}

impl ResolvedResource {
    pub fn directory(directory: PathBuf) -> Self {
        Self {
            display_path: directory.clone(),
            directory,
        }
    }
}
