use humansize::{DECIMAL, format_size};
use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drive {
    pub name: String,
    pub mount_point: PathBuf,
    /// Free bytes; 0 when unknown.
    pub available_space: u64,
}

impl Display for Drive {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mount_point = self.mount_point.display();
        match (self.name.is_empty(), self.available_space) {
            (true, 0) => write!(f, "{mount_point}"),
            (false, 0) => write!(f, "{} ({mount_point})", self.name),
            (true, space) => write!(f, "{mount_point} ({} free)", format_size(space, DECIMAL)),
            (false, space) => write!(
                f,
                "{} ({mount_point}, {} free)",
                self.name,
                format_size(space, DECIMAL)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(name: &str, mount_point: &str, available_space: u64) -> Drive {
        Drive {
            name: name.to_string(),
            mount_point: PathBuf::from(mount_point),
            available_space,
        }
    }

    #[test]
    fn label_shows_free_space() {
        let label = drive("nvme0n1p2", "/", 12_300_000_000).to_string();

        let free = format_size(12_300_000_000u64, DECIMAL);
        assert_eq!(label, format!("nvme0n1p2 (/, {free} free)"));
        assert!(free.ends_with("GB"));
    }

    #[test]
    fn unnamed_drive_shows_its_mount_point() {
        let label = drive("", "/mnt/usb", 2_000).to_string();

        let free = format_size(2_000u64, DECIMAL);
        assert_eq!(label, format!("/mnt/usb ({free} free)"));
        assert_eq!(drive("", "/", 0).to_string(), "/");
    }

    #[test]
    fn unknown_space_is_left_out() {
        let label = drive("data", "/mnt/data", 0).to_string();
        assert_eq!(label, "data (/mnt/data)");
    }
}
