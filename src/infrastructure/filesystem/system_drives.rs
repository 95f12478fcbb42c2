use crate::config::constants::FALLBACK_DRIVE_ROOT;
use crate::domain::entities::drive::Drive;
use crate::domain::ports::secondary::drive_provider::DriveProvider;
use std::collections::HashSet;
use std::path::PathBuf;
use sysinfo::{DiskRefreshKind, Disks};

/// Drives mounted on this machine, as reported by `sysinfo`.
pub struct SystemDrives;

impl DriveProvider for SystemDrives {
    fn list_drives(&self) -> Vec<Drive> {
        let refresh = DiskRefreshKind::with_storage(DiskRefreshKind::default());
        let disks = Disks::new_with_refreshed_list_specifics(refresh);

        let reported = disks.iter().map(|disk| Drive {
            name: disk.name().to_string_lossy().into_owned(),
            mount_point: disk.mount_point().to_path_buf(),
            available_space: disk.available_space(),
        });
        let mut drives = unique_mount_points(reported);

        if drives.is_empty() {
            drives.push(Drive {
                name: String::new(),
                mount_point: PathBuf::from(FALLBACK_DRIVE_ROOT),
                available_space: 0,
            });
        }
        drives
    }
}

/// Keeps the first drive reported for each mount point, in reporting order.
fn unique_mount_points(drives: impl Iterator<Item = Drive>) -> Vec<Drive> {
    let mut seen = HashSet::new();
    drives
        .filter(|drive| seen.insert(drive.mount_point.clone()))
        .collect()
}
