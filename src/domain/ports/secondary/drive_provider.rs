use crate::domain::entities::drive::Drive;

pub trait DriveProvider: Send + Sync {
    fn list_drives(&self) -> Vec<Drive>;
}
