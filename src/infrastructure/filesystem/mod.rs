pub mod native_resource_picker;
pub mod system_drives;
