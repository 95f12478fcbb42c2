#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please select a valid resource type.")]
    NoResourceKind,
}
