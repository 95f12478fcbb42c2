#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response did not mention the submitted document")]
    MissingDocument,
}
