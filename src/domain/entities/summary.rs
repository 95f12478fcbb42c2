use std::fmt::{Display, Formatter, Result};

pub const SERVICE_ERROR_MESSAGE: &str = "Error summarizing the file.";

/// Outcome of asking the remote key-phrase service about one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Summary {
    KeyPhrases(Vec<String>),
    /// The service accepted the request but flagged the document as failed.
    ServiceError,
    /// Anything that kept the request from completing: unreadable file,
    /// network or authentication failure, malformed response.
    TransportFailure(String),
}

impl Summary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Summary::KeyPhrases(_))
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Summary::KeyPhrases(phrases) => {
                write!(f, "Key phrases extracted: {}", phrases.join(", "))
            }
            Summary::ServiceError => f.write_str(SERVICE_ERROR_MESSAGE),
            Summary::TransportFailure(details) => {
                write!(f, "Azure summarization failed: {details}")
            }
        }
    }
}
