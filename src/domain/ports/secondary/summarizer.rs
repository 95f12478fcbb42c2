use crate::domain::entities::summary::Summary;

pub trait Summarizer: Send + Sync {
    /// Extracts key phrases from `text`. Blocks until the service answers.
    fn summarize(&self, text: &str) -> Summary;
}
