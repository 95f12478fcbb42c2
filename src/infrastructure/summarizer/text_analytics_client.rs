use crate::config::settings::AzureSettings;
use crate::domain::entities::summary::Summary;
use crate::domain::errors::summarizer_error::SummarizerError;
use crate::domain::ports::secondary::summarizer::Summarizer;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const KEY_PHRASES_PATH: &str = "text/analytics/v3.1/keyPhrases";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const DOCUMENT_ID: &str = "1";

/// Key phrase extraction through the Azure AI Language REST API.
pub struct TextAnalyticsClient {
    client: Client,
    url: String,
    api_key: String,
    language: String,
}

#[derive(Serialize)]
struct KeyPhrasesRequest<'a> {
    documents: [RequestDocument<'a>; 1],
}

#[derive(Serialize)]
struct RequestDocument<'a> {
    id: &'a str,
    language: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct KeyPhrasesResponse {
    #[serde(default)]
    documents: Vec<DocumentResult>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentResult {
    id: String,
    #[serde(default)]
    key_phrases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentError {
    id: String,
}

impl TextAnalyticsClient {
    /// # Errors
    ///
    /// Returns a [`SummarizerError::Http`] if the HTTP client cannot be built.
    pub fn new(settings: &AzureSettings) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(settings.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self {
            client,
            url: key_phrases_url(&settings.endpoint),
            api_key: settings.api_key.clone(),
            language: settings.language.clone(),
        })
    }

    fn extract_key_phrases(&self, text: &str) -> Result<Summary, SummarizerError> {
        let request = KeyPhrasesRequest {
            documents: [RequestDocument {
                id: DOCUMENT_ID,
                language: &self.language,
                text,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unable to read error message".to_string());
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        interpret_response(response.json()?)
    }
}

impl Summarizer for TextAnalyticsClient {
    fn summarize(&self, text: &str) -> Summary {
        self.extract_key_phrases(text)
            .unwrap_or_else(|error| Summary::TransportFailure(error.to_string()))
    }
}

fn key_phrases_url(endpoint: &str) -> String {
    format!("{}/{KEY_PHRASES_PATH}", endpoint.trim_end_matches('/'))
}

fn interpret_response(response: KeyPhrasesResponse) -> Result<Summary, SummarizerError> {
    if response.errors.iter().any(|error| error.id == DOCUMENT_ID) {
        return Ok(Summary::ServiceError);
    }
    response
        .documents
        .into_iter()
        .find(|document| document.id == DOCUMENT_ID)
        .map(|document| Summary::KeyPhrases(document.key_phrases))
        .ok_or(SummarizerError::MissingDocument)
}
