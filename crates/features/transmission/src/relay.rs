use crate::error::{TransmissionError, TransmissionErrorExt};
use crate::form::ContactPayload;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::OnceLock;
use typed_builder::TypedBuilder;

/// Outbound transport for a finished contact payload.
#[async_trait(?Send)]
pub trait FormRelay {
    /// # Errors
    /// Returns [`TransmissionError::Transport`] when no response arrives and
    /// [`TransmissionError::Rejected`] for any non-2xx status.
    async fn post(&self, payload: &ContactPayload) -> Result<(), TransmissionError>;
}

/// Process-wide HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// JSON-over-HTTPS relay (a form-to-email service).
#[derive(Debug, Clone, TypedBuilder)]
pub struct HttpRelay {
    #[builder(setter(into))]
    endpoint: String,
    #[builder(default = http_client().clone())]
    client: reqwest::Client,
}

impl HttpRelay {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpRelay {
    async fn post(&self, payload: &ContactPayload) -> Result<(), TransmissionError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact payload");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .context("Posting to form relay")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(TransmissionError::Rejected { status: status.as_u16(), context: None })
    }
}
