use super::{CheckReply, HealthReport, HistoryEntry, HistoryPage, ReplyBody, SymptomChecker};
use crate::error::CheckError;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    symptoms: &'a str,
}

/// Talks to the HealBuddy backend over HTTP.
///
/// The client is built without a timeout: a submission waits until the
/// exchange settles one way or the other.
pub struct HttpChecker {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(endpoint: &str) -> Result<Self, CheckError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| CheckError::InvalidEndpoint(e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CheckError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve a path against the endpoint's origin.
    fn sibling(&self, path: &str) -> Result<Url, CheckError> {
        self.endpoint
            .join(path)
            .map_err(|e| CheckError::InvalidEndpoint(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CheckError> {
        let url = self.sibling(path)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CheckError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SymptomChecker for HttpChecker {
    async fn check(&self, symptoms: &str) -> Result<CheckReply, CheckError> {
        tracing::info!(endpoint = %self.endpoint, chars = symptoms.len(), "submitting symptoms");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .body(serde_json::to_vec(&CheckRequest { symptoms })?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let body = ReplyBody::from_value(value)?;

        tracing::debug!(status, "check settled");
        Ok(CheckReply { status, body })
    }

    async fn health(&self) -> Result<HealthReport, CheckError> {
        self.get_json("/").await
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, CheckError> {
        let page: HistoryPage = self.get_json("/history").await?;
        Ok(page.history)
    }
}
