pub mod http;

use crate::error::CheckError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

pub const LOADING_MESSAGE: &str = "⏳ Analyzing your symptoms...";
pub const EMPTY_INPUT_WARNING: &str = "Please enter your symptoms.";
pub const SERVER_ERROR_PREFIX: &str = "⚠️ Server returned an error: ";
pub const NETWORK_ERROR_MESSAGE: &str = "⚠️ Network error. Is the backend running?";

/// A settled submission, routed back to the UI by ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckMessage {
    pub ticket: u64,
    pub message: String,
}

/// A completed HTTP exchange with the check endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReply {
    pub status: u16,
    pub body: ReplyBody,
}

/// The fields probed on a reply body. Backends disagree on the field name
/// carrying the answer, so all three are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyBody {
    pub suggestion: Option<Value>,
    pub response: Option<Value>,
    pub result: Option<Value>,
    pub detail: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthReport {
    pub message: String,
    #[serde(default)]
    pub use_mock: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub symptoms: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryPage {
    history: Vec<HistoryEntry>,
}

impl ReplyBody {
    /// Non-object bodies carry none of the probed fields. A `null` body
    /// cannot be probed at all and counts as malformed.
    pub fn from_value(value: Value) -> Result<Self, CheckError> {
        match value {
            Value::Null => Err(CheckError::NullBody),
            Value::Object(mut map) => Ok(Self {
                suggestion: map.remove("suggestion"),
                response: map.remove("response"),
                result: map.remove("result"),
                detail: map.remove("detail"),
            }),
            _ => Ok(Self::default()),
        }
    }
}

impl CheckReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The backend's answer: on a 2xx status, the first non-empty of
    /// `suggestion`, `response` and `result`.
    pub fn answer(&self) -> Option<String> {
        if !self.is_success() {
            return None;
        }
        display_text(self.body.suggestion.as_ref())
            .or_else(|| display_text(self.body.response.as_ref()))
            .or_else(|| display_text(self.body.result.as_ref()))
    }

    /// Text to show for this reply. Without an answer it is reported as a
    /// server error carrying `detail`, or the status code when there is no
    /// usable detail.
    pub fn message(&self) -> String {
        if let Some(answer) = self.answer() {
            return answer;
        }
        let reason =
            display_text(self.body.detail.as_ref()).unwrap_or_else(|| self.status.to_string());
        format!("{}{}", SERVER_ERROR_PREFIX, reason)
    }
}

/// Render a probed field, treating null, `false`, `0` and `""` as absent.
fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Map the outcome of one submission to the single message shown for it.
pub fn resolve_message(outcome: &Result<CheckReply, CheckError>) -> String {
    match outcome {
        Ok(reply) => {
            if !reply.is_success() {
                tracing::warn!(status = reply.status, "check endpoint returned an error status");
            }
            reply.message()
        }
        Err(err) => {
            tracing::error!(error = %err, "symptom check request failed");
            NETWORK_ERROR_MESSAGE.to_string()
        }
    }
}

#[async_trait]
pub trait SymptomChecker: Send + Sync {
    /// Submit already-trimmed symptoms. Waits for the exchange to settle.
    async fn check(&self, symptoms: &str) -> Result<CheckReply, CheckError>;

    async fn health(&self) -> Result<HealthReport, CheckError>;

    async fn history(&self) -> Result<Vec<HistoryEntry>, CheckError>;
}
