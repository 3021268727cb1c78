/// Request body and response envelope for the classification service
///
/// The service wraps its answer twice: the HTTP body is a JSON object whose
/// `result` field is itself a JSON document encoded as a string.
///
/// ```text
/// { "result": "{\"name\":\"Banana Peel\", ... }" }
/// { "result": "{\"error\":true}" }
/// ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::photo::SelectedPhoto;
use crate::result::ClassificationResult;

/// JSON body of the classification POST
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassifyRequest {
    /// Full data-URL, including the `data:<mime>;base64,` prefix
    pub image_base64: String,
    pub prompt: String,
}

impl ClassifyRequest {
    pub fn new(photo: &SelectedPhoto, prompt: &str) -> Self {
        Self {
            image_base64: photo.data_url.clone(),
            prompt: prompt.to_string(),
        }
    }
}

/// Every way a classification attempt can end without cards
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// The envelope has no usable `result` field
    #[error("response envelope has no result")]
    MissingResult,

    /// The inner payload isn't a classification we understand
    #[error("malformed classification payload: {0}")]
    MalformedPayload(String),

    /// The service answered `{"error": true}`
    #[error("service could not identify the item")]
    Unidentified,

    /// The request failed or the reply wasn't JSON at all
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ClassifyError {
    /// Text shown to the user in the blocking alert
    pub fn alert_message(&self) -> String {
        match self {
            ClassifyError::MissingResult => "Failed to process the image. Try again!".to_string(),
            ClassifyError::MalformedPayload(detail) => {
                format!("Failed to process the image. Try again! {}", detail)
            }
            ClassifyError::Unidentified => {
                "Server failed to identify the image. Please try again with a different image!"
                    .to_string()
            }
            ClassifyError::Transport(_) => {
                "Failed to process image. Error occurred while calling the server. Try again!"
                    .to_string()
            }
        }
    }
}

/// Unwrap both layers of a response body into a classification
pub fn parse_envelope(body: &str) -> Result<ClassificationResult, ClassifyError> {
    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| ClassifyError::Transport(format!("response body is not JSON: {}", e)))?;

    let inner = match envelope.get("result") {
        None | Some(Value::Null) => return Err(ClassifyError::MissingResult),
        Some(Value::String(s)) if s.is_empty() => return Err(ClassifyError::MissingResult),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(ClassifyError::MalformedPayload(format!(
                "result is not a string: {}",
                other
            )))
        }
    };

    let payload: Value = serde_json::from_str(inner)
        .map_err(|e| ClassifyError::MalformedPayload(e.to_string()))?;

    if payload.get("error").is_some_and(is_truthy) {
        return Err(ClassifyError::Unidentified);
    }

    serde_json::from_value(payload).map_err(|e| ClassifyError::MalformedPayload(e.to_string()))
}

/// Truthiness of a loosely-typed marker field
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
