use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::{info, warn};

use super::envelope::{parse_envelope, ClassifyError, ClassifyRequest};
use crate::result::ClassificationResult;

pub type ClassifyFuture =
    Pin<Box<dyn Future<Output = Result<ClassificationResult, ClassifyError>> + Send>>;

/// Anything that can turn a photo request into a classification
pub trait Classifier: Send + Sync {
    fn classify(&self, request: ClassifyRequest) -> ClassifyFuture;
}

/// Talks to the remote classification endpoint over HTTPS
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("⚠️  Could not build HTTP client with timeout ({}), using defaults", e);
            Client::new()
        });

        Self::with_client(http, endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Send one POST and parse whatever comes back
    ///
    /// A non-2xx status is only logged: the body still goes through the
    /// envelope parser, which decides what the user sees.
    pub async fn send(&self, request: ClassifyRequest) -> Result<ClassificationResult, ClassifyError> {
        info!(
            "🚀 Classifying photo ({} chars) via {}",
            request.image_base64.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("⚠️  Classification service answered {}", status);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        parse_envelope(&body)
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, request: ClassifyRequest) -> ClassifyFuture {
        let client = self.clone();
        Box::pin(async move { client.send(request).await })
    }
}
