use std::time::{Duration, Instant};

use aquatherm_core::config::LayeredConfig;
use aquatherm_core::error::{AquathermError, ErrorInfo, Result};
use aquatherm_core::models::AnalysisResult;
use aquatherm_core::ports::AnalysisService;
use aquatherm_core::request::AnalysisRequest;
use async_trait::async_trait;

use crate::decode::decode_response;
use crate::form;

/// Analysis service reached over HTTP
pub struct HttpAnalysisClient {
    /// Base URL without trailing slash (e.g., "http://localhost:8000/api")
    base_url: String,

    /// Bound on a single call, connect through body
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AquathermError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Create from layered configuration
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        Self::new(config.api_base_url.value.clone(), config.timeout())
    }

    /// Full analysis endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/analyze/", self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, error: reqwest::Error) -> ErrorInfo {
        if error.is_timeout() {
            ErrorInfo::transport(format!(
                "Analysis request timed out after {}s",
                self.timeout.as_secs_f64()
            ))
        } else if error.is_connect() {
            ErrorInfo::transport(format!(
                "Could not connect to analysis service at {}: {}",
                self.endpoint(),
                error
            ))
        } else {
            ErrorInfo::transport(format!("Request to {} failed: {}", self.endpoint(), error))
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: AnalysisRequest) -> std::result::Result<AnalysisResult, ErrorInfo> {
        let endpoint = self.endpoint();
        let form = form::encode(&request)?;
        let started = Instant::now();

        tracing::debug!(
            endpoint = %endpoint,
            use_satellite = request.use_satellite(),
            simulation = request.is_simulation(),
            "Sending analysis request"
        );

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let error = self.transport_error(e);
                tracing::warn!(endpoint = %endpoint, error = %error, "Analysis request failed");
                error
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::info!(
            endpoint = %endpoint,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            simulation = request.is_simulation(),
            "Analysis response received"
        );

        decode_response(status, &body).inspect_err(|error| {
            tracing::warn!(kind = %error.kind, message = %error.message, "Analysis failed");
        })
    }
}
