//! Response decoding against the result schema

use aquatherm_core::error::ErrorInfo;
use aquatherm_core::models::AnalysisResult;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body the service attaches to non-success responses
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// Translate a status and body into a typed outcome
pub fn decode_response(status: StatusCode, body: &str) -> Result<AnalysisResult, ErrorInfo> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .map(|error| error.detail)
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| format!("Analysis failed with status {}", status.as_u16()));
        return Err(ErrorInfo::server_rejected(message));
    }

    let result: AnalysisResult = serde_json::from_str(body).map_err(|e| {
        ErrorInfo::malformed(format!("Response does not match the analysis schema: {}", e))
    })?;

    result
        .validate()
        .map_err(|reason| ErrorInfo::malformed(format!("Response failed validation: {}", reason)))?;

    Ok(result)
}
