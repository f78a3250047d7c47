use aquatherm_core::request::{AnalysisRequest, FormField};
use serde::Serialize;

use crate::output::OutputWriter;

/// A request that would have been sent
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRequest {
    pub endpoint: String,
    pub fields: Vec<FormField>,
    pub file: Option<PlannedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub filename: String,
    pub size_bytes: usize,
}

impl PlannedRequest {
    pub fn new(endpoint: impl Into<String>, request: &AnalysisRequest) -> Self {
        Self {
            endpoint: endpoint.into(),
            fields: request.form_fields(),
            file: request.file().map(|file| PlannedFile {
                filename: file.filename.to_string(),
                size_bytes: file.bytes.len(),
            }),
        }
    }
}

/// Display planned requests in dry-run mode
pub fn display_planned_requests(output: &OutputWriter, requests: &[PlannedRequest]) -> anyhow::Result<()> {
    if output.is_json() {
        return output.result(serde_json::json!({
            "dry_run": true,
            "planned_requests": requests,
        }));
    }

    output.section("Planned Requests (Dry Run)");
    for (i, request) in requests.iter().enumerate() {
        output.info(format!("{}. POST {}", i + 1, request.endpoint));
        for field in &request.fields {
            output.info(format!("   - {} = {}", field.name, field.value));
        }
        if let Some(ref file) = request.file {
            output.info(format!("   - file = {} ({} bytes)", file.filename, file.size_bytes));
        }
    }
    output.info("No requests were sent. Run without --dry-run to analyse.");
    Ok(())
}
