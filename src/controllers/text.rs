use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::text::{process_input, ProcessTextOutput};

/// Request for POST /text/process
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// POST /text/process - Validate and normalize synthesis input.
///
/// Always responds 200; validation failures are `success=false` payloads.
pub async fn process_text(Json(request): Json<ProcessTextRequest>) -> Json<ProcessTextOutput> {
    let result = process_input(
        request.id.as_deref(),
        &request.text,
        &request.format,
        request.language.as_deref(),
        request.accent.as_deref(),
    );

    tracing::debug!(
        request_id = ?result.request_id,
        success = result.success,
        message = %result.message,
        "Text processed"
    );

    Json(result)
}
