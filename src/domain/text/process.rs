use serde::{Deserialize, Serialize};

const SUPPORTED_LANGUAGE: &str = "en";
const SUPPORTED_ACCENTS: [&str; 2] = ["American", "British"];

/// Outcome of validating a synthesis input. `processed_text` is present
/// exactly when `success` is true; `request_id` echoes the caller's id on
/// every path. Absent values serialize as explicit nulls so failure payloads
/// always carry all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTextOutput {
    pub success: bool,
    pub message: String,
    pub processed_text: Option<String>,
    pub request_id: Option<String>,
}

impl ProcessTextOutput {
    fn failure(message: &str, request_id: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            processed_text: None,
            request_id: request_id.map(str::to_string),
        }
    }
}

/// Validate and normalize a text-to-speech input.
///
/// Rules are applied in order and the first failing rule wins:
/// 1. `format` must be exactly "PLAIN_TEXT" or "SSML".
/// 2. `language`, when given, must be "en".
/// 3. `accent`, when given, must be "American" or "British".
/// 4. PLAIN_TEXT bodies must be non-empty after trimming; the trimmed text
///    becomes `processed_text`.
/// 5. SSML bodies must contain `<speak>` and `</speak>` and pass through
///    unmodified. Only substring presence is checked, not well-formedness.
///
/// Failures are ordinary results, never errors; the function is pure and
/// total over its inputs.
pub fn process_input(
    id: Option<&str>,
    text: &str,
    format: &str,
    language: Option<&str>,
    accent: Option<&str>,
) -> ProcessTextOutput {
    if format != "PLAIN_TEXT" && format != "SSML" {
        return ProcessTextOutput::failure("Invalid format specified.", id);
    }

    if let Some(language) = language {
        if language != SUPPORTED_LANGUAGE {
            return ProcessTextOutput::failure(
                "Unsupported language. Currently only 'en' is supported.",
                id,
            );
        }
    }

    if let Some(accent) = accent {
        if !SUPPORTED_ACCENTS.contains(&accent) {
            // Message text kept as-is for compatibility with existing
            // clients even though "British" is also accepted.
            return ProcessTextOutput::failure(
                "Unsupported accent. Currently only 'American' is supported.",
                id,
            );
        }
    }

    let processed_text = if format == "PLAIN_TEXT" {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ProcessTextOutput::failure("Text is empty.", id);
        }
        trimmed.to_string()
    } else {
        // SSML passes through untouched, whitespace included.
        if !text.contains("<speak>") || !text.contains("</speak>") {
            return ProcessTextOutput::failure("Invalid SSML content.", id);
        }
        text.to_string()
    };

    ProcessTextOutput {
        success: true,
        message: "Text processed successfully.".to_string(),
        processed_text: Some(processed_text),
        request_id: id.map(str::to_string),
    }
}
