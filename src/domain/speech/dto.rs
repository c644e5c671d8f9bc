use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{InputFormat, VoiceType};

/// Request for POST /speech/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeSpeechRequest {
    pub user_id: Uuid,
    pub input_text: String,
    pub input_format: InputFormat,
    pub language: String,
    pub voice: VoiceType,
    pub speech_speed: f64,
    pub pitch: f64,
    pub volume: f64,
}

/// Details about a recorded synthesis request
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeSpeechResponse {
    pub speech_request_id: Uuid,
    pub status: String,
    pub file_path: String,
    pub playback_url: String,
    pub error_message: String,
}
