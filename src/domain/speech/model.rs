use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded synthesis request. No audio is produced for it; the row is the
/// whole artifact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpeechRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub input_text: String,
    pub input_format: InputFormat,
    pub voice: VoiceType,
    pub speech_speed: f64,
    pub pitch: f64,
    pub volume: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpeechOutput {
    pub id: Uuid,
    pub speech_request_id: Uuid,
    pub file_path: String,
    pub playback_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum InputFormat {
    #[serde(rename = "PLAIN_TEXT")]
    #[sqlx(rename = "PLAIN_TEXT")]
    PlainText,
    #[serde(rename = "SSML")]
    #[sqlx(rename = "SSML")]
    Ssml,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::PlainText => write!(f, "PLAIN_TEXT"),
            InputFormat::Ssml => write!(f, "SSML"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum VoiceType {
    #[serde(rename = "FEMALE_EN_US")]
    #[sqlx(rename = "FEMALE_EN_US")]
    FemaleEnUs,
}

impl std::fmt::Display for VoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceType::FemaleEnUs => write!(f, "FEMALE_EN_US"),
        }
    }
}
