use std::sync::Arc;

use async_trait::async_trait;

use super::dto::{SynthesizeSpeechRequest, SynthesizeSpeechResponse};
use super::error::SpeechServiceError;
use crate::infrastructure::repositories::{SpeechRepository, UserRepository};

pub struct SpeechService {
    user_repo: Arc<UserRepository>,
    speech_repo: Arc<SpeechRepository>,
}

impl SpeechService {
    pub fn new(user_repo: Arc<UserRepository>, speech_repo: Arc<SpeechRepository>) -> Self {
        Self {
            user_repo,
            speech_repo,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Record a synthesis request for a user.
    ///
    /// This operation:
    /// - Verifies the user exists
    /// - Persists the request and an output row with fabricated paths
    ///
    /// No audio is generated; the file path and playback URL point at
    /// locations an actual synthesis backend would fill in.
    async fn synthesize(
        &self,
        request: SynthesizeSpeechRequest,
    ) -> Result<SynthesizeSpeechResponse, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        request: SynthesizeSpeechRequest,
    ) -> Result<SynthesizeSpeechResponse, SpeechServiceError> {
        tracing::info!(
            user_id = %request.user_id,
            input_format = %request.input_format,
            text_length = request.input_text.len(),
            "Speech synthesis request"
        );

        // 1. Verify the user exists
        self.user_repo
            .find_by_id(request.user_id)
            .await
            .map_err(|e| SpeechServiceError::Dependency(e.to_string()))?
            .ok_or_else(|| SpeechServiceError::NotFound("User not found.".to_string()))?;

        // 2. Fabricate the output locations
        let file_path = format!("/var/www/speech_outputs/{}.mp3", request.user_id);
        let playback_url = format!("https://speech.example.com/play/{}.mp3", request.user_id);

        // 3. Persist the request row
        let speech_request = self
            .speech_repo
            .create_request(
                request.user_id,
                &request.input_text,
                request.input_format,
                request.voice,
                request.speech_speed,
                request.pitch,
                request.volume,
            )
            .await
            .map_err(|e| SpeechServiceError::Dependency(e.to_string()))?;

        // 4. Persist the output row pointing at the fabricated locations
        let output = self
            .speech_repo
            .create_output(speech_request.id, &file_path, &playback_url)
            .await
            .map_err(|e| SpeechServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            speech_request_id = %speech_request.id,
            output_id = %output.id,
            "Speech request recorded"
        );

        Ok(SynthesizeSpeechResponse {
            speech_request_id: speech_request.id,
            status: "SUCCESS".to_string(),
            file_path,
            playback_url,
            error_message: String::new(),
        })
    }
}
