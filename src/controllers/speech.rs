use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::speech::{
        SpeechService, SpeechServiceApi, SynthesizeSpeechRequest, SynthesizeSpeechResponse,
    },
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /speech/synthesize - Record a synthesis request
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SynthesizeSpeechRequest>,
    ) -> AppResult<Json<SynthesizeSpeechResponse>> {
        if request.input_text.is_empty() {
            return Err(AppError::BadRequest("Input text cannot be empty".to_string()));
        }

        let response = controller
            .speech_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;
        Ok(Json(response))
    }
}
