use crate::infrastructure::db::DbPool;
use crate::{
    domain::speech::{InputFormat, SpeechOutput, SpeechRequest, VoiceType},
    error::AppResult,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct SpeechRepository {
    pool: Arc<DbPool>,
}

impl SpeechRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Record a synthesis request
    #[allow(clippy::too_many_arguments)]
    pub async fn create_request(
        &self,
        user_id: Uuid,
        input_text: &str,
        input_format: InputFormat,
        voice: VoiceType,
        speech_speed: f64,
        pitch: f64,
        volume: f64,
    ) -> AppResult<SpeechRequest> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let request = sqlx::query_as::<_, SpeechRequest>(
            r#"
            INSERT INTO speech_requests
                (id, user_id, input_text, input_format, voice, speech_speed, pitch, volume, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(input_text)
        .bind(input_format)
        .bind(voice)
        .bind(speech_speed)
        .bind(pitch)
        .bind(volume)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Record the output locations for a synthesis request
    pub async fn create_output(
        &self,
        speech_request_id: Uuid,
        file_path: &str,
        playback_url: &str,
    ) -> AppResult<SpeechOutput> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let output = sqlx::query_as::<_, SpeechOutput>(
            r#"
            INSERT INTO speech_outputs (id, speech_request_id, file_path, playback_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(speech_request_id)
        .bind(file_path)
        .bind(playback_url)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(output)
    }
}
