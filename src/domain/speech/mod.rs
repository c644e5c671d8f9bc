pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{SynthesizeSpeechRequest, SynthesizeSpeechResponse};
pub use error::SpeechServiceError;
pub use model::{InputFormat, SpeechOutput, SpeechRequest, VoiceType};
pub use service::{SpeechService, SpeechServiceApi};
