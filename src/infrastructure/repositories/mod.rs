pub mod speech_repository;
pub mod user_repository;

pub use speech_repository::SpeechRepository;
pub use user_repository::UserRepository;
