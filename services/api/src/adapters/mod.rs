pub mod cache;
pub mod generation;
pub mod transcript;

pub use cache::RedisCacheAdapter;
pub use generation::OpenAiGenerationAdapter;
pub use transcript::RapidApiTranscriptAdapter;
