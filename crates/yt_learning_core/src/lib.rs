pub mod domain;
pub mod error;
pub mod learning;
pub mod ports;
pub mod prompt;
pub mod quiz;
pub mod validation;
pub mod youtube;

pub use domain::{LanguageCode, QuizAnswer, QuizQuestion, VideoUrl};
pub use error::{LearningError, ValidationError};
pub use learning::{LearningService, PromptTemplates, DEFAULT_CACHE_TTL_SECS};
pub use ports::{CacheStore, PortError, PortResult, TextGenerationService, TranscriptService};
