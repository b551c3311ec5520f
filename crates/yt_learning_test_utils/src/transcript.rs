use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_learning_core::{LanguageCode, PortError, PortResult, TranscriptService, VideoUrl};

#[derive(Clone)]
pub struct MockTranscriptService {
    pub transcript: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptService {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            transcript: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptService for MockTranscriptService {
    async fn fetch_transcript(
        &self,
        video: &VideoUrl,
        language: &LanguageCode,
    ) -> PortResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((video.video_id.clone(), language.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(PortError::Upstream(msg.clone()));
        }
        Ok(self.transcript.clone())
    }
}
