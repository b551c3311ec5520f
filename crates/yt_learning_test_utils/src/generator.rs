use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_learning_core::{PortError, PortResult, TextGenerationService};

/// Records `(instructions, input)` pairs and answers with a canned output.
#[derive(Clone)]
pub struct MockGenerator {
    pub output: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            output: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TextGenerationService for MockGenerator {
    async fn generate(&self, instructions: &str, input: &str) -> PortResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((instructions.to_string(), input.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(PortError::Upstream(msg.clone()));
        }
        Ok(self.output.clone())
    }
}
