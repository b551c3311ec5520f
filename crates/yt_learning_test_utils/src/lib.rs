//! In-memory stand-ins for the core ports, shared by the test suites of every
//! crate in the workspace.

pub mod cache;
pub mod generator;
pub mod transcript;

pub use cache::MockCache;
pub use generator::MockGenerator;
pub use transcript::MockTranscriptService;
