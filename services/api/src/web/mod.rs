pub mod middleware;
pub mod rest;
pub mod router;
pub mod schemas;
pub mod state;

// Re-export the router builder so the binary and the tests share one definition.
pub use router::create_router;
pub use state::AppState;
