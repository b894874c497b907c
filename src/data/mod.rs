mod film;
mod loader;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use film::{Dataset, Film};
pub use loader::{DatasetLoader, LoadOutcome};
