//! In-memory adapters for tests and local runs.

mod case_directory;
mod session_store;

pub use case_directory::StaticCaseDirectory;
pub use session_store::InMemorySessionStore;
