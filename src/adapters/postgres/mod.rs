//! PostgreSQL adapters.

mod case_directory;
mod session_store;

pub use case_directory::PostgresCaseDirectory;
pub use session_store::PostgresSessionStore;
