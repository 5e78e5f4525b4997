//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod case_directory;
mod session_store;

pub use case_directory::CaseDirectory;
pub use session_store::SessionStore;
