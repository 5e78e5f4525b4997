//! Interview engine configuration

use serde::Deserialize;

use crate::application::handlers::interview::ExistingSessionPolicy;

/// Interview engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InterviewConfig {
    /// What to do when a case already has an in-progress session
    #[serde(default)]
    pub existing_session: ExistingSessionPolicy,
}
