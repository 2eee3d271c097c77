//! Error type for farm operations
//!
//! The per-tick simulation path never fails; bounded values are clamped
//! instead. Errors only come from configuration and id-addressed commands.

use thiserror::Error;

use crate::types::AgentId;

#[derive(Debug, Error)]
pub enum FarmError {
    #[error("no animal with id {id}")]
    AgentNotFound { id: AgentId },

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to parse farm config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("failed to serialize farm config: {0}")]
    ConfigSerialize(#[from] ron::Error),
}
