use thiserror::Error;

use crate::api::ApiError;

/// Mutation failures split into the two kinds the UI must distinguish:
/// input rejected before any network call, and a remote call that failed.
/// Neither leaves the product set partially mutated.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl MutationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, MutationError::Validation { .. })
    }

    /// Message suitable for the UI flash line.
    pub fn user_message(&self) -> String {
        match self {
            MutationError::Validation { field, reason } => {
                format!("Invalid {}: {}", field, reason)
            }
            MutationError::Remote(err) => err.user_message(),
        }
    }
}
