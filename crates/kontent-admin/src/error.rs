// Error types for AdminClient operations

use kontent_client::ApiError;

/// Errors that can occur during admin client operations
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No viable language codename was found after exhausting every
    /// resolution strategy.
    #[error("could not resolve a language codename: {detail}")]
    LocaleResolution { detail: String },

    #[error("subscription API key and subscription id are not configured")]
    SubscriptionNotConfigured,
}
