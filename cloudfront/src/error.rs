use aws_sdk_cloudfront::error::{BuildError, SdkError};
use aws_sdk_cloudfront::operation::get_distribution::GetDistributionError;
use aws_sdk_cloudfront::operation::update_distribution::UpdateDistributionError;
use thiserror::Error;

/// Failures of the attach/detach workflow. Store-side errors are passed
/// through untouched so callers can tell a retryable conflict from a
/// permanent failure.
#[derive(Debug, Error)]
pub enum EdgeBinderError {
    #[error("no such distribution: {0}")]
    NoSuchDistribution(String),

    #[error("distribution {0} has no distribution config")]
    MissingDistributionConfig(String),

    #[error(transparent)]
    InvalidAssociation(#[from] BuildError),

    #[error(transparent)]
    GetDistribution(#[from] SdkError<GetDistributionError>),

    #[error(transparent)]
    UpdateDistribution(#[from] SdkError<UpdateDistributionError>),
}

impl EdgeBinderError {
    /// The update was rejected for a stale `IfMatch` token. Re-fetching and
    /// retrying is the caller's call; the binder itself never retries.
    pub fn is_conflict(&self) -> bool {
        match self {
            EdgeBinderError::UpdateDistribution(e) => e
                .as_service_error()
                .is_some_and(UpdateDistributionError::is_precondition_failed),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            EdgeBinderError::NoSuchDistribution(_) | EdgeBinderError::MissingDistributionConfig(_) => true,
            EdgeBinderError::GetDistribution(e) => e
                .as_service_error()
                .is_some_and(GetDistributionError::is_no_such_distribution),
            _ => false,
        }
    }
}
