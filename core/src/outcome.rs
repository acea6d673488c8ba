//! The exactly-one-of result of a PlayFab call.

use crate::error::PlayFabError;

/// Outcome of one call: either the decoded result or the error, never both
/// and never neither.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<R> {
    Success(R),
    Failure(PlayFabError),
}

impl<R> ApiOutcome<R> {
    pub fn result(&self) -> Option<&R> {
        match self {
            ApiOutcome::Success(result) => Some(result),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PlayFabError> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(error) => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn into_result(self) -> Result<R, PlayFabError> {
        match self {
            ApiOutcome::Success(result) => Ok(result),
            ApiOutcome::Failure(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(result) => ApiOutcome::Success(f(result)),
            ApiOutcome::Failure(error) => ApiOutcome::Failure(error),
        }
    }
}

impl<R> From<Result<R, PlayFabError>> for ApiOutcome<R> {
    fn from(result: Result<R, PlayFabError>) -> Self {
        match result {
            Ok(result) => ApiOutcome::Success(result),
            Err(error) => ApiOutcome::Failure(error),
        }
    }
}

impl<R> From<ApiOutcome<R>> for Result<R, PlayFabError> {
    fn from(outcome: ApiOutcome<R>) -> Self {
        outcome.into_result()
    }
}
