use crate::{entities::FilmId, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid film ID")]
    InvalidFilmId,
    #[error("Film with ID {0} does not exist")]
    FilmNotFound(FilmId),
    #[error("Nik cannot be empty")]
    EmptyNik,
    #[error("Comment description cannot be empty")]
    EmptyText,
    #[error("Invalid pagination parameters")]
    InvalidPagination,
    #[error("Failed to create comment: {0}")]
    CreationFailed(#[source] Box<Error>),
    #[error("Failed to retrieve comment counts: {0}")]
    CountingFailed(#[source] Box<Error>),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn creation_failed(cause: impl Into<Error>) -> Self {
        Self::CreationFailed(Box::new(cause.into()))
    }

    pub fn counting_failed(cause: impl Into<Error>) -> Self {
        Self::CountingFailed(Box::new(cause.into()))
    }

    /// Errors that have been caused by the client
    /// and not by the infrastructure.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Repo(_) => false,
            Self::CreationFailed(cause) | Self::CountingFailed(cause) => cause.is_client_error(),
            Self::InvalidFilmId
            | Self::FilmNotFound(_)
            | Self::EmptyNik
            | Self::EmptyText
            | Self::InvalidPagination => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_creation_failures_by_cause() {
        assert!(Error::creation_failed(Error::EmptyNik).is_client_error());
        assert!(!Error::creation_failed(repositories::Error::NotFound).is_client_error());
    }

    #[test]
    fn classify_counting_failures_by_cause() {
        assert!(Error::counting_failed(Error::InvalidFilmId).is_client_error());
        assert!(!Error::counting_failed(repositories::Error::NotFound).is_client_error());
        assert_eq!(
            "Failed to retrieve comment counts: Invalid film ID",
            Error::counting_failed(Error::InvalidFilmId).to_string()
        );
    }

    #[test]
    fn creation_failure_message_contains_cause() {
        let err = Error::creation_failed(Error::InvalidFilmId);
        assert_eq!("Failed to create comment: Invalid film ID", err.to_string());
    }
}
