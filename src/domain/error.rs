//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps each variant to a status code
//! and one of the legacy response envelopes the API has always produced.

/// Failure raised by a handler or repository.
///
/// The split between [`Error::NotFound`] and [`Error::Missing`] is a wire
/// compatibility concern: reference-data lookups answer with an `Error` key,
/// the favourites flow answers with a `msg` key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Reference-data lookup miss, rendered as `{"Error": "..."}` with 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Favourites-flow lookup miss, rendered as `{"msg": "..."}` with 404.
    #[error("{message}")]
    Missing { message: String },

    /// Store failure, rendered as a bare 500 carrying the error text.
    #[error("{message}")]
    Store { message: String },
}

impl Error {
    /// Construct a [`Error::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Construct a [`Error::Missing`].
    pub fn missing(message: impl Into<String>) -> Self {
        Self::Missing {
            message: message.into(),
        }
    }

    /// Construct a [`Error::Store`].
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message } | Self::Missing { message } | Self::Store { message } => {
                message.as_str()
            }
        }
    }
}

impl From<crate::domain::ports::RepositoryError> for Error {
    fn from(err: crate::domain::ports::RepositoryError) -> Self {
        Self::store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RepositoryError;
    use rstest::rstest;

    #[rstest]
    fn constructors_carry_message() {
        assert_eq!(Error::not_found("Person not found").message(), "Person not found");
        assert_eq!(Error::missing("No existe el usuario").message(), "No existe el usuario");
        assert_eq!(Error::store("boom").message(), "boom");
    }

    #[rstest]
    fn repository_errors_become_store_failures() {
        let err: Error = RepositoryError::connection("refused").into();
        assert!(matches!(err, Error::Store { .. }));
        assert!(err.message().contains("refused"));
    }
}
