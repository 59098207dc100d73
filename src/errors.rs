//! Unified error type for the whole crate.
//!
//! Not-found variants carry the identifier that missed so it shows up in logs;
//! their `Display` output stays terse because it is what API callers see.

use thiserror::Error;

/// Every failure the core and API layers can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// No client with this identifier
    #[error("Client not found")]
    ClientNotFound {
        /// Requested client id
        id: String,
    },

    /// No case with this identifier
    #[error("Case not found")]
    CaseNotFound {
        /// Requested case id
        id: String,
    },

    /// The case does not exist or belongs to another client.
    ///
    /// Both situations deliberately share this variant so callers cannot probe
    /// for case identifiers owned by someone else.
    #[error("Case not found or access denied")]
    CaseAccessDenied {
        /// Client asking for the case
        client_id: String,
        /// Requested case id
        case_id: String,
    },

    /// No document with this identifier
    #[error("Document not found")]
    DocumentNotFound {
        /// Requested document id
        id: String,
    },

    /// No appointment with this identifier
    #[error("Appointment not found")]
    AppointmentNotFound {
        /// Requested appointment id
        id: String,
    },

    /// No case update with this identifier
    #[error("Case update not found")]
    CaseUpdateNotFound {
        /// Requested case update id
        id: String,
    },

    /// Portal login did not match any client
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request payload is malformed
    #[error("Invalid input: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure while storing or removing uploads
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for every "referenced entity is absent" variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClientNotFound { .. }
                | Self::CaseNotFound { .. }
                | Self::CaseAccessDenied { .. }
                | Self::DocumentNotFound { .. }
                | Self::AppointmentNotFound { .. }
                | Self::CaseUpdateNotFound { .. }
        )
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
