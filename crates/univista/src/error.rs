//! Unified error type for UniVista.

use std::path::PathBuf;

use univista_locale::LocaleError;
use univista_protocol::ProtocolError;
use univista_session::SessionError;
use univista_storage::StorageError;

/// Top-level error that wraps all crate-specific errors.
///
/// Session actions never fail outward (they produce failure notices), so
/// this mostly shows up when building a [`Portal`](crate::Portal):
/// opening storage, loading configuration, restoring the language.
#[derive(Debug, thiserror::Error)]
pub enum UniVistaError {
    /// A value didn't fit a shared type (role, token, stored identity).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Durable storage couldn't be opened, read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Language selection failed.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// A session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The configuration file couldn't be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration isn't valid JSON for
    /// [`PortalConfig`](crate::PortalConfig).
    #[error("invalid config: {0}")]
    ConfigParse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error() {
        let err: UniVistaError = StorageError::Poisoned.into();
        assert!(matches!(err, UniVistaError::Storage(_)));
        assert_eq!(err.to_string(), "storage lock poisoned");
    }

    #[test]
    fn test_from_protocol_error() {
        let err: UniVistaError = ProtocolError::EmptyToken.into();
        assert!(matches!(err, UniVistaError::Protocol(_)));
    }

    #[test]
    fn test_from_locale_error() {
        let err: UniVistaError =
            LocaleError::UnknownLanguage("fr".into()).into();
        assert!(matches!(err, UniVistaError::Locale(_)));
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_from_session_error() {
        let err: UniVistaError = SessionError::Backend("nope".into()).into();
        assert!(matches!(err, UniVistaError::Session(_)));
        assert_eq!(err.to_string(), "nope");
    }
}
