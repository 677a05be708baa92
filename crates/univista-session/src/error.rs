//! Error types for the session layer.

use univista_protocol::ProtocolError;
use univista_storage::StorageError;

/// Errors that can occur inside a session action.
///
/// These stay inside [`SessionStore`](crate::SessionStore): every action
/// catches them and turns them into a failure notice. Their `Display`
/// text is what the user sees as the failure description.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The [`AuthBackend`](crate::AuthBackend) refused the request.
    /// The message is shown to the user as-is.
    #[error("{0}")]
    Backend(String),

    /// Reading or writing durable storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A stored value couldn't be encoded or decoded, or a token was
    /// empty.
    #[error(transparent)]
    Codec(#[from] ProtocolError),
}
