//! Error types for the protocol layer.
//!
//! Each crate in UniVista defines its own error enum. A `ProtocolError`
//! always means a value did not satisfy the shape or invariants of one of
//! the shared types: an unknown role string, an empty token, a stored
//! identity that no longer parses.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into a string).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a stored string into a Rust type).
    ///
    /// Common causes: a hand-edited storage file, a `user` entry written
    /// by something else, or a truncated value.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A role string was neither `student` nor `professor`.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// A credential token was empty.
    #[error("credential token must not be empty")]
    EmptyToken,
}
