//! Codec trait and implementations for values kept in durable storage.
//!
//! Durable local state is string-keyed and string-valued, so a codec here
//! converts between Rust types and `String`, not bytes. The session layer
//! uses it for the `user` entry; nothing else needs to know the format.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes values into storage strings and decodes them back.
///
/// `Send + Sync + 'static` so a codec can sit inside a store that is moved
/// into async tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a string.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if the value can't be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes a string back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the string is malformed or
    /// doesn't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &str,
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// An [`Identity`](crate::Identity) encodes as
/// `{"id":"1","name":"jane","email":"jane@example.com","role":"professor"}`.
///
/// ```rust
/// use univista_protocol::{Codec, Identity, JsonCodec, Role};
///
/// let codec = JsonCodec;
/// let identity =
///     Identity::new("1", "jane", "jane@example.com", Role::Professor);
///
/// let stored = codec.encode(&identity).unwrap();
/// let restored: Identity = codec.decode(&stored).unwrap();
/// assert_eq!(identity, restored);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &str,
    ) -> Result<T, ProtocolError> {
        serde_json::from_str(data).map_err(ProtocolError::Decode)
    }
}
