//! Durable local state for UniVista.
//!
//! A string-keyed, string-valued store that survives restarts, the way
//! browser local storage survives page reloads. Provides the [`Storage`]
//! trait and two implementations:
//!
//! - [`MemoryStorage`]: a shared in-memory map, for tests and ephemeral
//!   sessions.
//! - [`FileStorage`]: the same map written through to a JSON file.
//!
//! Both are cheap `Clone` handles over shared state, so the session store
//! and the locale store can each hold a clone and see each other's writes.
//!
//! The well-known keys live in [`keys`].

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Keys the portal writes.
pub mod keys {
    /// The credential token.
    pub const TOKEN: &str = "token";
    /// The serialized identity.
    pub const USER: &str = "user";
    /// The selected locale code.
    pub const LANGUAGE: &str = "language";
}

/// A durable string-keyed store.
///
/// Methods take `&self`: implementations manage their own interior
/// mutability so one handle can be shared by several owners. Writes are
/// "last write wins"; there is no versioning.
pub trait Storage: Send + Sync + 'static {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
