//! Shared vocabulary for UniVista.
//!
//! This crate defines the types every other layer talks in:
//!
//! - **Identity types** ([`Role`], [`Identity`], [`Token`], [`Session`]):
//!   who is signed in, and whether anyone is.
//! - **Navigation** ([`Route`], [`StudentPage`], [`ProfessorPage`]):
//!   the closed set of places the portal can show.
//! - **Notices** ([`Notice`]): typed user-facing notification events,
//!   rendered to text later by the locale layer.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how identities are turned
//!   into strings for durable storage and back.
//!
//! # Architecture
//!
//! ```text
//! Portal (above)  ← renders notices, navigates routes
//!     ↕
//! Session / Router / Locale  ← own state, make decisions
//!     ↕
//! Protocol (this crate)  ← plain data, no behavior beyond invariants
//! ```

mod codec;
mod error;
mod route;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use route::{ProfessorPage, Route, StudentPage};
pub use types::{Identity, Notice, Role, Session, Token};
