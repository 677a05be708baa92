//! Session management for UniVista.
//!
//! This crate owns the signed-in state of the portal:
//!
//! 1. **Authentication**: asking a backend who someone is
//!    ([`AuthBackend`] trait, [`MockAuthBackend`] for the demo data)
//! 2. **Session state**: holding the identity and credential token and
//!    mirroring them to durable storage ([`SessionStore`])
//! 3. **Propagation**: letting views observe every change as one whole
//!    snapshot ([`SessionStore::subscribe`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Portal (above)  ← validates forms, renders notices, follows redirects
//!     ↕
//! Session Layer (this crate)  ← login / register / logout, restore on start
//!     ↕
//! Protocol + Storage (below)  ← Identity, Token, Session; durable keys
//! ```
//!
//! Actions never return errors to the caller. Each one returns an
//! [`ActionOutcome`]: a [`Notice`](univista_protocol::Notice) to show and,
//! on success, where to navigate next.

#![allow(async_fn_in_trait)]

mod auth;
mod error;
mod store;

pub use auth::{AuthBackend, Credentials, Grant, MockAuthBackend, Registration};
pub use error::SessionError;
pub use store::{ActionOutcome, SessionStore};
