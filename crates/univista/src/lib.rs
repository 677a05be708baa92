//! # UniVista
//!
//! Client-side core of the UniVista university portal: who is signed in,
//! which views they may open, and what language the chrome speaks.
//!
//! The [`Portal`] ties the layers together the way the view layer uses
//! them: it validates login and registration forms, drives the session
//! store, follows redirects through the route guard, and renders notices
//! into notifications in the current language.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use univista::prelude::*;
//!
//! # async fn demo() -> Result<(), UniVistaError> {
//! let mut portal = PortalBuilder::new()
//!     .build(MockAuthBackend::new(), MemoryStorage::new())?;
//!
//! portal
//!     .submit_login(&LoginForm::new("jane@example.com", "x", Role::Professor))
//!     .await;
//! assert_eq!(portal.current_route(), Route::dashboard(Role::Professor));
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod forms;
mod notification;
mod portal;

pub use config::{ConfiguredStorage, PortalConfig, StorageConfig};
pub use error::UniVistaError;
pub use forms::{FormError, LoginForm, RegisterForm};
pub use notification::{Notification, Variant, render_notice};
pub use portal::{NavLink, Navbar, Portal, PortalBuilder};

/// Installs a `tracing` subscriber that writes to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this
/// more than once is harmless; only the first call installs anything.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub mod prelude {
    //! Everything a view layer needs in one import.

    pub use crate::{
        FormError, LoginForm, NavLink, Navbar, Notification, Portal,
        PortalBuilder, PortalConfig, RegisterForm, StorageConfig,
        UniVistaError, Variant, init_tracing,
    };
    pub use univista_locale::{Direction, Language};
    pub use univista_protocol::{
        Identity, Notice, ProfessorPage, Role, Route, Session, StudentPage,
    };
    pub use univista_router::{Admission, Resolution, RouteGuard};
    pub use univista_session::{AuthBackend, MockAuthBackend, SessionStore};
    pub use univista_storage::{FileStorage, MemoryStorage, Storage};
}
