//! Admission control and navigation for UniVista.
//!
//! # Key types
//!
//! - [`RouteGuard`]: decides whether a session may see a protected view
//! - [`Admission`]: the guard's answer: render, or go somewhere else
//! - [`resolve`] / [`Resolution`]: path in, view out, guard applied
//! - [`navigation`] / [`NavItem`]: the sidebar menu for each role
//!
//! Everything here is a pure function of the route and the current
//! [`Session`](univista_protocol::Session). Callers re-run it on every
//! navigation and after every session change.

mod guard;
mod navigation;

pub use guard::{Admission, RouteGuard};
pub use navigation::{NavItem, navigation};

use univista_protocol::{Route, Session};

/// Where a navigation request ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The session hasn't been restored yet; render nothing.
    Pending,
    /// Render the requested route.
    Render(Route),
    /// The guard turned the request away.
    Redirect { from: Route, to: Route },
}

impl Resolution {
    /// The route that ends up on screen, if any.
    pub fn landed(self) -> Option<Route> {
        match self {
            Self::Pending => None,
            Self::Render(route) => Some(route),
            Self::Redirect { to, .. } => Some(to),
        }
    }
}

/// Parses `path`, applies the guard, and reports the outcome.
///
/// Unknown paths resolve to [`Route::NotFound`], which is public.
pub fn resolve(path: &str, session: &Session) -> Resolution {
    if session.is_loading() {
        return Resolution::Pending;
    }
    resolve_route(Route::from_path(path), session)
}

/// [`resolve`] for an already-parsed route.
pub fn resolve_route(route: Route, session: &Session) -> Resolution {
    if session.is_loading() {
        return Resolution::Pending;
    }
    match RouteGuard::admit(route, session) {
        Admission::Granted => Resolution::Render(route),
        Admission::Redirect(to) => {
            tracing::debug!(from = %route, %to, "navigation redirected");
            Resolution::Redirect { from: route, to }
        }
    }
}
