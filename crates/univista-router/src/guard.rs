//! The route guard.

use univista_protocol::{Role, Route, Session};

/// The guard's decision for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Render the view.
    Granted,
    /// Don't render it; go here instead.
    Redirect(Route),
}

/// Admission control for protected views.
///
/// Denial isn't an error: it is one of two defined redirects.
///
/// | Session | Role in `required` | Result |
/// |---------|--------------------|--------|
/// | signed out | any | `Redirect(Login)` |
/// | signed in | no | `Redirect(Unauthorized)` |
/// | signed in | yes | `Granted` |
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Checks `session` against a set of allowed roles.
    pub fn check(required: &[Role], session: &Session) -> Admission {
        match session.role() {
            None => Admission::Redirect(Route::Login),
            Some(role) if required.contains(&role) => Admission::Granted,
            Some(_) => Admission::Redirect(Route::Unauthorized),
        }
    }

    /// Checks `session` against whatever `route` requires. Public routes
    /// are always granted.
    pub fn admit(route: Route, session: &Session) -> Admission {
        if route.is_public() {
            return Admission::Granted;
        }
        Self::check(route.required_roles().unwrap_or_default(), session)
    }
}
