//! `Portal` builder and the view-layer contract.
//!
//! The portal ties the layers together: forms → session store → route
//! guard, with every notice rendered through the locale store.

use tokio::sync::watch;
use univista_locale::{Direction, Language, LocaleStore};
use univista_protocol::{Notice, Route, Session};
use univista_router::{NavItem, Resolution, navigation, resolve, resolve_route};
use univista_session::{ActionOutcome, AuthBackend, SessionStore};
use univista_storage::Storage;

use crate::config::ConfiguredStorage;
use crate::forms::{FormError, LoginForm, RegisterForm};
use crate::notification::{Notification, render_notice};
use crate::{PortalConfig, UniVistaError};

/// A translated link the view can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
    /// `true` when `route` is the view currently on screen.
    pub active: bool,
}

/// The top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    /// "Welcome, {name}" when signed in.
    pub greeting: Option<String>,
    pub links: Vec<NavLink>,
    /// Label for the logout button; `None` when signed out.
    pub logout: Option<String>,
}

/// Builder for a [`Portal`].
///
/// # Example
///
/// ```rust,ignore
/// use univista::prelude::*;
///
/// let portal = PortalBuilder::new()
///     .config(PortalConfig::from_json_file("portal.json")?)
///     .build_configured(MockAuthBackend::new())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortalBuilder {
    config: PortalConfig,
}

impl PortalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_language(mut self, language: Language) -> Self {
        self.config.default_language = language;
        self
    }

    /// Builds a portal over `storage`, ignoring the storage section of the
    /// configuration.
    ///
    /// The locale and session stores each get a handle to the same
    /// storage. The saved language and session are restored before this
    /// returns.
    ///
    /// # Errors
    /// Fails if the saved language can't be read.
    pub fn build<B, S>(
        self,
        backend: B,
        storage: S,
    ) -> Result<Portal<B, S>, UniVistaError>
    where
        B: AuthBackend,
        S: Storage + Clone,
    {
        let locale =
            LocaleStore::open(storage.clone(), self.config.default_language)?;
        let session = SessionStore::open(backend, storage);

        tracing::info!(
            language = %locale.language(),
            authenticated = session.is_authenticated(),
            "portal ready"
        );

        Ok(Portal {
            session,
            locale,
            current: Route::Landing,
            notifications: Vec::new(),
        })
    }

    /// Opens the storage named in the configuration, then
    /// [`build`](Self::build)s over it.
    ///
    /// # Errors
    /// Fails if the storage file is unreadable or corrupt.
    pub fn build_configured<B: AuthBackend>(
        self,
        backend: B,
    ) -> Result<Portal<B, ConfiguredStorage>, UniVistaError> {
        let storage = self.config.storage.open()?;
        self.build(backend, storage)
    }
}

/// The client-side portal: session, navigation and language in one place.
///
/// The portal owns the session store, so all session changes go through
/// `&mut self`. After every action it re-runs the route guard, either on
/// the action's redirect target or on the current view.
pub struct Portal<B: AuthBackend, S: Storage + Clone> {
    session: SessionStore<B, S>,
    locale: LocaleStore<S>,
    current: Route,
    notifications: Vec<Notification>,
}

impl<B: AuthBackend, S: Storage + Clone> Portal<B, S> {
    // -- Navigation --------------------------------------------------------

    /// Navigates to `path`, applying the route guard. The current route
    /// becomes wherever the request lands.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = resolve(path, &self.session.session());
        self.land(resolution)
    }

    /// [`navigate`](Self::navigate) for an already-parsed route.
    pub fn go(&mut self, route: Route) -> Resolution {
        let resolution = resolve_route(route, &self.session.session());
        self.land(resolution)
    }

    pub fn current_route(&self) -> Route {
        self.current
    }

    fn land(&mut self, resolution: Resolution) -> Resolution {
        if let Some(route) = resolution.landed() {
            self.current = route;
        }
        resolution
    }

    // -- Session -----------------------------------------------------------

    pub fn session(&self) -> Session {
        self.session.session()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Submits the login form.
    ///
    /// A blank field produces [`Notice::MissingFields`] without calling the
    /// session store. Otherwise the store logs in and, on success, the
    /// portal moves to the role's dashboard.
    pub async fn submit_login(&mut self, form: &LoginForm) -> Notice {
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "login form rejected");
            return self.notify(Notice::MissingFields);
        }

        let outcome = self
            .session
            .login(form.email.trim(), &form.password, form.role)
            .await;
        self.apply(outcome)
    }

    /// Submits the registration form.
    ///
    /// Blank fields produce [`Notice::MissingFields`]; a confirmation that
    /// doesn't match produces [`Notice::RegistrationFailed`]. Neither
    /// reaches the session store. A successful registration moves to the
    /// login view and does not sign in.
    pub async fn submit_register(&mut self, form: &RegisterForm) -> Notice {
        match form.validate() {
            Ok(()) => {}
            Err(FormError::MissingFields) => {
                tracing::debug!("registration form rejected: missing fields");
                return self.notify(Notice::MissingFields);
            }
            Err(FormError::PasswordMismatch) => {
                tracing::debug!(
                    "registration form rejected: password mismatch"
                );
                let reason = self.locale.translate("passwordsDoNotMatch");
                return self.notify(Notice::RegistrationFailed { reason });
            }
        }

        let outcome = self
            .session
            .register(
                form.name.trim(),
                form.email.trim(),
                &form.password,
                form.role,
            )
            .await;
        self.apply(outcome)
    }

    /// Signs out and returns to the landing page. Safe to call when
    /// already signed out.
    pub fn logout(&mut self) -> Notice {
        let outcome = self.session.logout();
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: ActionOutcome) -> Notice {
        match outcome.redirect {
            Some(route) => self.go(route),
            None => self.go(self.current),
        };
        self.notify(outcome.notice)
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        self.notifications.push(render_notice(&notice, &self.locale));
        notice
    }

    /// Drains the notifications produced since the last call, oldest
    /// first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // -- Chrome ------------------------------------------------------------

    pub fn navbar(&self) -> Navbar {
        match self.session.identity() {
            Some(identity) => Navbar {
                greeting: Some(
                    self.locale.format("welcomeUser", &[identity.name()]),
                ),
                links: vec![
                    self.link("dashboard", Route::dashboard(identity.role())),
                ],
                logout: Some(self.locale.translate("logout")),
            },
            None => Navbar {
                greeting: None,
                links: vec![
                    self.link("login", Route::Login),
                    self.link("register", Route::Register),
                ],
                logout: None,
            },
        }
    }

    /// The signed-in role's sidebar menu. Empty when signed out.
    pub fn sidebar(&self) -> Vec<NavLink> {
        let Some(role) = self.session.session().role() else {
            return Vec::new();
        };
        navigation(role)
            .iter()
            .map(|&NavItem { label_key, route }| self.link(label_key, route))
            .collect()
    }

    fn link(&self, label_key: &str, route: Route) -> NavLink {
        NavLink {
            label: self.locale.translate(label_key),
            route,
            active: route == self.current,
        }
    }

    // -- Locale ------------------------------------------------------------

    /// Switches language and persists the choice.
    ///
    /// # Errors
    /// Fails if the choice can't be saved; the language is unchanged.
    pub fn change_language(
        &mut self,
        language: Language,
    ) -> Result<(), UniVistaError> {
        self.locale.change_language(language)?;
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.locale.language()
    }

    pub fn translate(&self, key: &str) -> String {
        self.locale.translate(key)
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Tears the portal down and hands back the session store's storage
    /// handle.
    pub fn shutdown(self) -> S {
        tracing::debug!("portal shut down");
        self.session.teardown()
    }
}
