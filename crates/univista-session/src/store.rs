//! The session store: the single owner of the portal's signed-in state.
//!
//! Responsibilities:
//! - Restoring a saved session from durable storage on start
//! - Logging in through the [`AuthBackend`] and persisting the result
//! - Registering accounts (without signing in)
//! - Logging out and clearing storage
//! - Publishing every change to subscribers
//!
//! # Single writer
//!
//! Mutating actions take `&mut self`. The portal owns the store, so
//! exactly one UI event at a time can change the session. Each change
//! replaces the whole [`Session`] in one step; subscribers never see an
//! identity without its token or the reverse.

use tokio::sync::watch;
use univista_protocol::{
    Codec, Identity, JsonCodec, Notice, Role, Route, Session, Token,
};
use univista_storage::{Storage, keys};

use crate::{AuthBackend, Credentials, Registration, SessionError};

/// What an action produced: a notice to show and, on success, where to
/// go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notice: Notice,
    /// `None` means stay on the current view.
    pub redirect: Option<Route>,
}

impl ActionOutcome {
    fn success(notice: Notice, redirect: Route) -> Self {
        Self {
            notice,
            redirect: Some(redirect),
        }
    }

    fn failure(notice: Notice) -> Self {
        Self {
            notice,
            redirect: None,
        }
    }
}

/// Owns the [`Session`] and keeps durable storage in step with it.
///
/// ## Lifecycle
///
/// ```text
/// new() → initialize() → login() ⇄ logout() → teardown()
///   │             │              │          │
///   ▼             ▼              ▼          ▼
/// [loading]   [restored or   [authenticated] [anonymous]
///              anonymous]
/// ```
pub struct SessionStore<B: AuthBackend, S: Storage> {
    backend: B,
    storage: S,
    codec: JsonCodec,
    /// Current session. The sender doubles as the storage cell: reads go
    /// through `borrow()`, writes through `send_replace()`.
    state: watch::Sender<Session>,
}

impl<B: AuthBackend, S: Storage> SessionStore<B, S> {
    /// Creates a store in the loading state. Call
    /// [`initialize`](Self::initialize) before letting views render.
    pub fn new(backend: B, storage: S) -> Self {
        let (state, _) = watch::channel(Session::loading());
        Self {
            backend,
            storage,
            codec: JsonCodec,
            state,
        }
    }

    /// [`new`](Self::new) followed by [`initialize`](Self::initialize).
    pub fn open(backend: B, storage: S) -> Self {
        let mut store = Self::new(backend, storage);
        store.initialize();
        store
    }

    /// Restores a previously saved session, then leaves the loading state.
    ///
    /// The session is restored only when both `token` and `user` are
    /// present and valid. Anything else (one key missing, an empty token,
    /// a `user` entry that doesn't decode, a failed read) starts the
    /// portal signed out. Storage is not modified.
    ///
    /// Calling this again after the first time does nothing.
    pub fn initialize(&mut self) {
        if !self.state.borrow().is_loading() {
            tracing::debug!("session store already initialized");
            return;
        }

        let session = match self.read_saved() {
            Ok(Some((identity, token))) => {
                tracing::info!(
                    role = %identity.role(),
                    user_id = identity.id(),
                    "session restored from storage"
                );
                Session::authenticated(identity, token)
            }
            Ok(None) => {
                tracing::debug!("no saved session");
                Session::anonymous()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable saved session");
                Session::anonymous()
            }
        };

        self.state.send_replace(session);
    }

    /// A snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    /// A receiver that sees every session change, starting from the
    /// current one.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Logs in with the given credentials.
    ///
    /// Field validation (non-empty email and password) is the caller's
    /// job. On success the token and identity are written to storage, the
    /// session becomes authenticated, and the outcome redirects to the
    /// role's dashboard. On failure nothing changes, in memory or in
    /// storage, and the outcome carries the error message.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> ActionOutcome {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };

        match self.try_login(&credentials).await {
            Ok(identity) => {
                tracing::info!(
                    %role,
                    user_id = identity.id(),
                    "login succeeded"
                );
                ActionOutcome::success(
                    Notice::LoginSucceeded {
                        name: identity.name().to_string(),
                    },
                    Route::dashboard(role),
                )
            }
            Err(e) => {
                tracing::warn!(%role, error = %e, "login failed");
                ActionOutcome::failure(Notice::LoginFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Creates an account. The session is never touched; on success the
    /// outcome redirects to the login view.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> ActionOutcome {
        let registration = Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };

        match self.backend.register(&registration).await {
            Ok(()) => {
                tracing::info!(%role, "registration succeeded");
                ActionOutcome::success(
                    Notice::RegistrationSucceeded,
                    Route::Login,
                )
            }
            Err(e) => {
                tracing::warn!(%role, error = %e, "registration failed");
                ActionOutcome::failure(Notice::RegistrationFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Signs out: clears memory and storage and redirects to the landing
    /// view. Safe to call when nobody is signed in.
    ///
    /// A storage removal failure is logged; memory is cleared regardless.
    pub fn logout(&mut self) -> ActionOutcome {
        for key in [keys::TOKEN, keys::USER] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(
                    key,
                    error = %e,
                    "failed to clear saved session"
                );
            }
        }

        let previous = self.state.send_replace(Session::anonymous());
        match previous.identity() {
            Some(identity) => {
                tracing::info!(user_id = identity.id(), "logged out");
            }
            None => tracing::debug!("logout with no active session"),
        }

        ActionOutcome::success(Notice::LoggedOut, Route::Landing)
    }

    /// Ends the store's lifetime and hands back the storage.
    ///
    /// Saved state is left in place, so a later store over the same
    /// storage restores the session.
    pub fn teardown(self) -> S {
        tracing::debug!(
            authenticated = self.is_authenticated(),
            "session store torn down"
        );
        self.storage
    }

    // -- internals --------------------------------------------------------

    async fn try_login(
        &mut self,
        credentials: &Credentials,
    ) -> Result<Identity, SessionError> {
        let grant = self.backend.login(credentials).await?;
        self.persist(&grant.token, &grant.identity)?;

        let identity = grant.identity.clone();
        self.state
            .send_replace(Session::authenticated(grant.identity, grant.token));
        Ok(identity)
    }

    fn read_saved(&self) -> Result<Option<(Identity, Token)>, SessionError> {
        let token = self.storage.get(keys::TOKEN)?;
        let user = self.storage.get(keys::USER)?;

        match (token, user) {
            (Some(token), Some(user)) => {
                let token = Token::new(token)?;
                let identity: Identity = self.codec.decode(&user)?;
                Ok(Some((identity, token)))
            }
            _ => Ok(None),
        }
    }

    /// Writes `token` then `user`. If the second write fails the first is
    /// undone, so storage never holds a token paired with a stale or
    /// missing user.
    fn persist(
        &self,
        token: &Token,
        identity: &Identity,
    ) -> Result<(), SessionError> {
        let user = self.codec.encode(identity)?;
        let previous_token = self.storage.get(keys::TOKEN)?;

        self.storage.set(keys::TOKEN, token.as_str())?;
        if let Err(e) = self.storage.set(keys::USER, &user) {
            let undo = match &previous_token {
                Some(previous) => self.storage.set(keys::TOKEN, previous),
                None => self.storage.remove(keys::TOKEN),
            };
            if let Err(undo_err) = undo {
                tracing::error!(
                    error = %undo_err,
                    "failed to roll back token after partial write"
                );
            }
            return Err(e.into());
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
