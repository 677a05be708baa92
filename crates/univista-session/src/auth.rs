//! Authentication seam.
//!
//! The session store never decides on its own who someone is. It hands
//! the submitted credentials to an [`AuthBackend`] and gets back either a
//! [`Grant`] (a token plus the identity it belongs to) or an error.
//!
//! The portal ships with [`MockAuthBackend`], which fabricates an identity
//! from the email address. A client for a real authentication service
//! implements the same trait; the store's state transitions stay the same.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use univista_protocol::{Identity, Role, Token};

use crate::SessionError;

/// Login form contents, as handed to the backend.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// The role the user picked on the login form.
    pub role: Role,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"..")
            .field("role", &self.role)
            .finish()
    }
}

/// Registration form contents, as handed to the backend.
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"..")
            .field("role", &self.role)
            .finish()
    }
}

/// A successful login: the credential token and whose it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub token: Token,
    pub identity: Identity,
}

/// Verifies credentials and creates accounts.
///
/// # Trait bounds
///
/// - `Send + Sync` → the backend can be shared with async tasks.
/// - `'static` → it owns what it needs; it lives as long as the store.
///
/// # Example
///
/// ```rust
/// use univista_protocol::{Identity, Token};
/// use univista_session::{
///     AuthBackend, Credentials, Grant, Registration, SessionError,
/// };
///
/// /// Accepts one hard-coded account.
/// struct SingleUser;
///
/// impl AuthBackend for SingleUser {
///     async fn login(
///         &self,
///         credentials: &Credentials,
///     ) -> Result<Grant, SessionError> {
///         if credentials.email != "ada@uni.edu"
///             || credentials.password != "hunter2"
///         {
///             return Err(SessionError::Backend(
///                 "invalid email or password".into(),
///             ));
///         }
///         Ok(Grant {
///             token: Token::new("ada-token")?,
///             identity: Identity::new(
///                 "42",
///                 "Ada",
///                 "ada@uni.edu",
///                 credentials.role,
///             ),
///         })
///     }
///
///     async fn register(
///         &self,
///         _registration: &Registration,
///     ) -> Result<(), SessionError> {
///         Err(SessionError::Backend("registration is closed".into()))
///     }
/// }
/// ```
pub trait AuthBackend: Send + Sync + 'static {
    /// Verifies `credentials` and issues a token.
    ///
    /// # Returns
    /// - `Ok(Grant)`: the user is who they say they are
    /// - `Err(SessionError::Backend)`: rejected, with a user-facing reason
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<Grant, SessionError>> + Send;

    /// Creates an account. Does not sign anyone in.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;
}

// ---------------------------------------------------------------------------
// MockAuthBackend
// ---------------------------------------------------------------------------

/// Demo backend: accepts any non-empty email and password.
///
/// The identity is built from the submission itself: the display name is
/// the local part of the email (`jane@example.com` → `jane`) and the role
/// is whatever was picked on the form. Ids count up from `"1"` per backend
/// instance. Registration succeeds without storing anything.
///
/// [`MockAuthBackend::rejecting`] builds one that refuses every request,
/// for exercising failure paths.
#[derive(Debug, Default)]
pub struct MockAuthBackend {
    next_id: AtomicU64,
    rejection: Option<String>,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that fails every login and registration with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            next_id: AtomicU64::new(0),
            rejection: Some(reason.into()),
        }
    }

    fn check_rejection(&self) -> Result<(), SessionError> {
        match &self.rejection {
            Some(reason) => Err(SessionError::Backend(reason.clone())),
            None => Ok(()),
        }
    }
}

impl AuthBackend for MockAuthBackend {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Grant, SessionError> {
        self.check_rejection()?;
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(SessionError::Backend(
                "email and password are required".into(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let name = display_name_from_email(&credentials.email);
        let identity = Identity::new(
            id.to_string(),
            name,
            credentials.email.clone(),
            credentials.role,
        );
        let token = Token::new(generate_token())?;

        tracing::debug!(
            role = %credentials.role,
            "mock backend issued credential"
        );
        Ok(Grant { token, identity })
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<(), SessionError> {
        self.check_rejection()?;
        tracing::debug!(
            role = %registration.role,
            "mock backend accepted registration"
        );
        Ok(())
    }
}

/// The part of an email address before the first `@`.
///
/// An address without `@` is used whole.
fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Generates a random 32-character lowercase hex string (128 bits).
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
