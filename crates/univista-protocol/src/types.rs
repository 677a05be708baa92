//! Identity and session types.
//!
//! These are the structures the session store owns, the route guard reads,
//! and the storage layer persists. They carry the invariants of the portal's
//! sign-in model directly in their shape so the rest of the workspace never
//! has to re-check them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The kind of actor signed in to the portal.
///
/// Serialized as lowercase (`"student"`, `"professor"`), which is also the
/// form stored under the `user` key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professor,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 2] = [Role::Student, Role::Professor];

    /// The canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professor => "professor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "professor" => Ok(Self::Professor),
            other => Err(ProtocolError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The signed-in actor's profile.
///
/// Fields are private: once an `Identity` exists its role cannot be
/// changed, only read. A different role means a different identity, which
/// means a new login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    role: Role,
}

impl Identity {
    /// Creates an identity from its four attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// An opaque credential string standing in for a server-issued session.
///
/// The only rule is that it is non-empty; `Token::new("")` fails. The
/// `Debug` output never prints the value so tokens stay out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wraps a credential string.
    ///
    /// # Errors
    /// Returns [`ProtocolError::EmptyToken`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ProtocolError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ProtocolError::EmptyToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Who is signed in, if anyone, plus whether that is known yet.
///
/// The identity and token live together in one `Option`, so "identity
/// without token" and "token without identity" cannot be built. The
/// authenticated flag is derived from it rather than stored.
///
/// ```text
///   loading ──(initialize)──→ anonymous ⇄ authenticated
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    signed_in: Option<(Identity, Token)>,
    loading: bool,
}

impl Session {
    /// The state before durable storage has been read.
    pub fn loading() -> Self {
        Self {
            signed_in: None,
            loading: true,
        }
    }

    /// Loaded, nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            signed_in: None,
            loading: false,
        }
    }

    /// Loaded, signed in as `identity`.
    pub fn authenticated(identity: Identity, token: Token) -> Self {
        Self {
            signed_in: Some((identity, token)),
            loading: false,
        }
    }

    /// `true` until the initial storage read has completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` iff a credential token is held.
    pub fn is_authenticated(&self) -> bool {
        self.signed_in.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.signed_in.as_ref().map(|(identity, _)| identity)
    }

    pub fn token(&self) -> Option<&Token> {
        self.signed_in.as_ref().map(|(_, token)| token)
    }

    /// Shorthand for `identity().map(Identity::role)`.
    pub fn role(&self) -> Option<Role> {
        self.identity().map(Identity::role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

/// A user-visible notification event.
///
/// Notices are produced by the session store and the portal's form
/// validation. They carry data, not text: turning a notice into a title and
/// description happens in the portal, in the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Login completed; `name` is the signed-in display name.
    LoginSucceeded { name: String },

    /// Login failed with the given reason.
    LoginFailed { reason: String },

    /// The backend accepted a new account.
    RegistrationSucceeded,

    /// Registration failed with the given reason.
    RegistrationFailed { reason: String },

    /// The session was cleared.
    LoggedOut,

    /// A form was submitted with a required field left empty.
    MissingFields,
}

impl Notice {
    /// `true` for notices that report something going wrong.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::LoginFailed { .. }
                | Self::RegistrationFailed { .. }
                | Self::MissingFields
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Identity {
        Identity::new("1", "jane", "jane@example.com", Role::Professor)
    }

    #[test]
    fn test_role_from_str_known_values_parse() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("professor".parse::<Role>().unwrap(), Role::Professor);
    }

    #[test]
    fn test_role_from_str_unknown_value_errors() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert!(
            matches!(err, ProtocolError::UnknownRole(ref s) if s == "admin")
        );
        // Case matters: stored roles are always lowercase.
        assert!("Student".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_token_new_empty_errors() {
        assert!(matches!(Token::new(""), Err(ProtocolError::EmptyToken)));
    }

    #[test]
    fn test_token_debug_hides_value() {
        let token = Token::new("secret-value").unwrap();
        assert!(!format!("{token:?}").contains("secret"));
        assert_eq!(token.as_str(), "secret-value");
    }

    #[test]
    fn test_session_default_is_loading_and_anonymous() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_session_authenticated_exposes_identity_and_token() {
        let token = Token::new("t").unwrap();
        let session = Session::authenticated(jane(), token.clone());

        assert!(!session.is_loading());
        assert!(session.is_authenticated());
        assert_eq!(session.identity(), Some(&jane()));
        assert_eq!(session.token(), Some(&token));
        assert_eq!(session.role(), Some(Role::Professor));
    }

    #[test]
    fn test_session_anonymous_has_neither_identity_nor_token() {
        let session = Session::anonymous();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_notice_is_failure() {
        assert!(Notice::MissingFields.is_failure());
        assert!(Notice::LoginFailed { reason: "x".into() }.is_failure());
        assert!(!Notice::LoggedOut.is_failure());
        assert!(!Notice::RegistrationSucceeded.is_failure());
    }
}
