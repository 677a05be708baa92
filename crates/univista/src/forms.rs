//! Login and registration form input.

use univista_protocol::Role;

/// Why a form can't be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("all fields are required")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// What the login view collects.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Checks that the email isn't blank and the password isn't empty.
    /// Passwords are taken verbatim, so `"   "` is a password.
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// What the registration view collects.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        let password = password.into();
        Self {
            name: name.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
            role,
        }
    }

    pub fn with_confirmation(
        mut self,
        confirm_password: impl Into<String>,
    ) -> Self {
        self.confirm_password = confirm_password.into();
        self
    }

    /// Blank fields are reported before a confirmation mismatch.
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name)
            || is_blank(&self.email)
            || self.password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}
