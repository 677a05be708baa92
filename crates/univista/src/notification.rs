//! Turning notices into toast text.

use univista_locale::LocaleStore;
use univista_protocol::Notice;
use univista_storage::Storage;

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A rendered notice, ready to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

/// Renders `notice` in the locale's current language.
///
/// Failures with an empty reason fall back to the generic `errorOccurred`
/// text.
pub fn render_notice<S: Storage>(
    notice: &Notice,
    locale: &LocaleStore<S>,
) -> Notification {
    let reason_or_generic = |reason: &str| {
        if reason.trim().is_empty() {
            locale.translate("errorOccurred")
        } else {
            reason.to_string()
        }
    };

    let (title, description) = match notice {
        Notice::LoginSucceeded { name } => (
            locale.translate("loginSuccess"),
            locale.format("welcomeBack", &[name.as_str()]),
        ),
        Notice::LoginFailed { reason } => {
            (locale.translate("loginFailed"), reason_or_generic(reason))
        }
        Notice::RegistrationSucceeded => (
            locale.translate("registrationSuccess"),
            locale.translate("accountCreated"),
        ),
        Notice::RegistrationFailed { reason } => (
            locale.translate("registrationFailed"),
            reason_or_generic(reason),
        ),
        Notice::LoggedOut => (
            locale.translate("loggedOut"),
            locale.translate("successfulLogout"),
        ),
        Notice::MissingFields => (
            locale.translate("missingFields"),
            locale.translate("fillAllFields"),
        ),
    };

    let variant = if notice.is_failure() {
        Variant::Destructive
    } else {
        Variant::Default
    };

    Notification {
        title,
        description,
        variant,
    }
}
