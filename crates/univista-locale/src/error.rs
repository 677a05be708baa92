use univista_storage::StorageError;

/// Errors from the locale layer.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// A locale code other than `en` or `ar`.
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),

    /// Reading or persisting the selected language failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
