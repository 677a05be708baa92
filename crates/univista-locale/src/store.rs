use univista_storage::{Storage, keys};

use crate::{Direction, Language, LocaleError, catalog};

/// The selected display language, mirrored to durable storage.
pub struct LocaleStore<S: Storage> {
    storage: S,
    language: Language,
}

impl<S: Storage> LocaleStore<S> {
    /// Opens the store, restoring the language saved under `language`.
    ///
    /// Falls back to `default` when nothing is saved or the saved code is
    /// not one we know.
    ///
    /// # Errors
    /// Returns [`LocaleError::Storage`] if the storage read fails.
    pub fn open(storage: S, default: Language) -> Result<Self, LocaleError> {
        let language = match storage.get(keys::LANGUAGE)? {
            None => default,
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    %code,
                    %default,
                    "ignoring unknown saved language"
                );
                default
            }),
        };

        tracing::debug!(%language, "locale store opened");
        Ok(Self { storage, language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Switches language and persists the choice.
    ///
    /// # Errors
    /// Returns [`LocaleError::Storage`] if persisting fails; the current
    /// language is left as it was.
    pub fn change_language(
        &mut self,
        language: Language,
    ) -> Result<(), LocaleError> {
        self.storage.set(keys::LANGUAGE, language.code())?;
        self.language = language;
        tracing::info!(%language, "language changed");
        Ok(())
    }

    /// The text for `key` in the current language, or `key` itself when
    /// the catalog has no entry.
    pub fn translate(&self, key: &str) -> String {
        catalog::lookup(self.language, key)
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// [`translate`](Self::translate), then substitute `{0}`, `{1}`, ...
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        catalog::interpolate(&self.translate(key), args)
    }
}
