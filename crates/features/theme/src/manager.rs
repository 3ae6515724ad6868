use crate::document::DocumentRoot;
use crate::error::{ThemeError, ThemeErrorExt};
use crate::probe::ColorSchemeProbe;
use crate::store::PreferenceStore;
use ans_domain::Theme;
use ans_domain::config::ThemeConfig;
use tracing::{debug, info, warn};

/// Owns the current theme and keeps its two external mirrors in step.
///
/// The theme lives in three places: this struct, the document root attribute and the
/// preference store. Every successful mutation leaves all three equal. The store is
/// written first because it is the only fallible mirror; if it fails nothing changes.
#[derive(Debug)]
pub struct ThemeManager<S, D> {
    theme: Theme,
    initialized: bool,
    store: S,
    document: D,
    storage_key: String,
    attribute: String,
}

impl<S, D> ThemeManager<S, D>
where
    S: PreferenceStore,
    D: DocumentRoot,
{
    /// Uses the default key (`user-theme`) and attribute (`data-theme`).
    pub fn new(store: S, document: D) -> Self {
        Self::with_config(store, document, &ThemeConfig::default())
    }

    pub fn with_config(store: S, document: D, config: &ThemeConfig) -> Self {
        Self {
            theme: Theme::default(),
            initialized: false,
            store,
            document,
            storage_key: config.storage_key.clone(),
            attribute: config.attribute.clone(),
        }
    }

    /// Resolves the starting theme and publishes it.
    ///
    /// A stored, non-empty preference wins. Otherwise `probe` decides, and the result
    /// is written back so the next session finds a stored value. An unreadable store
    /// counts as having no preference.
    ///
    /// # Errors
    /// Returns a [`ThemeError`] if the resolved theme cannot be written.
    pub fn initialize(&mut self, probe: &impl ColorSchemeProbe) -> Result<Theme, ThemeError> {
        let stored = self.store.get(&self.storage_key).unwrap_or_else(|err| {
            warn!(key = %self.storage_key, error = %err, "Stored theme unreadable, ignoring it");
            None
        });

        let theme = match stored.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => Theme::from_stored(value),
            None => {
                let prefers_dark = probe.prefers_dark();
                debug!(prefers_dark, "No stored theme, using system preference");
                Theme::from_dark(prefers_dark)
            },
        };

        self.apply(theme)?;
        self.initialized = true;
        info!(%theme, "Theme initialized");
        Ok(theme)
    }

    /// Flips between light and dark.
    ///
    /// # Errors
    /// Returns a [`ThemeError`] if the new value cannot be persisted; the current
    /// theme is kept in that case.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.theme.toggled();
        self.apply(next)?;
        debug!(theme = %next, "Theme toggled");
        Ok(next)
    }

    /// # Errors
    /// Same as [`ThemeManager::toggle`].
    pub fn set(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.apply(theme)
    }

    fn apply(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.store
            .set(&self.storage_key, theme.as_str())
            .context(format!("Persisting theme '{theme}'"))?;
        self.document.set_attribute(&self.attribute, theme.as_str());
        self.theme = theme;
        Ok(())
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DetachedDocument;
    use crate::store::MemoryStore;

    /// Store that refuses every write.
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Ok(Some("light".to_owned()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::from("read-only"))
        }
    }

    #[test]
    fn probe_is_not_consulted_when_a_preference_exists() {
        let store = MemoryStore::new().with_entry("user-theme", "dark");
        let mut manager = ThemeManager::new(store, DetachedDocument::new());

        let theme = manager.initialize(&|| -> bool { panic!("probe must not run") }).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert!(manager.is_initialized());
    }

    #[test]
    fn empty_stored_value_counts_as_missing() {
        let store = MemoryStore::new().with_entry("user-theme", "");
        let mut manager = ThemeManager::new(store, DetachedDocument::new());

        assert_eq!(manager.initialize(&|| true).unwrap(), Theme::Dark);
        assert_eq!(manager.store().get("user-theme").unwrap().as_deref(), Some("dark"));
    }

    /// Store whose reads fail but whose writes succeed.
    #[derive(Debug, Default)]
    struct UnreadableStore {
        written: Option<String>,
    }

    impl PreferenceStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::from("garbled"))
        }

        fn set(&mut self, _key: &str, value: &str) -> Result<(), ThemeError> {
            self.written = Some(value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn unreadable_preference_falls_back_to_the_probe() {
        let mut manager = ThemeManager::new(UnreadableStore::default(), DetachedDocument::new());

        assert_eq!(manager.initialize(&|| true).unwrap(), Theme::Dark);
        assert!(manager.is_initialized());
        assert_eq!(manager.store().written.as_deref(), Some("dark"));
        assert_eq!(manager.document().attribute("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn failed_persist_leaves_everything_unchanged() {
        let mut manager = ThemeManager::new(ReadOnlyStore, DetachedDocument::new());

        let err = manager.toggle().unwrap_err();
        assert!(err.to_string().contains("Persisting theme 'dark'"));
        assert_eq!(manager.theme(), Theme::Light);
        assert_eq!(manager.document().attribute("data-theme"), None);
    }

    #[test]
    fn custom_key_and_attribute_are_honoured() {
        let config = ThemeConfig {
            storage_key: "ans.theme".to_owned(),
            attribute: "data-bs-theme".to_owned(),
            storage_path: None,
        };
        let mut manager =
            ThemeManager::with_config(MemoryStore::new(), DetachedDocument::new(), &config);

        manager.set(Theme::Dark).unwrap();
        assert_eq!(manager.store().get("ans.theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(manager.document().attribute("data-bs-theme").as_deref(), Some("dark"));
    }
}
