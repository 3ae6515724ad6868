//! Binds the theme manager to the live webview.

use ans::domain::config::ThemeConfig;
use ans::theme::{DocumentRoot, FileStore, ThemeManager};
use dioxus::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

const PREFERENCES_DIR: &str = "ans-insights";
const PREFERENCES_FILE: &str = "preferences.json";
const PREFERS_DARK_JS: &str =
    "return window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;";

type DesktopTheme = ThemeManager<FileStore, WebviewDocument>;

/// `<html>` of the running webview. Writes are pushed as scripts and remembered locally.
#[derive(Debug, Default)]
pub(crate) struct WebviewDocument {
    attributes: HashMap<String, String>,
}

impl DocumentRoot for WebviewDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        // The script is queued when `eval` is called; the handle only carries its result.
        let _eval = document::eval(&set_attribute_script(name, value));
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

fn set_attribute_script(name: &str, value: &str) -> String {
    let name = Value::from(name);
    let value = Value::from(value);
    format!("document.documentElement.setAttribute({name}, {value});")
}

/// Preference file location: explicit config, then the user config dir, then the cwd.
pub(crate) fn preferences_path(config: &ThemeConfig) -> PathBuf {
    config.storage_path.clone().unwrap_or_else(|| {
        dirs::config_dir().map_or_else(
            || PathBuf::from(PREFERENCES_FILE),
            |dir| dir.join(PREFERENCES_DIR).join(PREFERENCES_FILE),
        )
    })
}

/// Asks the webview for `prefers-color-scheme: dark`. Any failure reads as light.
pub(crate) async fn system_prefers_dark() -> bool {
    match document::eval(PREFERS_DARK_JS).join::<bool>().await {
        Ok(dark) => dark,
        Err(err) => {
            warn!(?err, "Color scheme probe failed, assuming light");
            false
        },
    }
}

/// Handle shared through context by every view that reads or flips the theme.
#[derive(Clone, Copy)]
pub(crate) struct ThemeState {
    manager: Signal<DesktopTheme>,
    error: Signal<Option<String>>,
}

impl ThemeState {
    pub(crate) fn is_dark(&self) -> bool {
        self.manager.read().is_dark()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.manager.read().is_initialized()
    }

    pub(crate) fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    pub(crate) fn initialize(mut self, prefers_dark: bool) {
        let result = self.manager.write().initialize(&|| prefers_dark).map(|_| ());
        self.report(result);
    }

    pub(crate) fn toggle(mut self) {
        let result = self.manager.write().toggle().map(|_| ());
        self.report(result);
    }

    fn report(&mut self, result: Result<(), ans::theme::ThemeError>) {
        match result {
            Ok(()) => self.error.set(None),
            Err(err) => {
                warn!(error = %err, "Theme change not applied");
                self.error.set(Some(err.to_string()));
            },
        }
    }
}

/// Creates the app-wide theme state and provides it to descendants.
pub(crate) fn use_theme_provider(config: &ThemeConfig) -> ThemeState {
    let config = config.clone();
    let manager = use_signal(move || {
        let store = FileStore::new(preferences_path(&config));
        ThemeManager::with_config(store, WebviewDocument::default(), &config)
    });
    let error = use_signal(|| None);
    use_context_provider(|| ThemeState { manager, error })
}

pub(crate) fn use_theme() -> ThemeState {
    use_context()
}
