use std::collections::HashMap;

/// The root element of the rendered document.
///
/// Attribute writes are fire-and-forget; a live webview applies them
/// asynchronously and cannot report failure back.
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Last value written for `name`, when the implementation can tell.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A document that is not attached to any renderer; it only remembers attributes.
#[derive(Debug, Clone, Default)]
pub struct DetachedDocument {
    attributes: HashMap<String, String>,
}

impl DetachedDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRoot for DetachedDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}
