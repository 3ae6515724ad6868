//! # Theme Preferences
//!
//! Owns the light/dark preference of the client and mirrors it into two places:
//! an attribute on the document root (what stylesheets key off) and a persisted
//! preference entry (what the next session starts from).
//!
//! ## Architecture
//!
//! * [`ThemeManager`]: the owned state. Apps keep exactly one and hand it to the views
//!   that need it; there is no global.
//! * [`PreferenceStore`]: persistence seam, with [`FileStore`] and [`MemoryStore`].
//! * [`DocumentRoot`]: rendering seam, with [`DetachedDocument`] for headless use.
//! * [`ColorSchemeProbe`]: the OS dark-mode signal used on first run.
//!
//! ## Example
//!
//! ```rust
//! use ans_theme::{DetachedDocument, DocumentRoot, MemoryStore, PreferenceStore, ThemeManager};
//! use ans_theme::Theme;
//!
//! let mut manager = ThemeManager::new(MemoryStore::new(), DetachedDocument::new());
//! assert_eq!(manager.initialize(&|| true)?, Theme::Dark);
//!
//! manager.toggle()?;
//! assert_eq!(manager.document().attribute("data-theme").as_deref(), Some("light"));
//! assert_eq!(manager.store().get("user-theme")?.as_deref(), Some("light"));
//! # Ok::<(), ans_theme::ThemeError>(())
//! ```

mod document;
mod error;
mod manager;
mod probe;
mod store;

pub use crate::document::{DetachedDocument, DocumentRoot};
pub use crate::error::{ThemeError, ThemeErrorExt};
pub use crate::manager::ThemeManager;
pub use crate::probe::ColorSchemeProbe;
pub use crate::store::{FileStore, MemoryStore, PreferenceStore};
pub use ans_domain::Theme;
