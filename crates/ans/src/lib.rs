//! Facade crate for `ANS Insights` features and shared modules.
//! Re-exports domain/kernel primitives and the client-side feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ans` with the `client` feature to get the API client and theme manager.

pub use ans_domain as domain;
pub use ans_kernel as kernel;

#[cfg(feature = "client")]
pub use ans_api as api;
#[cfg(feature = "client")]
pub use ans_theme as theme;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
