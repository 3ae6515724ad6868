//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts layered config loading for the client apps.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use ans_kernel::config::load_config;
//!     use ans_kernel::domain::config::ClientConfig;
//!     let cfg: ClientConfig = load_config(Some("client")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use ans_domain as domain;
