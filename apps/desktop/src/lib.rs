//! Desktop shell of the ANS expenses dashboard.
//!
//! [`DesktopApp`] performs the one-shot bootstrap: global stylesheets go into the
//! document head, the root component is mounted on the `#app` element, and the
//! loaded [`ClientConfig`] plus the shared [`ApiClient`] are provided as root context.

mod components;
mod format;
mod theme;

use ans::api::ApiClient;
use ans::domain::config::ClientConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

/// Id of the element the UI tree is attached to.
pub const MOUNT_POINT: &str = "app";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const THEME_CSS: &str = include_str!("../assets/dark-theme.css");
const APP_CSS: &str = include_str!("../assets/style.css");

#[derive(Debug)]
pub struct DesktopApp {
    config: ClientConfig,
    api: ApiClient,
}

impl DesktopApp {
    #[must_use]
    pub const fn new(config: ClientConfig, api: ApiClient) -> Self {
        Self { config, api }
    }

    /// Opens the window and runs the UI until it is closed.
    pub fn launch(self) {
        let window = &self.config.window;
        let builder = WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(LogicalSize { width: window.width, height: window.height });

        let cfg = Config::default()
            .with_window(builder)
            .with_root_name(MOUNT_POINT)
            .with_custom_head(global_head());

        info!(mount = MOUNT_POINT, base_url = self.api.base_url(), "Mounting UI");

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(self.config)
            .with_context(self.api)
            .launch(components::App);
    }
}

/// Head markup with the global stylesheets, in cascade order.
fn global_head() -> String {
    format!(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
<style>{THEME_CSS}</style>
<style>{APP_CSS}</style>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_loads_bootstrap_before_app_styles() {
        let head = global_head();
        let bootstrap = head.find(BOOTSTRAP_CSS).expect("bootstrap link");
        let theme = head.find("[data-theme=\"dark\"]").expect("theme variables");
        let app = head.find(".app-shell").expect("app styles");
        assert!(bootstrap < theme && theme < app);
    }
}
