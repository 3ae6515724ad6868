use super::assistant::AssistantView;
use super::dashboard::DashboardView;
use super::header::Header;
use super::operators::OperatorsView;
use crate::theme::{system_prefers_dark, use_theme_provider};
use ans::domain::config::ClientConfig;
use dioxus::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Operators,
    Assistant,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Dashboard, Self::Operators, Self::Assistant];

    const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Painel",
            Self::Operators => "Operadoras",
            Self::Assistant => "Analista IA",
        }
    }
}

/// Root component. Owns the theme state and runs its one-time initialization.
#[component]
pub(crate) fn App() -> Element {
    let config = use_context::<ClientConfig>();
    let theme = use_theme_provider(&config.theme);
    let mut tab = use_signal(|| Tab::Dashboard);

    use_future(move || async move {
        let prefers_dark = system_prefers_dark().await;
        debug!(prefers_dark, "Probed system color scheme");
        theme.initialize(prefers_dark);
    });

    let current = tab();
    rsx! {
        div { class: "app-shell",
            Header { title: config.window.title.clone() }
            ul { class: "nav nav-pills mb-4",
                for item in Tab::ALL {
                    li { class: "nav-item", key: "{item.label()}",
                        button {
                            class: if item == current { "nav-link active" } else { "nav-link" },
                            onclick: move |_| tab.set(item),
                            "{item.label()}"
                        }
                    }
                }
            }
            {
                match current {
                    Tab::Dashboard => rsx! { DashboardView {} },
                    Tab::Operators => rsx! { OperatorsView {} },
                    Tab::Assistant => rsx! { AssistantView {} },
                }
            }
        }
    }
}
