use super::ErrorAlert;
use crate::theme::use_theme;
use dioxus::prelude::*;

#[component]
pub(super) fn Header(title: String) -> Element {
    let theme = use_theme();
    let label = if theme.is_dark() { "Modo claro" } else { "Modo escuro" };

    rsx! {
        header { class: "d-flex justify-content-between align-items-center mb-4",
            h1 { class: "h3 mb-0", "{title}" }
            button {
                class: "btn btn-outline-secondary",
                disabled: !theme.is_initialized(),
                onclick: move |_| theme.toggle(),
                "{label}"
            }
        }
        if let Some(message) = theme.error() {
            ErrorAlert { message }
        }
    }
}
