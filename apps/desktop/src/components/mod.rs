mod app;
mod assistant;
mod dashboard;
mod header;
mod operators;

pub(crate) use app::App;

use dioxus::prelude::*;
use serde_json::Value;

#[component]
fn Loading(label: String) -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner-border spinner-border-sm me-2", role: "status" }
            span { "{label}" }
        }
    }
}

#[component]
fn ErrorAlert(message: String) -> Element {
    rsx! {
        div { class: "alert alert-danger", role: "alert", "{message}" }
    }
}

/// Display text for a loosely typed result cell.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
