use super::{ErrorAlert, cell_text};
use ans::api::ApiClient;
use ans::domain::models::AskResponse;
use dioxus::prelude::*;
use tracing::warn;

/// Free-text questions answered by the server-side analyst.
#[component]
pub(super) fn AssistantView() -> Element {
    let api = use_context::<ApiClient>();
    let mut question = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut answer = use_signal(|| None::<Result<AskResponse, String>>);

    let on_ask = move |evt: FormEvent| {
        evt.prevent_default();
        let text = question.read().trim().to_owned();
        if text.is_empty() || pending() {
            return;
        }

        let api = api.clone();
        pending.set(true);
        spawn(async move {
            let result = api.ask(&text).await.map_err(|err| {
                warn!(error = %err, "Analyst request failed");
                err.to_string()
            });
            answer.set(Some(result));
            pending.set(false);
        });
    };

    let body = match &*answer.read() {
        None => rsx! {},
        Some(Err(message)) => rsx! { ErrorAlert { message: format!("Falha ao consultar o analista: {message}") } },
        Some(Ok(response)) => render_answer(response),
    };

    rsx! {
        form { class: "glass-card d-flex gap-2 mb-3", onsubmit: on_ask,
            input {
                class: "form-control",
                placeholder: "Ex.: Quais as 5 operadoras com mais despesas em SP?",
                value: "{question}",
                oninput: move |evt| question.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: pending(),
                if pending() { "Consultando..." } else { "Perguntar" }
            }
        }
        {body}
    }
}

fn render_answer(response: &AskResponse) -> Element {
    let columns = response.columns();

    rsx! {
        if let Some(message) = response.error.clone() {
            div { class: "alert alert-warning", "{message}" }
        }
        if let Some(sql) = response.sql.as_deref() {
            details { class: "glass-card mb-3",
                summary { "SQL gerado" }
                pre { class: "sql-preview mb-0", "{sql}" }
            }
        }
        if response.error.is_none() {
            div { class: "glass-card",
                div { class: "text-muted-app small mb-2", "{response.count} linha(s)" }
                table { class: "table table-sm table-hover mb-0",
                    thead { tr { for column in columns.iter() { th { key: "{column}", "{column}" } } } }
                    tbody {
                        for row in response.data.iter() {
                            tr {
                                for column in columns.iter() {
                                    td { {row.get(*column).map(cell_text).unwrap_or_default()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
