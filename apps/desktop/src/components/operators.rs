use super::{ErrorAlert, Loading};
use crate::format::{format_brl, format_count};
use ans::api::ApiClient;
use ans::domain::models::{Expense, Operator, OperatorQuery, PaginatedOperators};
use dioxus::prelude::*;

const PAGE_SIZE: u32 = 10;

/// Paged operator listing with search and a per-operator expenses panel.
#[component]
pub(super) fn OperatorsView() -> Element {
    let api = use_context::<ApiClient>();
    let mut page = use_signal(|| 1_u32);
    let mut search = use_signal(String::new);
    let mut draft = use_signal(String::new);
    let mut selected = use_signal(|| None::<Operator>);

    let listing_api = api.clone();
    let listing = use_resource(move || {
        let api = listing_api.clone();
        let query = OperatorQuery::new(page(), PAGE_SIZE).with_search(search());
        async move { api.operators(&query).await }
    });

    let expenses = use_resource(move || {
        let api = api.clone();
        let cnpj = selected.read().as_ref().map(|operator| operator.cnpj.clone());
        async move {
            match cnpj {
                Some(cnpj) => api.operator_expenses(&cnpj).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        search.set(draft());
        page.set(1);
        selected.set(None);
    };

    let on_select = move |operator: Operator| selected.set(Some(operator));

    let table = match &*listing.read() {
        None => rsx! { Loading { label: "Carregando operadoras..." } },
        Some(Err(err)) => rsx! { ErrorAlert { message: format!("Falha ao listar operadoras: {err}") } },
        Some(Ok(result)) => {
            let current = selected.read().as_ref().map(|operator| operator.cnpj.clone());
            render_listing(result, current.as_deref(), on_select, page)
        },
    };

    let detail = match (&*selected.read(), &*expenses.read()) {
        (None, _) => rsx! {},
        (Some(_), None) => rsx! { Loading { label: "Carregando despesas..." } },
        (Some(_), Some(Err(err))) => {
            rsx! { ErrorAlert { message: format!("Falha ao carregar despesas: {err}") } }
        },
        (Some(operator), Some(Ok(rows))) => {
            render_expenses(operator, rows.as_deref().unwrap_or_default())
        },
    };

    rsx! {
        form { class: "d-flex gap-2 mb-3", onsubmit: on_search,
            input {
                class: "form-control",
                r#type: "search",
                placeholder: "Razão social ou CNPJ",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Buscar" }
        }
        div { class: "row g-3",
            div { class: "col-lg-7", div { class: "glass-card", {table} } }
            div { class: "col-lg-5", {detail} }
        }
    }
}

fn render_listing(
    result: &PaginatedOperators,
    selected: Option<&str>,
    on_select: impl FnMut(Operator) + 'static,
    mut page: Signal<u32>,
) -> Element {
    let on_select = EventHandler::new(on_select);
    let has_prev = result.page > 1;
    let has_next = result.has_next();
    let summary =
        format!("Página {} de {} · {} operadoras", result.page, result.total_pages().max(1), format_count(result.total));

    rsx! {
        if result.data.is_empty() {
            p { class: "text-muted-app mb-0", "Nenhuma operadora encontrada." }
        } else {
            table { class: "table table-sm table-hover",
                thead { tr { th { "Registro ANS" } th { "Razão social" } th { "UF" } th { "Modalidade" } } }
                tbody {
                    for operator in result.data.iter() {
                        OperatorRow {
                            key: "{operator.cnpj}",
                            selected: selected == Some(operator.cnpj.as_str()),
                            operator: operator.clone(),
                            onselect: on_select,
                        }
                    }
                }
            }
        }
        div { class: "d-flex justify-content-between align-items-center",
            span { class: "text-muted-app small", "{summary}" }
            div { class: "btn-group",
                button {
                    class: "btn btn-sm btn-outline-secondary",
                    disabled: !has_prev,
                    onclick: move |_| page -= 1,
                    "Anterior"
                }
                button {
                    class: "btn btn-sm btn-outline-secondary",
                    disabled: !has_next,
                    onclick: move |_| page += 1,
                    "Próxima"
                }
            }
        }
    }
}

#[component]
fn OperatorRow(operator: Operator, selected: bool, onselect: EventHandler<Operator>) -> Element {
    let class = if selected { "operator-row selected" } else { "operator-row" };
    let uf = operator.uf.clone().unwrap_or_else(|| "-".to_owned());
    let modalidade = operator.modalidade.clone().unwrap_or_else(|| "-".to_owned());
    let picked = operator.clone();

    rsx! {
        tr { class, onclick: move |_| onselect.call(picked.clone()),
            td { "{operator.registro_ans}" }
            td { "{operator.razao_social}" }
            td { "{uf}" }
            td { "{modalidade}" }
        }
    }
}

fn render_expenses(operator: &Operator, rows: &[Expense]) -> Element {
    let total: f64 = rows.iter().map(|row| row.valor).sum();

    rsx! {
        div { class: "glass-card",
            h2 { class: "h6 mb-1", "{operator.razao_social}" }
            div { class: "text-muted-app small mb-3", "CNPJ {operator.cnpj}" }
            if rows.is_empty() {
                p { class: "text-muted-app mb-0", "Sem despesas registradas." }
            } else {
                table { class: "table table-sm mb-2",
                    thead { tr { th { "Período" } th { "Descrição" } th { class: "text-end", "Valor" } } }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                td { "{row.trimestre}T/{row.ano}" }
                                td { {row.descricao.clone().unwrap_or_default()} }
                                td { class: "text-end", "{format_brl(row.valor)}" }
                            }
                        }
                    }
                }
                div { class: "text-end fw-semibold", "Total: {format_brl(total)}" }
            }
        }
    }
}
