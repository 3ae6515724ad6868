use super::{ErrorAlert, Loading};
use crate::format::{format_brl, format_count, format_percent};
use ans::api::ApiClient;
use ans::domain::models::DashboardStorytelling;
use dioxus::prelude::*;

#[component]
pub(super) fn DashboardView() -> Element {
    let api = use_context::<ApiClient>();
    let dashboard = use_resource(move || {
        let api = api.clone();
        async move { api.dashboard().await }
    });

    match &*dashboard.read() {
        None => rsx! { Loading { label: "Carregando painel..." } },
        Some(Err(err)) => rsx! { ErrorAlert { message: format!("Falha ao carregar o painel: {err}") } },
        Some(Ok(data)) => render(data),
    }
}

fn render(data: &DashboardStorytelling) -> Element {
    let kpis = &data.kpis;
    let trend = kpis.tendencia_trimestral_percentual;
    let trend_class = if trend >= 0.0 { "kpi-value trend-up" } else { "kpi-value trend-down" };

    rsx! {
        div { class: "row g-3 mb-4",
            KpiCard { label: "Despesas totais", value: format_brl(kpis.total_despesas) }
            KpiCard { label: "Média por operadora", value: format_brl(kpis.media_por_operadora) }
            KpiCard { label: "Operadoras ativas", value: format_count(kpis.total_operadoras_ativas) }
            div { class: "col-md-3",
                div { class: "glass-card",
                    div { class: "text-muted-app small", "Tendência trimestral" }
                    div { class: trend_class, "{format_percent(trend)}" }
                }
            }
        }
        div { class: "row g-3",
            div { class: "col-lg-6",
                div { class: "glass-card",
                    h2 { class: "h6", "Maiores crescimentos" }
                    table { class: "table table-sm table-hover mb-0",
                        thead { tr { th { "Operadora" } th { "Crescimento" } th { "Total final" } } }
                        tbody {
                            for mover in data.top_movers.iter() {
                                tr { key: "{mover.razao_social}",
                                    td { "{mover.razao_social}" }
                                    td { class: "trend-up", "{format_percent(mover.crescimento_percentual)}" }
                                    td { "{format_brl(mover.total_final)}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "col-lg-6",
                div { class: "glass-card",
                    h2 { class: "h6", "Despesas por UF" }
                    table { class: "table table-sm table-hover mb-0",
                        thead { tr { th { "UF" } th { "Total" } th { "Operadoras" } th { "Média" } } }
                        tbody {
                            for geo in data.geo_eficiencia.iter() {
                                tr { key: "{geo.uf}",
                                    td { "{geo.uf}" }
                                    td { "{format_brl(geo.total_despesas)}" }
                                    td { "{format_count(geo.qtd_operadoras)}" }
                                    td { "{format_brl(geo.media_por_operadora)}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "col-12",
                div { class: "glass-card",
                    h2 { class: "h6", "Consistência acima da média" }
                    table { class: "table table-sm table-hover mb-0",
                        thead { tr { th { "Operadora" } th { "UF" } th { "Trimestres acima" } } }
                        tbody {
                            for row in data.consistencia.iter() {
                                tr { key: "{row.razao_social}",
                                    td { "{row.razao_social}" }
                                    td { "{row.uf}" }
                                    td { "{row.qtd_trimestres_acima}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KpiCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "col-md-3",
            div { class: "glass-card",
                div { class: "text-muted-app small", "{label}" }
                div { class: "kpi-value", "{value}" }
            }
        }
    }
}
