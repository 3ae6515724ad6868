use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Market-wide indicators at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMacro {
    pub total_despesas: f64,
    pub media_por_operadora: f64,
    pub total_operadoras_ativas: u64,
    pub tendencia_trimestral_percentual: f64,
}

/// Operator with the steepest growth between the first and last quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub razao_social: String,
    pub crescimento_percentual: f64,
    pub total_final: f64,
}

/// Expenses aggregated per state (UF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoEficiencia {
    pub uf: String,
    pub total_despesas: f64,
    pub qtd_operadoras: u64,
    pub media_por_operadora: f64,
}

/// How many quarters an operator stayed above the market average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyData {
    pub razao_social: String,
    pub uf: String,
    pub qtd_trimestres_acima: u32,
}

/// Response of `GET /analytics/storytelling`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStorytelling {
    #[serde(rename = "macro")]
    pub kpis: KpiMacro,
    pub top_movers: Vec<TopMover>,
    pub geo_eficiencia: Vec<GeoEficiencia>,
    pub consistencia: Vec<ConsistencyData>,
}

/// Response of `GET /estatisticas`. Ranking rows are loosely typed on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralStatistics {
    pub total_mercado: f64,
    pub media_por_operadora: f64,
    pub top_5_operadoras: Vec<Map<String, Value>>,
    pub distribuicao_uf: Vec<Map<String, Value>>,
}
