use ans_api::ApiClient;
use ans_domain::config::ApiConfig;
use ans_domain::models::OperatorQuery;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// What the fake backend saw for one request.
#[derive(Debug, Clone, PartialEq)]
struct Seen {
    method: Method,
    path: String,
    query: Option<String>,
    body: Option<Value>,
}

type Recorder = Arc<Mutex<Vec<Seen>>>;

async fn backend(State(seen): State<Recorder>, method: Method, uri: Uri, body: Bytes) -> Response {
    let body_json = if body.is_empty() { None } else { serde_json::from_slice(&body).ok() };
    seen.lock().push(Seen {
        method: method.clone(),
        path: uri.path().to_owned(),
        query: uri.query().map(ToOwned::to_owned),
        body: body_json,
    });

    let path = uri.path();
    let payload = match (method, path) {
        (Method::GET, "/api/analytics/storytelling") => json!({
            "macro": {
                "total_despesas": 300.0,
                "media_por_operadora": 150.0,
                "total_operadoras_ativas": 2,
                "tendencia_trimestral_percentual": 4.2
            },
            "top_movers": [],
            "geo_eficiencia": [],
            "consistencia": []
        }),
        (Method::GET, "/api/operadoras") => json!({
            "total": 1,
            "page": 1,
            "limit": 10,
            "data": [{
                "registro_ans": "123456",
                "cnpj": "00.000.000/0001-91",
                "razao_social": "ALFA SAUDE",
                "modalidade": "Cooperativa Medica",
                "uf": "SP"
            }]
        }),
        (Method::GET, "/api/estatisticas") => json!({
            "total_mercado": 300.0,
            "media_por_operadora": 150.0,
            "top_5_operadoras": [{ "razao_social": "ALFA SAUDE", "total": 200.0 }],
            "distribuicao_uf": [{ "uf": "SP", "total": 300.0 }]
        }),
        (Method::POST, "/api/ai/ask") => json!({
            "sql": "SELECT uf FROM operadoras LIMIT 1",
            "data": [{ "uf": "SP" }],
            "count": 1
        }),
        (Method::GET, p) if p.starts_with("/api/operadoras/MISSING") => {
            return (StatusCode::NOT_FOUND, "Operadora não encontrada").into_response();
        },
        (Method::GET, p) if p.ends_with("/despesas") => json!([
            { "ano": 2024, "trimestre": 4, "conta_contabil": "41", "descricao": "EVENTOS", "valor": 99.5 }
        ]),
        (Method::GET, p) if p.starts_with("/api/operadoras/") => json!({
            "registro_ans": "123456",
            "cnpj": "00.000.000/0001-91",
            "razao_social": "ALFA SAUDE",
            "modalidade": null,
            "uf": "SP"
        }),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    axum::Json(payload).into_response()
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}/api")
}

async fn fake_backend() -> (ApiClient, Recorder) {
    let seen = Recorder::default();
    let base_url = serve(Router::new().fallback(backend).with_state(seen.clone())).await;
    let client = ApiClient::new(&ApiConfig { base_url, ..ApiConfig::default() }).expect("client");
    (client, seen)
}

fn single(seen: &Recorder) -> Seen {
    let seen = seen.lock();
    assert_eq!(seen.len(), 1, "expected exactly one request, got {seen:?}");
    seen[0].clone()
}

#[tokio::test]
async fn dashboard_is_a_plain_get() {
    let (api, seen) = fake_backend().await;

    let dashboard = api.dashboard().await.expect("dashboard");
    assert_eq!(dashboard.kpis.total_operadoras_ativas, 2);

    let request = single(&seen);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/analytics/storytelling");
    assert_eq!(request.query, None);
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn operators_send_pagination_and_search_as_query() {
    let (api, seen) = fake_backend().await;

    let page = api
        .operators(&OperatorQuery::new(2, 25).with_search("unimed bh"))
        .await
        .expect("operators");
    assert_eq!(page.data[0].razao_social, "ALFA SAUDE");

    let request = single(&seen);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/operadoras");
    assert_eq!(request.query.as_deref(), Some("page=2&limit=25&search=unimed+bh"));
}

#[tokio::test]
async fn operators_without_search_omit_the_parameter() {
    let (api, seen) = fake_backend().await;

    api.operators(&OperatorQuery::new(1, 10)).await.expect("operators");

    assert_eq!(single(&seen).query.as_deref(), Some("page=1&limit=10"));
}

#[tokio::test]
async fn expenses_put_the_identifier_in_the_path() {
    let (api, seen) = fake_backend().await;

    let expenses = api.operator_expenses("00.000.000/0001-91").await.expect("expenses");
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].trimestre, 4);

    let request = single(&seen);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/operadoras/00.000.000%2F0001-91/despesas");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn ask_posts_the_question_as_json() {
    let (api, seen) = fake_backend().await;

    let answer = api.ask("Quantas operadoras em SP?").await.expect("ask");
    assert_eq!(answer.count, 1);
    assert_eq!(answer.columns(), vec!["uf"]);

    let request = single(&seen);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/ai/ask");
    assert_eq!(request.query, None);
    assert_eq!(request.body, Some(json!({ "question": "Quantas operadoras em SP?" })));
}

#[tokio::test]
async fn operator_details_and_statistics() {
    let (api, seen) = fake_backend().await;

    let operator = api.operator("00000000000191").await.expect("operator");
    assert_eq!(operator.uf.as_deref(), Some("SP"));
    let stats = api.statistics().await.expect("statistics");
    assert_eq!(stats.top_5_operadoras.len(), 1);

    let paths: Vec<String> = seen.lock().iter().map(|s| s.path.clone()).collect();
    assert_eq!(paths, vec!["/api/operadoras/00000000000191", "/api/estatisticas"]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (api, seen) = fake_backend().await;

    let err = api.operator_expenses("MISSING").await.expect_err("404 must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert!(!err.is_timeout());
    assert_eq!(seen.lock().len(), 1, "failures are not retried");
}

#[tokio::test]
async fn slow_responses_hit_the_timeout() {
    let router = Router::new().route(
        "/api/analytics/storytelling",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "{}"
        }),
    );
    let base_url = serve(router).await;
    let api = ApiClient::new(&ApiConfig { base_url, timeout_ms: 150 }).expect("client");

    let err = api.dashboard().await.expect_err("must time out");
    assert!(err.is_timeout(), "expected timeout, got {err}");
}

#[tokio::test]
async fn unreachable_backend_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = ApiClient::new(&ApiConfig { base_url: format!("http://{addr}/api"), timeout_ms: 1_000 })
        .expect("client");

    let err = api.dashboard().await.expect_err("connection refused");
    assert!(err.status().is_none());
}
