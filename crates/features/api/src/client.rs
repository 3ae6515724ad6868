use crate::error::{ApiError, ApiErrorExt};
use ans_domain::config::ApiConfig;
use ans_domain::models::{
    AskRequest, AskResponse, DashboardStorytelling, Expense, GeneralStatistics, Operator,
    OperatorQuery, PaginatedOperators,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Handle to the ANS REST API.
///
/// Wraps one [`reqwest::Client`] (connection pool, timeout) and the base URL, both
/// fixed at construction. Cloning is cheap and shares the pool.
///
/// Every method issues exactly one request and returns the decoded body. There is no
/// retry, cache or validation; any failure is returned as an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
    timeout: Duration,
}

impl ApiClient {
    /// # Errors
    /// Returns [`ApiError::Build`] if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let timeout = config.timeout();
        let http = Client::builder().timeout(timeout).build().map_err(|source| {
            ApiError::Build { source, context: Some("Failed to build HTTP client".into()) }
        })?;

        let base_url: Arc<str> = config.base_url.trim_end_matches('/').into();
        info!(base_url = %base_url, timeout_ms = config.timeout_ms, "API client ready");

        Ok(Self { http, base_url, timeout })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `GET /analytics/storytelling`: KPIs, top movers, per-state totals and consistency.
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] on transport failure, timeout, non-2xx status or
    /// an undecodable body.
    pub async fn dashboard(&self) -> Result<DashboardStorytelling, ApiError> {
        self.send(self.request(Method::GET, "/analytics/storytelling")).await
    }

    /// `GET /operadoras?page=&limit=&search=`. `search` is left out when `None`.
    ///
    /// # Errors
    /// See [`ApiClient::dashboard`].
    pub async fn operators(&self, query: &OperatorQuery) -> Result<PaginatedOperators, ApiError> {
        self.send(self.request(Method::GET, "/operadoras").query(query)).await
    }

    /// `GET /operadoras/{id}/despesas`, newest quarter first.
    ///
    /// # Errors
    /// See [`ApiClient::dashboard`]. An unknown operator is a 404.
    pub async fn operator_expenses(&self, id: &str) -> Result<Vec<Expense>, ApiError> {
        let path = format!("/operadoras/{}/despesas", urlencoding::encode(id));
        self.send(self.request(Method::GET, &path)).await
    }

    /// `GET /operadoras/{id}`.
    ///
    /// # Errors
    /// See [`ApiClient::operator_expenses`].
    pub async fn operator(&self, id: &str) -> Result<Operator, ApiError> {
        let path = format!("/operadoras/{}", urlencoding::encode(id));
        self.send(self.request(Method::GET, &path)).await
    }

    /// `GET /estatisticas`.
    ///
    /// # Errors
    /// See [`ApiClient::dashboard`].
    pub async fn statistics(&self) -> Result<GeneralStatistics, ApiError> {
        self.send(self.request(Method::GET, "/estatisticas")).await
    }

    /// `POST /ai/ask` with `{"question": ...}`.
    ///
    /// A question the analyst refuses still succeeds; check [`AskResponse::error`].
    ///
    /// # Errors
    /// See [`ApiClient::dashboard`].
    pub async fn ask(&self, question: &str) -> Result<AskResponse, ApiError> {
        let body = AskRequest::new(question);
        self.send(self.request(Method::POST, "/ai/ask").json(&body)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "API request");
        self.http.request(method, url)
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?.error_for_status()?;
        let url = response.url().clone();
        response.json::<T>().await.context(format!("Decoding response of {}", url.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let config = ApiConfig { base_url: "http://localhost:8000/api//".to_owned(), timeout_ms: 10 };
        let client = ApiClient::new(&config).expect("client");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.timeout(), Duration::from_millis(10));
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        let client = ApiClient::new(&ApiConfig::default()).expect("client");
        assert_eq!(client.timeout(), Duration::from_secs(10));
        assert_eq!(client.base_url(), "http://127.0.0.1:8000/api");
    }
}
