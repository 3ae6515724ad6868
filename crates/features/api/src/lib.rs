//! # ANS API Client
//!
//! Thin async wrappers over the REST endpoints the dashboard consumes. One
//! [`ApiClient`] is built at start-up from [`ApiConfig`](ans_domain::config::ApiConfig)
//! and shared by cloning.
//!
//! | Method | Endpoint |
//! |---|---|
//! | [`ApiClient::dashboard`] | `GET /analytics/storytelling` |
//! | [`ApiClient::operators`] | `GET /operadoras?page&limit&search` |
//! | [`ApiClient::operator`] | `GET /operadoras/{id}` |
//! | [`ApiClient::operator_expenses`] | `GET /operadoras/{id}/despesas` |
//! | [`ApiClient::statistics`] | `GET /estatisticas` |
//! | [`ApiClient::ask`] | `POST /ai/ask` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ans_api::ApiClient;
//! use ans_domain::config::ApiConfig;
//! use ans_domain::models::OperatorQuery;
//!
//! # async fn run() -> Result<(), ans_api::ApiError> {
//! let api = ApiClient::new(&ApiConfig::default())?;
//! let page = api.operators(&OperatorQuery::new(1, 10).with_search("unimed")).await?;
//! for operator in &page.data {
//!     let expenses = api.operator_expenses(&operator.cnpj).await?;
//!     tracing::info!(cnpj = %operator.cnpj, entries = expenses.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use crate::client::ApiClient;
pub use crate::error::{ApiError, ApiErrorExt};
