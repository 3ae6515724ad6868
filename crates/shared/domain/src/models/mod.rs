//! Payloads exchanged with the ANS analytics backend.
//!
//! Field names follow the backend's JSON verbatim; the types only add small
//! read-side helpers.

mod assistant;
mod dashboard;
mod operators;

pub use assistant::{AskRequest, AskResponse, Row};
pub use dashboard::{
    ConsistencyData, DashboardStorytelling, GeneralStatistics, GeoEficiencia, KpiMacro, TopMover,
};
pub use operators::{Expense, Operator, OperatorQuery, PaginatedOperators};
