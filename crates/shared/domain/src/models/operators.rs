use serde::{Deserialize, Serialize};

/// Summary record of a health plan operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub registro_ans: String,
    pub cnpj: String,
    pub razao_social: String,
    pub modalidade: Option<String>,
    pub uf: Option<String>,
}

/// One page of the operator listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedOperators {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub data: Vec<Operator>,
}

impl PaginatedOperators {
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 { 0 } else { self.total.div_ceil(u64::from(self.limit)) }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// An accounting entry for one operator in one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub ano: i32,
    pub trimestre: u8,
    pub conta_contabil: Option<String>,
    pub descricao: Option<String>,
    pub valor: f64,
}

/// Query string of `GET /operadoras`.
///
/// Values are sent as given; the server owns validation (`page >= 1`, `limit >= 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl OperatorQuery {
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit, search: None }
    }

    /// Blank terms are dropped so the server lists everything.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() { None } else { Some(term) };
        self
    }
}

impl Default for OperatorQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u64, page: u32, limit: u32) -> PaginatedOperators {
        PaginatedOperators { total, page, limit, data: Vec::new() }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page(0, 1, 10).total_pages(), 0);
        assert_eq!(page(10, 1, 10).total_pages(), 1);
        assert_eq!(page(11, 1, 10).total_pages(), 2);
        assert_eq!(page(11, 1, 0).total_pages(), 0);
    }

    #[test]
    fn has_next_stops_on_last_page() {
        assert!(page(25, 2, 10).has_next());
        assert!(!page(25, 3, 10).has_next());
    }

    #[test]
    fn blank_search_is_dropped() {
        assert_eq!(OperatorQuery::new(1, 10).with_search("   ").search, None);
        assert_eq!(
            OperatorQuery::new(1, 10).with_search("unimed").search.as_deref(),
            Some("unimed")
        );
    }
}
