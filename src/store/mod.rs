use serde_json::Value;

use crate::error::StoreError;

pub mod rest;

pub use rest::RestTableStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// A read against one table: column selection, equality filters, one ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub columns: Vec<String>,
    pub filters: Vec<(String, String)>,
    pub order: Option<(String, Direction)>,
}

impl TableQuery {
    pub fn table(name: &str) -> Self {
        TableQuery {
            table: name.to_string(),
            columns: Vec::new(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }
}

/// Read access to the hosted table store. Rows come back as raw JSON objects
/// in the store's order.
/// Implementations: `RestTableStore` (PostgREST over HTTPS).
pub trait TableStore: Send + Sync {
    fn select(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError>;
}
