use std::time::Duration;

use serde_json::Value;

use crate::config::SitemapConfig;
use crate::error::{SitemapError, StoreError};

use super::{TableQuery, TableStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Hosted Postgres exposed through PostgREST (`/rest/v1/<table>`).
/// Authenticates with the project's public anon key.
pub struct RestTableStore {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl RestTableStore {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn from_config(config: &SitemapConfig) -> Result<Self, SitemapError> {
        let (url, key) = config.store_credentials()?;
        Ok(Self::new(url, key)?)
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

/// PostgREST query string: `select=a,b&col=eq.val&order=col.desc`.
fn query_params(query: &TableQuery) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(query.filters.len() + 2);
    if !query.columns.is_empty() {
        params.push(("select".to_string(), query.columns.join(",")));
    }
    for (column, value) in &query.filters {
        params.push((column.clone(), format!("eq.{}", value)));
    }
    if let Some((column, direction)) = &query.order {
        params.push(("order".to_string(), format!("{}.{}", column, direction.as_str())));
    }
    params
}

impl TableStore for RestTableStore {
    fn select(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError> {
        let resp = self
            .client
            .get(self.endpoint(&query.table))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .query(&query_params(query))
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            return Err(StoreError::Status { status, body });
        }

        let body: Value = resp
            .json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(StoreError::Decode(format!(
                "expected an array of rows from {}, got {}",
                query.table,
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
