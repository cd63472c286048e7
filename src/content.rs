use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::models::post::BlogPostRecord;
use crate::models::project::ProjectRecord;
use crate::store::{Direction, TableQuery, TableStore};

pub const PROJECTS_TABLE: &str = "projects";
pub const POSTS_TABLE: &str = "blog_posts";

/// Active projects, most recently updated first.
pub fn active_projects_query() -> TableQuery {
    TableQuery::table(PROJECTS_TABLE)
        .select(&["id", "updated_at", "created_at"])
        .eq("status", "active")
        .order_by("updated_at", Direction::Descending)
}

/// Published posts, newest first.
pub fn published_posts_query() -> TableQuery {
    TableQuery::table(POSTS_TABLE)
        .select(&["slug_tr", "slug_en", "updated_at", "published_at", "created_at"])
        .eq("published", "true")
        .order_by("published_at", Direction::Descending)
}

pub fn fetch_active_projects(store: &dyn TableStore) -> Result<Vec<ProjectRecord>, StoreError> {
    let rows = store.select(&active_projects_query())?;
    Ok(decode_rows(rows, PROJECTS_TABLE))
}

pub fn fetch_published_posts(store: &dyn TableStore) -> Result<Vec<BlogPostRecord>, StoreError> {
    let rows = store.select(&published_posts_query())?;
    Ok(decode_rows(rows, POSTS_TABLE))
}

/// Rows that don't fit the record shape are dropped, not fatal.
fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>, table: &str) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {} row #{}: {}", table, index, e);
                None
            }
        })
        .collect()
}
