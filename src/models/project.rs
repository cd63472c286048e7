use serde::{Deserialize, Serialize};

/// A row of the `projects` table, as far as the sitemap cares.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ProjectRecord {
    pub fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}
