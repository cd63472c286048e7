use serde::{Deserialize, Serialize};

/// A row of the `blog_posts` table. Each post carries one slug per language.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogPostRecord {
    #[serde(default)]
    pub slug_tr: Option<String>,
    #[serde(default)]
    pub slug_en: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl BlogPostRecord {
    /// `(turkish, english)` slugs. A missing side borrows the other one;
    /// `None` when the post has no usable slug at all.
    pub fn slugs(&self) -> Option<(&str, &str)> {
        let tr = non_empty(self.slug_tr.as_deref());
        let en = non_empty(self.slug_en.as_deref());
        match (tr, en) {
            (Some(tr), Some(en)) => Some((tr, en)),
            (Some(only), None) | (None, Some(only)) => Some((only, only)),
            (None, None) => None,
        }
    }
}

pub fn blog_path(slug: &str) -> String {
    format!("/blog/{}", slug)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
