use std::fmt;

use crate::config::{Locale, SitemapConfig, TURKISH};
use crate::error::SitemapError;
use crate::models::post::{blog_path, BlogPostRecord};

pub const X_DEFAULT: &str = "x-default";

/// `<changefreq>` values accepted by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawler weight in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(pub(crate) f64);

impl Priority {
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Priority(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

// One decimal place (`1.0`, `0.7`) unless the value needs more.
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = format!("{:.1}", self.0);
        if short.parse::<f64>() == Ok(self.0) {
            f.write_str(&short)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

/// One `<url>` block.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub location: String,
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
    /// One link per site locale, then `x-default` pointing at `location`.
    pub alternates: Vec<Alternate>,
}

/// Entry for a page that exists under the same path in every locale.
pub fn build_entry(
    config: &SitemapConfig,
    path: &str,
    last_modified: String,
    change_frequency: ChangeFrequency,
    priority: Priority,
) -> SitemapEntry {
    let location = config.url_for(path);
    let alternates = alternates_for(config, &location, |_| path.to_string());
    SitemapEntry {
        location,
        last_modified,
        change_frequency,
        priority,
        alternates,
    }
}

/// One entry when both slugs match, otherwise one per slug (Turkish first).
/// Every entry links the Turkish locale to the Turkish slug and the rest to
/// the English one, so the two entries reference each other.
pub fn build_post_entries(
    config: &SitemapConfig,
    post: &BlogPostRecord,
    last_modified: String,
    change_frequency: ChangeFrequency,
    priority: Priority,
) -> Result<Vec<SitemapEntry>, SitemapError> {
    let (slug_tr, slug_en) = post.slugs().ok_or_else(|| {
        SitemapError::MalformedRecord("blog post has neither slug_tr nor slug_en".to_string())
    })?;

    let localized = |locale: &Locale| {
        if locale.tag == TURKISH {
            blog_path(slug_tr)
        } else {
            blog_path(slug_en)
        }
    };

    let mut slugs = vec![slug_tr];
    if slug_en != slug_tr {
        slugs.push(slug_en);
    }

    Ok(slugs
        .into_iter()
        .map(|slug| {
            let location = config.url_for(&blog_path(slug));
            let alternates = alternates_for(config, &location, &localized);
            SitemapEntry {
                location,
                last_modified: last_modified.clone(),
                change_frequency,
                priority,
                alternates,
            }
        })
        .collect())
}

fn alternates_for<F>(config: &SitemapConfig, location: &str, path_for: F) -> Vec<Alternate>
where
    F: Fn(&Locale) -> String,
{
    let mut alternates: Vec<Alternate> = config
        .locales
        .iter()
        .map(|locale| Alternate {
            hreflang: locale.tag.clone(),
            href: config.url_for(&locale.localize(&path_for(locale))),
        })
        .collect();
    alternates.push(Alternate {
        hreflang: X_DEFAULT.to_string(),
        href: location.to_string(),
    });
    alternates
}
