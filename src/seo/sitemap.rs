use log::{info, warn};

use crate::config::SitemapConfig;
use crate::content;
use crate::models::post::BlogPostRecord;
use crate::models::project::ProjectRecord;
use crate::store::TableStore;

use super::dates::{last_modified_from, today};
use super::entry::{build_entry, build_post_entries, ChangeFrequency, Priority, SitemapEntry};
use super::xml_escape;

const URLSET_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
        xmlns:xhtml="http://www.w3.org/1999/xhtml"
        xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
"#;

const URLSET_CLOSE: &str = "</urlset>\n";

struct StaticPage {
    path: &'static str,
    change_frequency: ChangeFrequency,
    priority: Priority,
}

/// Fixed pages, in the order they appear in the document.
const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        path: "/",
        change_frequency: ChangeFrequency::Weekly,
        priority: Priority(1.0),
    },
    StaticPage {
        path: "/about",
        change_frequency: ChangeFrequency::Monthly,
        priority: Priority(0.8),
    },
    StaticPage {
        path: "/projects",
        change_frequency: ChangeFrequency::Weekly,
        priority: Priority(0.9),
    },
    StaticPage {
        path: "/blog",
        change_frequency: ChangeFrequency::Weekly,
        priority: Priority(0.9),
    },
];

const CV_FREQUENCY: ChangeFrequency = ChangeFrequency::Monthly;
const CV_PRIORITY: Priority = Priority(0.7);

/// Projects and posts share one policy.
const CONTENT_FREQUENCY: ChangeFrequency = ChangeFrequency::Monthly;
const CONTENT_PRIORITY: Priority = Priority(0.7);

/// Static pages (plus configured CV pages), stamped with today's date.
pub fn static_entries(config: &SitemapConfig) -> Vec<SitemapEntry> {
    let lastmod = today(config.clock.as_ref());

    let fixed = STATIC_PAGES.iter().map(|page| {
        build_entry(
            config,
            page.path,
            lastmod.clone(),
            page.change_frequency,
            page.priority,
        )
    });
    let cv = config
        .cv_pages
        .iter()
        .map(|path| build_entry(config, path, lastmod.clone(), CV_FREQUENCY, CV_PRIORITY));

    fixed.chain(cv).collect()
}

/// `lastmod` is `updated_at`, else `created_at`, else today.
/// Projects with an unparseable date are skipped.
pub fn project_entries(config: &SitemapConfig, projects: &[ProjectRecord]) -> Vec<SitemapEntry> {
    projects
        .iter()
        .filter_map(|project| {
            let candidates = [project.updated_at.as_deref(), project.created_at.as_deref()];
            match last_modified_from(&candidates, config.clock.as_ref()) {
                Ok(lastmod) => Some(build_entry(
                    config,
                    &project.path(),
                    lastmod,
                    CONTENT_FREQUENCY,
                    CONTENT_PRIORITY,
                )),
                Err(e) => {
                    warn!("Skipping project {} in sitemap: {}", project.id, e);
                    None
                }
            }
        })
        .collect()
}

/// `lastmod` is `updated_at`, else `published_at`, else `created_at`, else
/// today. Posts without a slug or with an unparseable date are skipped.
pub fn post_entries(config: &SitemapConfig, posts: &[BlogPostRecord]) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();
    for post in posts {
        let candidates = [
            post.updated_at.as_deref(),
            post.published_at.as_deref(),
            post.created_at.as_deref(),
        ];
        let built = last_modified_from(&candidates, config.clock.as_ref()).and_then(|lastmod| {
            build_post_entries(config, post, lastmod, CONTENT_FREQUENCY, CONTENT_PRIORITY)
        });
        match built {
            Ok(mut built) => entries.append(&mut built),
            Err(e) => warn!(
                "Skipping blog post {:?}/{:?} in sitemap: {}",
                post.slug_tr, post.slug_en, e
            ),
        }
    }
    entries
}

/// Static entries, then projects, then posts, each in fetch order.
/// A failed fetch contributes nothing; it never aborts the sitemap.
pub fn collect_entries(store: &dyn TableStore, config: &SitemapConfig) -> Vec<SitemapEntry> {
    let mut entries = static_entries(config);
    let static_count = entries.len();

    let projects = content::fetch_active_projects(store).unwrap_or_else(|e| {
        warn!("Sitemap: project fetch failed, continuing without projects: {}", e);
        Vec::new()
    });
    let posts = content::fetch_published_posts(store).unwrap_or_else(|e| {
        warn!("Sitemap: blog post fetch failed, continuing without posts: {}", e);
        Vec::new()
    });

    let mut project_urls = project_entries(config, &projects);
    let mut post_urls = post_entries(config, &posts);
    info!(
        "Sitemap assembled: {} static, {} project, {} blog entries",
        static_count,
        project_urls.len(),
        post_urls.len()
    );

    entries.append(&mut project_urls);
    entries.append(&mut post_urls);
    entries
}

/// Generate sitemap.xml content.
pub fn generate_sitemap(store: &dyn TableStore, config: &SitemapConfig) -> String {
    render_sitemap(&collect_entries(store, config))
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(URLSET_OPEN);

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.location)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            xml_escape(&entry.last_modified)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        for alt in &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                xml_escape(&alt.hreflang),
                xml_escape(&alt.href)
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str(URLSET_CLOSE);
    xml
}

/// Generate robots.txt content pointing crawlers at the sitemap.
pub fn generate_robots(config: &SitemapConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        config.site_url()
    )
}
