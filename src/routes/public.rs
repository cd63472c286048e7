use std::sync::Arc;

use log::error;
use rocket::http::{ContentType, Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::config::SitemapConfig;
use crate::error::SitemapError;
use crate::seo;
use crate::store::TableStore;

const SITEMAP_CACHE_CONTROL: &str =
    "public, max-age=3600, s-maxage=3600, stale-while-revalidate=86400";

/// Shared by every sitemap request. Without an injected store, a REST store
/// is built from the config's credentials for each generation.
pub struct SitemapService {
    pub config: SitemapConfig,
    store: Option<Arc<dyn TableStore>>,
}

impl SitemapService {
    pub fn new(config: SitemapConfig) -> Self {
        SitemapService {
            config,
            store: None,
        }
    }

    pub fn with_store(config: SitemapConfig, store: Arc<dyn TableStore>) -> Self {
        SitemapService {
            config,
            store: Some(store),
        }
    }

    pub fn render(&self) -> Result<String, SitemapError> {
        match &self.store {
            Some(store) => Ok(seo::generate_sitemap(store.as_ref(), &self.config)),
            None => crate::sitemap_string(&self.config),
        }
    }
}

#[derive(Responder)]
pub struct SitemapXml {
    body: String,
    content_type: ContentType,
    cache_control: Header<'static>,
}

impl SitemapXml {
    fn new(body: String) -> Self {
        SitemapXml {
            body,
            content_type: ContentType::new("application", "xml"),
            cache_control: Header::new("Cache-Control", SITEMAP_CACHE_CONTROL),
        }
    }
}

fn generation_failed(details: String) -> Custom<Json<Value>> {
    Custom(
        Status::InternalServerError,
        Json(json!({ "error": "Failed to generate sitemap", "details": details })),
    )
}

fn method_not_allowed() -> Custom<Json<Value>> {
    Custom(
        Status::MethodNotAllowed,
        Json(json!({ "error": "Method not allowed", "allowed": ["GET"] })),
    )
}

// ── Sitemap ────────────────────────────────────────────

#[get("/sitemap.xml")]
pub async fn sitemap(
    service: &State<Arc<SitemapService>>,
) -> Result<SitemapXml, Custom<Json<Value>>> {
    let service = Arc::clone(service.inner());
    // Store client is blocking; keep it off the async workers.
    match rocket::tokio::task::spawn_blocking(move || service.render()).await {
        Ok(Ok(xml)) => Ok(SitemapXml::new(xml)),
        Ok(Err(e)) => {
            error!("Sitemap generation failed: {}", e);
            Err(generation_failed(e.to_string()))
        }
        Err(e) => {
            error!("Sitemap generation task aborted: {}", e);
            Err(generation_failed(e.to_string()))
        }
    }
}

#[post("/sitemap.xml")]
pub fn sitemap_post() -> Custom<Json<Value>> {
    method_not_allowed()
}

#[put("/sitemap.xml")]
pub fn sitemap_put() -> Custom<Json<Value>> {
    method_not_allowed()
}

#[patch("/sitemap.xml")]
pub fn sitemap_patch() -> Custom<Json<Value>> {
    method_not_allowed()
}

#[delete("/sitemap.xml")]
pub fn sitemap_delete() -> Custom<Json<Value>> {
    method_not_allowed()
}

// ── Robots.txt ─────────────────────────────────────────

#[get("/robots.txt")]
pub fn robots(service: &State<Arc<SitemapService>>) -> String {
    seo::generate_robots(&service.config)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        sitemap,
        sitemap_post,
        sitemap_put,
        sitemap_patch,
        sitemap_delete,
        robots,
    ]
}
