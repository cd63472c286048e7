#[macro_use]
extern crate rocket;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod routes;
pub mod seo;
pub mod store;


use config::SitemapConfig;
use error::{SitemapError, SitemapResult};
use routes::public::SitemapService;
use store::RestTableStore;

pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Full sitemap document as a string, read from the configured store.
pub fn sitemap_string(config: &SitemapConfig) -> SitemapResult<String> {
    let store = RestTableStore::from_config(config)?;
    Ok(seo::generate_sitemap(&store, config))
}

/// Write `xml` to `<dir>/sitemap.xml`, creating `dir` if needed.
pub fn write_sitemap(xml: &str, dir: &Path) -> SitemapResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| SitemapError::io(dir.display().to_string(), e))?;
    let path = dir.join(SITEMAP_FILE);
    fs::write(&path, xml).map_err(|e| SitemapError::io(path.display().to_string(), e))?;
    Ok(path)
}

pub fn build_rocket(service: SitemapService) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(Arc::new(service))
        .mount("/", routes::public::routes())
        .register("/", catchers![routes::not_found, routes::server_error])
}
