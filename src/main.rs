use log::{info, warn};

use poludev_sitemap::build_rocket;
use poludev_sitemap::config::SitemapConfig;
use poludev_sitemap::routes::public::SitemapService;

#[rocket::launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SitemapConfig::from_env();
    // Still serve robots.txt; sitemap requests answer 500 until this is fixed.
    if let Err(e) = config.store_credentials() {
        warn!("Sitemap store is not configured: {}", e);
    }
    info!("Serving sitemap for {}", config.site_url());

    build_rocket(SitemapService::new(config))
}
