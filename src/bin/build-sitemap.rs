use std::path::PathBuf;
use std::process;

use log::{error, info};

use poludev_sitemap::config::SitemapConfig;
use poludev_sitemap::{sitemap_string, write_sitemap};

const DEFAULT_OUTPUT_DIR: &str = "dist";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SitemapConfig::from_env();
    let out_dir = std::env::var("SITEMAP_OUTPUT_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let result = sitemap_string(&config).and_then(|xml| {
        let urls = xml.matches("<url>").count();
        write_sitemap(&xml, &out_dir).map(|path| (path, urls))
    });

    match result {
        Ok((path, urls)) => info!("Wrote {} URLs to {}", urls, path.display()),
        Err(e) => {
            error!("Sitemap build failed: {}", e);
            process::exit(1);
        }
    }
}
