pub mod dates;
pub mod entry;
pub mod sitemap;

// Re-export commonly used functions
pub use entry::{ChangeFrequency, Priority, SitemapEntry};
pub use sitemap::{generate_robots, generate_sitemap, render_sitemap};

/// Escape text for XML element content and attribute values.
///
/// Not idempotent: every `&` is escaped again, so running this twice turns
/// `&` into `&amp;amp;`. Only feed it raw text.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
