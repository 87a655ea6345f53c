use super::types::NewsItem;

pub const NO_NEWS: &str = "No news found.";
pub const NO_GLOBAL_NEWS: &str = "No global news found.";

/// Formats ticker-search results, one item per line, URL included.
pub fn search_lines(items: &[NewsItem]) -> String {
    join_or(items, NO_NEWS, |item| {
        format!(
            "[{}] {}: {} ({})",
            item.timestamp, item.platform, item.title, item.url
        )
    })
}

/// Formats latest-feed results. The latest endpoint carries no URLs.
pub fn latest_lines(items: &[NewsItem]) -> String {
    join_or(items, NO_GLOBAL_NEWS, |item| {
        format!("[{}] {}: {}", item.timestamp, item.platform, item.title)
    })
}

fn join_or(items: &[NewsItem], empty: &str, line: impl Fn(&NewsItem) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}
