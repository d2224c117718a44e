use std::path::Path;

/// Context message for a failed page fetch.
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context message for malformed scraped data.
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Context message for score-file store operations.
pub fn store_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} {}", operation, path.display())
}
