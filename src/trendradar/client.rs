use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::format;
use super::types::{NewsItem, extract_items};
use crate::ticker::resolve_query;

const DEFAULT_BASE_URL: &str = "http://trend-radar-mcp:3333";
const BASE_URL_ENV: &str = "TRENDRADAR_API_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the TrendRadar keyword news service.
///
/// Both operations are total: transport failures, bad statuses, and
/// undecodable bodies all collapse into a descriptive string, so callers
/// feeding the output straight into a pipeline never have to handle an
/// error branch.
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    base_url: String,
}

impl NewsClient {
    /// Reads the base URL from `TRENDRADAR_API_URL`, falling back to the
    /// internal docker service address. Resolved once; the client keeps it
    /// for its lifetime.
    pub fn from_env(http: Client) -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { http, base_url }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches news for a ticker or keyword. Taiwan-exchange suffixes are
    /// stripped and known numeric codes are replaced by company names before
    /// the query goes upstream. Returns the formatted list, `No news found.`
    /// when the service reports nothing usable, or an `Error fetching news:`
    /// string on failure.
    pub async fn search_news(
        &self,
        ticker: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        limit: Option<u32>,
    ) -> String {
        let query = resolve_query(ticker);

        let mut params = vec![
            ("query", query),
            ("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string()),
        ];
        if let Some(start) = start_date {
            params.push(("start_date", start.to_string()));
        }
        if let Some(end) = end_date {
            params.push(("end_date", end.to_string()));
        }

        match self.fetch_items("/api/news/search", &params, "results").await {
            Ok(items) => format::search_lines(&items),
            Err(e) => {
                warn!(error = %e, ticker, "news search failed");
                format!("Error fetching news: {e}")
            }
        }
    }

    /// Fetches the latest hot news across all topics. Returns the formatted
    /// list (without URLs), `No global news found.`, or an
    /// `Error fetching global news:` string on failure.
    pub async fn latest_news(&self, limit: Option<u32>) -> String {
        let params = [("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string())];

        match self.fetch_items("/api/news/latest", &params, "news").await {
            Ok(items) => format::latest_lines(&items),
            Err(e) => {
                warn!(error = %e, "global news fetch failed");
                format!("Error fetching global news: {e}")
            }
        }
    }

    async fn fetch_items(
        &self,
        path: &str,
        params: &[(&str, String)],
        wrapper_key: &str,
    ) -> Result<Vec<NewsItem>, NewsError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let items = extract_items(body, wrapper_key);
        debug!(path, count = items.len(), "news fetched");
        Ok(items)
    }
}
