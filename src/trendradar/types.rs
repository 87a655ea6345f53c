use serde::Deserialize;
use serde_json::Value;

/// One news entry as reported by TrendRadar. Every field is optional
/// upstream; absent fields come back as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    pub platform: String,
    pub timestamp: String,
    pub url: String,
}

/// Pulls the item list out of a TrendRadar response body. The endpoints
/// either return a bare array or wrap it in an object under an
/// endpoint-specific key (`results` for search, `news` for latest).
/// Anything that is not an array after unwrapping counts as zero items,
/// and an element that does not look like a news object becomes an empty
/// item rather than failing the whole response.
pub fn extract_items(body: Value, wrapper_key: &str) -> Vec<NewsItem> {
    let list = match body {
        Value::Object(mut map) if map.contains_key(wrapper_key) => {
            map.remove(wrapper_key).unwrap_or(Value::Null)
        }
        other => other,
    };

    match list {
        Value::Array(elements) => elements
            .into_iter()
            .map(|element| serde_json::from_value(element).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_object_with_matching_key() {
        let body = json!({"results": [{"title": "A"}]});
        let items = extract_items(body, "results");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn accepts_bare_array() {
        let body = json!([{"title": "A"}, {"title": "B"}]);
        let items = extract_items(body, "results");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "B");
    }

    #[test]
    fn object_without_key_yields_no_items() {
        let body = json!({"articles": [{"title": "A"}]});
        assert!(extract_items(body, "results").is_empty());
    }

    #[test]
    fn wrapped_non_array_yields_no_items() {
        let body = json!({"news": "maintenance"});
        assert!(extract_items(body, "news").is_empty());
    }

    #[test]
    fn scalar_body_yields_no_items() {
        assert!(extract_items(json!("down"), "results").is_empty());
        assert!(extract_items(Value::Null, "results").is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let body = json!([{"title": "A"}]);
        let items = extract_items(body, "results");
        assert_eq!(items[0].platform, "");
        assert_eq!(items[0].timestamp, "");
        assert_eq!(items[0].url, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = json!([{"title": "A", "score": 0.9}]);
        let items = extract_items(body, "results");
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn non_object_element_becomes_empty_item() {
        let body = json!([42, {"title": "A"}]);
        let items = extract_items(body, "results");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "");
        assert_eq!(items[1].title, "A");
    }
}
