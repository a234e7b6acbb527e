//! Dashboards saved-object models.

use serde::{Deserialize, Serialize};

/// A saved Dashboards index pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPattern {
    pub title: String,
    /// Saved-object id with the `index-pattern:` prefix stripped.
    pub id: String,
}

/// Minimal slice of a `_search` response over the saved-objects index.
#[derive(Debug, Deserialize)]
pub(crate) struct SavedObjectSearchResponse {
    pub hits: SavedObjectHits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SavedObjectHits {
    #[serde(default)]
    pub hits: Vec<SavedObjectHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SavedObjectHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: SavedObjectSource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SavedObjectSource {
    #[serde(rename = "index-pattern")]
    pub index_pattern: IndexPatternSource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndexPatternSource {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_saved_object_hit() {
        let response: SavedObjectSearchResponse = serde_json::from_value(serde_json::json!({
            "took": 2,
            "hits": {
                "total": {"value": 1, "relation": "eq"},
                "hits": [{
                    "_index": ".kibana_1",
                    "_id": "index-pattern:abc-123",
                    "_source": {"index-pattern": {"title": "logs-*"}}
                }]
            }
        }))
        .unwrap();

        assert_eq!(response.hits.hits.len(), 1);
        assert_eq!(response.hits.hits[0].id, "index-pattern:abc-123");
        assert_eq!(response.hits.hits[0].source.index_pattern.title, "logs-*");
    }
}
