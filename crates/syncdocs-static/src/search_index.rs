//! The `search-index.json` document loaded by the search palette.

use serde::{Deserialize, Serialize};

use syncdocs_content::{DocEntry, SearchConfig, SearchIndex, SearchItem};

/// Serialized search corpus.
///
/// `entries` is already denylist-filtered; the client only runs the substring
/// match and uses `suggestions` for the empty query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndexFile {
    pub entries: Vec<DocEntry>,
    /// Curated "Latest" titles
    pub latest: Vec<String>,
    /// Default suggestions, in render order
    pub suggestions: Vec<SearchItem>,
    /// Delay before results are shown; 0 filters synchronously
    pub delay_ms: u64,
}

impl SearchIndexFile {
    pub fn new(entries: &[DocEntry], config: &SearchConfig) -> Self {
        let index = SearchIndex::new(entries, config);
        Self {
            suggestions: index.default_suggestions(),
            entries: index.entries().to_vec(),
            latest: index.latest().to_vec(),
            delay_ms: config.delay.map(|d| d.as_millis() as u64).unwrap_or(0),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
