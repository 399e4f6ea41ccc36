//! Command-palette search over the documentation entries.
//!
//! The corpus is the full entry list minus a fixed denylist. An empty query
//! yields the default suggestions; anything else is a case-insensitive
//! substring match on titles in source order.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entry::DocEntry;

/// Titles that never appear in search.
pub const DENYLIST: &[&str] = &["Setup", "Changelog", "Templates", "The Story of Sync UI"];

/// Curated "Latest" names used when the config does not override them.
pub const DEFAULT_LATEST: &[&str] = &["Pricing", "Testimonials", "Dock", "Marquee"];

/// Result bucket. Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SearchCategory {
    #[serde(rename = "Latest")]
    Latest,
    #[serde(rename = "All Blocks")]
    AllBlocks,
    #[serde(rename = "All Components")]
    AllComponents,
    #[serde(rename = "Search Results")]
    SearchResults,
}

impl SearchCategory {
    pub const ORDER: [SearchCategory; 4] = [
        SearchCategory::Latest,
        SearchCategory::AllBlocks,
        SearchCategory::AllComponents,
        SearchCategory::SearchResults,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::Latest => "Latest",
            SearchCategory::AllBlocks => "All Blocks",
            SearchCategory::AllComponents => "All Components",
            SearchCategory::SearchResults => "Search Results",
        }
    }
}

/// A search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub slug: String,
    pub url: String,
    pub category: SearchCategory,
}

impl SearchItem {
    fn tagged(entry: &DocEntry, category: SearchCategory) -> Self {
        Self {
            title: entry.title.clone(),
            slug: entry.slug.clone(),
            url: entry.url.clone(),
            category,
        }
    }
}

/// Search behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Titles shown under "Latest", in display order
    pub latest: Vec<String>,
    /// Delay before results are published; `None` filters synchronously
    pub delay: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latest: DEFAULT_LATEST.iter().map(|s| s.to_string()).collect(),
            delay: None,
        }
    }
}

/// Whether a title is excluded from search.
pub fn is_denylisted(title: &str) -> bool {
    DENYLIST.contains(&title)
}

/// The searchable corpus.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<DocEntry>,
    latest: Vec<String>,
}

impl SearchIndex {
    /// Build the corpus, dropping denylisted titles.
    pub fn new(entries: &[DocEntry], config: &SearchConfig) -> Self {
        Self {
            entries: entries
                .iter()
                .filter(|e| !is_denylisted(&e.title))
                .cloned()
                .collect(),
            latest: config.latest.clone(),
        }
    }

    /// Entries that survived the denylist.
    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Curated "Latest" titles.
    pub fn latest(&self) -> &[String] {
        &self.latest
    }

    /// What the palette shows before anything is typed.
    ///
    /// "Latest" in curated order, then all other blocks, then everything else
    /// as components.
    pub fn default_suggestions(&self) -> Vec<SearchItem> {
        let mut items = Vec::with_capacity(self.entries.len());
        let mut featured: Vec<&str> = Vec::new();

        for name in &self.latest {
            if featured.contains(&name.as_str()) {
                continue;
            }
            if let Some(entry) = self.entries.iter().find(|e| e.title == *name) {
                items.push(SearchItem::tagged(entry, SearchCategory::Latest));
                featured.push(name);
            }
        }

        let remaining: Vec<&DocEntry> = self
            .entries
            .iter()
            .filter(|e| !featured.contains(&e.title.as_str()))
            .collect();

        items.extend(
            remaining
                .iter()
                .filter(|e| e.is_block())
                .map(|e| SearchItem::tagged(e, SearchCategory::AllBlocks)),
        );
        items.extend(
            remaining
                .iter()
                .filter(|e| !e.is_block())
                .map(|e| SearchItem::tagged(e, SearchCategory::AllComponents)),
        );

        items
    }

    /// Filter the corpus by `query`.
    ///
    /// A blank query returns [`default_suggestions`](Self::default_suggestions).
    pub fn filter(&self, query: &str) -> Vec<SearchItem> {
        let query = query.trim();
        if query.is_empty() {
            return self.default_suggestions();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .map(|e| {
                let category = if e.is_block() {
                    SearchCategory::AllBlocks
                } else {
                    SearchCategory::SearchResults
                };
                SearchItem::tagged(e, category)
            })
            .collect()
    }
}

/// Bucket results for rendering, in the fixed category order.
///
/// Categories with no results are omitted.
pub fn group(results: &[SearchItem]) -> Vec<(SearchCategory, Vec<&SearchItem>)> {
    SearchCategory::ORDER
        .iter()
        .filter_map(|&category| {
            let items: Vec<&SearchItem> =
                results.iter().filter(|r| r.category == category).collect();
            (!items.is_empty()).then_some((category, items))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<DocEntry> {
        vec![
            DocEntry::new("installation", "Setup", Category::GettingStarted),
            DocEntry::new("changelog", "Changelog", Category::GettingStarted),
            DocEntry::new("story", "The Story of Sync UI", Category::GettingStarted),
            DocEntry::new("templates", "Templates", Category::GettingStarted),
            DocEntry::new("components/button", "Button", Category::Components),
            DocEntry::new("components/dock", "Dock", Category::Components),
            DocEntry::new("blocks/hero", "Hero", Category::Blocks),
            DocEntry::new("blocks/pricing", "Pricing", Category::Blocks),
            DocEntry::new("pricing", "Pricing Table", Category::GettingStarted),
        ]
    }

    fn index() -> SearchIndex {
        SearchIndex::new(&corpus(), &SearchConfig::default())
    }

    #[test]
    fn denylist_applies_before_matching() {
        let index = index();

        for query in ["", "s", "setup", "story", "change", "temp", "e"] {
            for item in index.filter(query) {
                assert!(!is_denylisted(&item.title), "{} leaked for {:?}", item.title, query);
            }
        }
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let index = index();

        for query in ["PRIC", "o", "Hero", "ck"] {
            let results = index.filter(query);
            assert!(!results.is_empty());
            for item in results {
                assert!(item.title.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn query_results_tagged_by_slug_prefix() {
        let results = index().filter("pric");

        assert_eq!(
            results
                .iter()
                .map(|r| (r.title.as_str(), r.category))
                .collect::<Vec<_>>(),
            vec![
                ("Pricing", SearchCategory::AllBlocks),
                ("Pricing Table", SearchCategory::SearchResults),
            ]
        );
    }

    #[test]
    fn default_suggestions_order() {
        let index = index();
        let defaults = index.default_suggestions();

        assert_eq!(index.filter(""), defaults);
        assert_eq!(index.filter("   "), defaults);

        let categories: Vec<_> = defaults.iter().map(|i| i.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        let latest: Vec<_> = defaults
            .iter()
            .filter(|i| i.category == SearchCategory::Latest)
            .map(|i| i.title.as_str())
            .collect();
        // Curated order, names without a matching page skipped
        assert_eq!(latest, vec!["Pricing", "Dock"]);

        let rest: Vec<_> = defaults
            .iter()
            .filter(|i| i.category != SearchCategory::Latest)
            .map(|i| (i.title.as_str(), i.category))
            .collect();
        assert_eq!(
            rest,
            vec![
                ("Hero", SearchCategory::AllBlocks),
                ("Button", SearchCategory::AllComponents),
                ("Pricing Table", SearchCategory::AllComponents),
            ]
        );
    }

    #[test]
    fn pricing_and_setup_scenario() {
        let entries = vec![
            DocEntry::new("pricing", "Pricing", Category::GettingStarted),
            DocEntry::new("installation", "Setup", Category::GettingStarted),
        ];
        let index = SearchIndex::new(&entries, &SearchConfig::default());

        let results = index.filter("pric");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Pricing");
        // Query hits outside blocks/ land in Search Results, never All Components;
        // see "Query hit categories" in DESIGN.md
        assert_eq!(results[0].category, SearchCategory::SearchResults);

        assert!(index.filter("").iter().all(|i| i.title != "Setup"));
    }

    #[test]
    fn groups_in_fixed_order() {
        let results = vec![
            SearchItem::tagged(
                &DocEntry::new("components/x", "X", Category::Components),
                SearchCategory::SearchResults,
            ),
            SearchItem::tagged(
                &DocEntry::new("blocks/y", "Y", Category::Blocks),
                SearchCategory::AllBlocks,
            ),
        ];

        let grouped = group(&results);

        let order: Vec<_> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec![SearchCategory::AllBlocks, SearchCategory::SearchResults]);
    }
}
