//! Keyboard-driven search palette.
//!
//! Models the open/closed state, the query, the published results, and the
//! highlighted row. The browser runtime mirrors these transitions; keeping them
//! here makes the behaviour testable.
//!
//! When a publish delay is configured, every keystroke hands out a
//! [`QueryTicket`]. Only the most recent ticket publishes, so a slow earlier
//! query can never overwrite a newer one (last write wins).

use std::time::Duration;

use crate::search::{group, SearchConfig, SearchIndex, SearchItem};

/// Whether the palette is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteState {
    #[default]
    Closed,
    Open,
}

/// Layout the palette is rendered in. Mobile uses a modal with its own close
/// button, so clicks outside do not close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

/// Input the palette reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    /// `/` pressed; ignored while typing in another text field
    Slash { in_text_input: bool },
    /// The search trigger was clicked
    Trigger,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    ClickOutside,
    /// The modal close button (mobile)
    CloseButton,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Move keyboard focus into the search input
    Focus,
    /// Go to the URL
    Navigate(String),
}

/// A pending query publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
}

/// Search palette state machine.
#[derive(Debug, Clone)]
pub struct SearchPalette {
    index: SearchIndex,
    viewport: Viewport,
    delay: Option<Duration>,
    state: PaletteState,
    query: String,
    results: Vec<SearchItem>,
    selected: usize,
    generation: u64,
}

impl SearchPalette {
    /// Create a closed palette showing the default suggestions.
    pub fn new(index: SearchIndex, config: &SearchConfig, viewport: Viewport) -> Self {
        let results = index.default_suggestions();
        Self {
            index,
            viewport,
            delay: config.delay,
            state: PaletteState::Closed,
            query: String::new(),
            results,
            selected: 0,
            generation: 0,
        }
    }

    pub fn state(&self) -> PaletteState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current results, flattened in display order (see [`group`]).
    pub fn results(&self) -> &[SearchItem] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted result, if any.
    pub fn selected(&self) -> Option<&SearchItem> {
        self.results.get(self.selected)
    }

    /// Configured publish delay.
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Apply an input event.
    pub fn handle(&mut self, event: PaletteEvent) -> Option<PaletteAction> {
        match (self.state, event) {
            (PaletteState::Closed, PaletteEvent::Slash { in_text_input: false })
            | (PaletteState::Closed, PaletteEvent::Trigger) => {
                self.state = PaletteState::Open;
                Some(PaletteAction::Focus)
            }

            (PaletteState::Open, PaletteEvent::ArrowDown) => {
                let last = self.results.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                None
            }

            (PaletteState::Open, PaletteEvent::ArrowUp) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }

            (PaletteState::Open, PaletteEvent::Enter) => {
                let url = self.selected()?.url.clone();
                self.state = PaletteState::Closed;
                Some(PaletteAction::Navigate(url))
            }

            (PaletteState::Open, PaletteEvent::Escape) => {
                self.state = PaletteState::Closed;
                self.clear_query();
                None
            }

            (PaletteState::Open, PaletteEvent::ClickOutside) => {
                if self.viewport == Viewport::Desktop {
                    self.state = PaletteState::Closed;
                }
                None
            }

            (PaletteState::Open, PaletteEvent::CloseButton) => {
                self.state = PaletteState::Closed;
                None
            }

            _ => None,
        }
    }

    /// Replace the query.
    ///
    /// Without a delay the results are published immediately and `None` is
    /// returned. With a delay the caller waits, then passes the ticket to
    /// [`complete`](Self::complete).
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<QueryTicket> {
        self.query = query.into();
        self.generation += 1;

        if self.delay.is_none() {
            self.publish();
            return None;
        }

        Some(QueryTicket {
            generation: self.generation,
        })
    }

    /// Publish results for a delayed query.
    ///
    /// Returns `false` and changes nothing if a newer query superseded the ticket.
    pub fn complete(&mut self, ticket: QueryTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.publish();
        true
    }

    fn clear_query(&mut self) {
        self.query.clear();
        self.generation += 1;
        self.publish();
    }

    fn publish(&mut self) {
        let results = self.index.filter(&self.query);
        self.results = group(&results)
            .into_iter()
            .flat_map(|(_, items)| items.into_iter().cloned())
            .collect();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, DocEntry};
    use crate::search::SearchCategory;

    fn entries() -> Vec<DocEntry> {
        vec![
            DocEntry::new("components/button", "Button", Category::Components),
            DocEntry::new("components/badge", "Badge", Category::Components),
            DocEntry::new("components/card", "Card", Category::Components),
            DocEntry::new("blocks/hero", "Hero", Category::Blocks),
        ]
    }

    fn palette(config: SearchConfig, viewport: Viewport) -> SearchPalette {
        let index = SearchIndex::new(&entries(), &config);
        SearchPalette::new(index, &config, viewport)
    }

    fn open_palette() -> SearchPalette {
        let mut p = palette(SearchConfig::default(), Viewport::Desktop);
        p.handle(PaletteEvent::Slash { in_text_input: false });
        p
    }

    #[test]
    fn slash_opens_and_focuses() {
        let mut p = palette(SearchConfig::default(), Viewport::Desktop);

        assert_eq!(p.handle(PaletteEvent::Slash { in_text_input: true }), None);
        assert_eq!(p.state(), PaletteState::Closed);

        assert_eq!(
            p.handle(PaletteEvent::Slash { in_text_input: false }),
            Some(PaletteAction::Focus)
        );
        assert_eq!(p.state(), PaletteState::Open);
    }

    #[test]
    fn arrow_keys_clamp() {
        let mut p = open_palette();
        let n = p.results().len();
        assert!(n > 0);

        p.handle(PaletteEvent::ArrowUp);
        assert_eq!(p.selected_index(), 0);

        for _ in 0..n + 5 {
            p.handle(PaletteEvent::ArrowDown);
        }
        assert_eq!(p.selected_index(), n - 1);
    }

    #[test]
    fn arrows_with_no_results_stay_at_zero() {
        let mut p = open_palette();
        p.set_query("zzz");
        assert!(p.results().is_empty());

        p.handle(PaletteEvent::ArrowDown);
        assert_eq!(p.selected_index(), 0);
        assert_eq!(p.handle(PaletteEvent::Enter), None);
        assert_eq!(p.state(), PaletteState::Open);
    }

    #[test]
    fn enter_navigates_and_closes() {
        let mut p = open_palette();
        p.set_query("ca");
        p.handle(PaletteEvent::ArrowDown);

        let action = p.handle(PaletteEvent::Enter);

        assert_eq!(
            action,
            Some(PaletteAction::Navigate("/docs/components/card".to_string()))
        );
        assert_eq!(p.state(), PaletteState::Closed);
    }

    #[test]
    fn enter_follows_display_order() {
        let config = SearchConfig::default();
        let corpus = vec![
            DocEntry::new("components/pricing-card", "Pricing Card", Category::Components),
            DocEntry::new("blocks/pricing", "Pricing", Category::Blocks),
        ];
        let mut p = SearchPalette::new(SearchIndex::new(&corpus, &config), &config, Viewport::Desktop);
        p.handle(PaletteEvent::Slash { in_text_input: false });
        p.set_query("pric");

        let shown: Vec<_> = group(p.results())
            .into_iter()
            .flat_map(|(_, items)| items.into_iter().map(|i| i.url.clone()))
            .collect();
        assert_eq!(shown[0], "/docs/blocks/pricing");

        assert_eq!(
            p.handle(PaletteEvent::Enter),
            Some(PaletteAction::Navigate("/docs/blocks/pricing".to_string()))
        );
    }

    #[test]
    fn escape_closes_and_clears() {
        let mut p = open_palette();
        p.set_query("but");

        p.handle(PaletteEvent::Escape);

        assert_eq!(p.state(), PaletteState::Closed);
        assert_eq!(p.query(), "");
        assert_eq!(p.results()[0].category, SearchCategory::AllBlocks);
    }

    #[test]
    fn click_outside_only_closes_on_desktop() {
        let mut desktop = open_palette();
        desktop.handle(PaletteEvent::ClickOutside);
        assert_eq!(desktop.state(), PaletteState::Closed);

        let mut mobile = palette(SearchConfig::default(), Viewport::Mobile);
        mobile.handle(PaletteEvent::Trigger);
        mobile.handle(PaletteEvent::ClickOutside);
        assert_eq!(mobile.state(), PaletteState::Open);
        mobile.handle(PaletteEvent::CloseButton);
        assert_eq!(mobile.state(), PaletteState::Closed);
    }

    #[test]
    fn new_query_resets_selection() {
        let mut p = open_palette();
        p.handle(PaletteEvent::ArrowDown);
        p.handle(PaletteEvent::ArrowDown);

        p.set_query("b");

        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn delayed_queries_are_last_write_wins() {
        let config = SearchConfig {
            delay: Some(Duration::from_millis(300)),
            ..SearchConfig::default()
        };
        let mut p = palette(config, Viewport::Desktop);
        let defaults = p.results().to_vec();

        let first = p.set_query("b").unwrap();
        let second = p.set_query("ca").unwrap();
        assert_eq!(p.results(), defaults.as_slice());

        assert!(!p.complete(first));
        assert_eq!(p.results(), defaults.as_slice());

        assert!(p.complete(second));
        assert_eq!(p.results().len(), 1);
        assert_eq!(p.results()[0].title, "Card");
    }
}
