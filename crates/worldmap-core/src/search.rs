//! Map-search screen: filter chips and the search overlay.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::content::{ResultRow, SEARCH_RESULTS};
use crate::home::{NavTab, Route};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterBar {
    chips: Vec<String>,
}

impl FilterBar {
    pub fn new(chips: Vec<String>) -> Self {
        let mut bar = Self::default();
        for c in chips {
            bar.add(c);
        }
        bar
    }

    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    /// Add a chip. Blank and duplicate chips are ignored.
    pub fn add(&mut self, chip: impl Into<String>) -> bool {
        let chip = chip.into();
        let chip = chip.trim();
        if chip.is_empty() || self.chips.iter().any(|c| c == chip) {
            return false;
        }
        self.chips.push(chip.to_string());
        true
    }

    /// Remove every chip equal to `chip`.
    pub fn remove(&mut self, chip: &str) -> bool {
        let before = self.chips.len();
        self.chips.retain(|c| c != chip);
        let removed = self.chips.len() != before;
        if removed {
            log::debug!("removed filter {chip:?}");
        }
        removed
    }
}

/// Source of overlay session ids, unique for the whole process.
static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOverlay {
    open: bool,
    query: String,
    session: u64,
}

impl SearchOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Show the overlay. Opening a closed overlay starts a new session.
    pub fn open(&mut self) {
        if !self.open {
            self.session = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
            self.open = true;
        }
    }

    /// Id of the current open session; 0 before the first open.
    ///
    /// Renderers key the query field on it so reopening starts from empty text.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Hide the overlay. The query does not survive closing.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Static and unfiltered; the query is not consulted.
    pub fn results(&self) -> &'static [ResultRow] {
        SEARCH_RESULTS
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapSearchState {
    pub filters: FilterBar,
    pub overlay: SearchOverlay,
    active: NavTab,
}

impl MapSearchState {
    pub fn new(initial_filters: Vec<String>) -> Self {
        Self {
            filters: FilterBar::new(initial_filters),
            overlay: SearchOverlay::default(),
            active: NavTab::Map,
        }
    }

    pub fn active(&self) -> NavTab {
        self.active
    }

    /// The chip row is hidden while the overlay covers the map.
    pub fn filter_bar_visible(&self) -> bool {
        !self.overlay.is_open()
    }

    /// Highlight `tab`. Every tab except the map leads back home.
    pub fn select(&mut self, tab: NavTab) -> Option<Route> {
        self.active = tab;
        (tab != NavTab::Map).then_some(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_filters_out_matching_chips() {
        let mut bar = FilterBar::new(vec!["canteen".into(), "library".into()]);
        assert!(bar.remove("canteen"));
        assert_eq!(bar.chips(), ["library".to_string()]);
        assert!(!bar.remove("canteen"));
        assert!(bar.remove("library"));
        assert!(bar.chips().is_empty());
    }

    #[test]
    fn add_ignores_blank_and_duplicates() {
        let mut bar = FilterBar::new(vec!["canteen".into(), "canteen".into()]);
        assert_eq!(bar.chips().len(), 1);
        assert!(!bar.add("  "));
        assert!(!bar.add(" canteen "));
        assert!(bar.add("parking"));
        assert_eq!(bar.chips(), ["canteen".to_string(), "parking".to_string()]);
    }

    #[test]
    fn closing_overlay_clears_query() {
        let mut state = MapSearchState::new(vec!["canteen".into()]);
        assert!(state.filter_bar_visible());

        state.overlay.open();
        state.overlay.set_query("lib");
        assert!(!state.filter_bar_visible());
        assert_eq!(state.overlay.query(), "lib");

        state.overlay.close();
        assert!(state.filter_bar_visible());
        assert_eq!(state.overlay.query(), "");
    }

    #[test]
    fn reopening_starts_a_new_session() {
        let mut overlay = SearchOverlay::default();
        assert_eq!(overlay.session(), 0);

        overlay.open();
        let first = overlay.session();
        overlay.open();
        assert_eq!(overlay.session(), first);
        overlay.set_query("lib");

        overlay.close();
        overlay.open();
        assert_ne!(overlay.session(), first);
        assert_eq!(overlay.query(), "");

        let mut other_visit = SearchOverlay::default();
        other_visit.open();
        assert_ne!(other_visit.session(), first);
        assert_ne!(other_visit.session(), overlay.session());
    }

    #[test]
    fn results_ignore_query() {
        let mut overlay = SearchOverlay::default();
        let all = overlay.results();
        overlay.set_query("zzz");
        assert_eq!(overlay.results(), all);
        assert_eq!(all.first(), Some(&ResultRow::Wide("อาคาร1")));
    }

    #[test]
    fn non_map_tabs_route_home() {
        let mut state = MapSearchState::new(vec![]);
        assert_eq!(state.active(), NavTab::Map);
        assert_eq!(state.select(NavTab::Map), None);
        assert_eq!(state.select(NavTab::Saved), Some(Route::Home));
        assert_eq!(state.active(), NavTab::Saved);
    }
}
