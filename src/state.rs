use std::collections::BTreeMap;

use crate::data::catalog;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Presentation state of one card. Two states only: collapsed (initial)
/// and expanded. Never persisted; lives as long as the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// The tip this card presents (lookup key, not ownership).
    pub tip_id: u32,
    /// Whether the description is currently shown.
    pub expanded: bool,
}

impl CardState {
    fn collapsed(tip_id: u32) -> Self {
        CardState {
            tip_id,
            expanded: false,
        }
    }
}

/// The full UI state, independent of rendering.
///
/// Card state is keyed by tip id so it survives scroll-driven re-renders:
/// the render loop looks state up by identity instead of recreating it.
/// An absent entry reads as collapsed; entries are materialized on first
/// toggle.
pub struct AppState {
    /// The fixed tip catalog, built once at startup and never mutated.
    pub catalog: Catalog,

    /// Per-card toggle state, keyed by tip id.
    cards: BTreeMap<u32, CardState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(catalog::builtin())
    }
}

impl AppState {
    /// Build the state around a catalog.
    pub fn new(catalog: Catalog) -> Self {
        log::info!("catalog ready: {} tips", catalog.len());
        Self {
            catalog,
            cards: BTreeMap::new(),
        }
    }

    /// Whether the card for `tip_id` currently shows its description.
    pub fn is_expanded(&self, tip_id: u32) -> bool {
        self.cards.get(&tip_id).map(|c| c.expanded).unwrap_or(false)
    }

    /// Flip the expanded flag of one card. Other cards are untouched.
    pub fn toggle(&mut self, tip_id: u32) {
        let card = self
            .cards
            .entry(tip_id)
            .or_insert_with(|| CardState::collapsed(tip_id));
        card.expanded = !card.expanded;
        log::debug!(
            "tip {tip_id} {}",
            if card.expanded { "expanded" } else { "collapsed" }
        );
    }

    /// Number of cards currently expanded.
    pub fn expanded_count(&self) -> usize {
        self.cards.values().filter(|c| c.expanded).count()
    }

    /// Number of cards that have materialized state.
    pub fn tracked_cards(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_start_collapsed() {
        let state = AppState::default();
        for tip in state.catalog.iter() {
            assert!(!state.is_expanded(tip.id));
        }
        assert_eq!(state.expanded_count(), 0);
        assert_eq!(state.tracked_cards(), 0);
    }

    #[test]
    fn test_single_toggle_expands() {
        let mut state = AppState::default();
        state.toggle(1);
        assert!(state.is_expanded(1));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut state = AppState::default();
        state.toggle(7);
        state.toggle(7);
        assert!(!state.is_expanded(7));
        assert_eq!(state.expanded_count(), 0);
    }

    #[test]
    fn test_three_toggles_leave_expanded() {
        let mut state = AppState::default();
        for _ in 0..3 {
            state.toggle(5);
        }
        assert!(state.is_expanded(5));
    }

    #[test]
    fn test_toggling_one_card_leaves_others_alone() {
        let mut state = AppState::default();
        state.toggle(12);

        assert!(state.is_expanded(12));
        for tip in state.catalog.iter() {
            if tip.id != 12 {
                assert!(!state.is_expanded(tip.id), "tip {} was disturbed", tip.id);
            }
        }
    }

    #[test]
    fn test_independent_cards_keep_their_own_flags() {
        let mut state = AppState::default();
        state.toggle(3);
        state.toggle(9);
        state.toggle(9);

        assert!(state.is_expanded(3));
        assert!(!state.is_expanded(9));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn test_empty_catalog_has_no_card_state() {
        let state = AppState::new(Catalog::default());
        assert!(state.catalog.is_empty());
        assert_eq!(state.expanded_count(), 0);
        assert_eq!(state.tracked_cards(), 0);
    }
}
