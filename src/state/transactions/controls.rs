//! Typed widget state for the transaction controls bar.

use crate::constants::{DEFAULT_LOAD_LIMIT, LIMIT_PRESETS};
use crate::domain::TypeFilter;

// ============================================================================
// Limit Selector
// ============================================================================

/// A selector over a fixed set of limit presets.
///
/// The selected value is always one of the presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitSelect {
    presets: &'static [u32],
    selected: u32,
}

impl Default for LimitSelect {
    fn default() -> Self {
        Self {
            presets: &LIMIT_PRESETS,
            selected: DEFAULT_LOAD_LIMIT,
        }
    }
}

impl LimitSelect {
    /// Currently selected preset.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.selected
    }

    /// All presets, ascending.
    #[must_use]
    pub const fn presets(&self) -> &'static [u32] {
        self.presets
    }

    /// Selects `value` if it is a preset. Returns whether `value` is a preset.
    pub fn select(&mut self, value: u32) -> bool {
        if self.presets.contains(&value) {
            self.selected = value;
            true
        } else {
            false
        }
    }

    /// Best-effort sync after a fetch: follows `limit` only when a preset matches.
    pub fn sync_to(&mut self, limit: u32) -> bool {
        self.select(limit)
    }

    /// The preset after the selected one, saturating at the largest.
    #[must_use]
    pub fn next_value(&self) -> u32 {
        self.presets
            .iter()
            .copied()
            .find(|&preset| preset > self.selected)
            .unwrap_or(self.selected)
    }

    /// The preset before the selected one, saturating at the smallest.
    #[must_use]
    pub fn previous_value(&self) -> u32 {
        self.presets
            .iter()
            .rev()
            .copied()
            .find(|&preset| preset < self.selected)
            .unwrap_or(self.selected)
    }
}

// ============================================================================
// View Controls
// ============================================================================

/// Inputs and outputs the transaction view exchanges with the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewControls {
    /// Raw text of the search box.
    pub search_input: String,
    /// Selected type filter.
    pub filter: TypeFilter,
    /// Limit selector.
    pub limit: LimitSelect,
    /// Whether the "load more" affordance is offered.
    pub load_more_visible: bool,
}

impl Default for ViewControls {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            filter: TypeFilter::All,
            limit: LimitSelect::default(),
            load_more_visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_rejects_values_outside_presets() {
        let mut select = LimitSelect::default();
        assert!(select.select(50));
        assert_eq!(select.value(), 50);

        assert!(!select.select(60));
        assert_eq!(select.value(), 50, "invalid value must not be forced");
    }

    #[test]
    fn test_sync_is_best_effort() {
        let mut select = LimitSelect::default();
        assert!(!select.sync_to(20));
        assert_eq!(select.value(), 10);
        assert!(select.sync_to(25));
        assert_eq!(select.value(), 25);
    }

    #[test]
    fn test_next_and_previous_saturate() {
        let mut select = LimitSelect::default();
        assert_eq!(select.previous_value(), 10);
        assert_eq!(select.next_value(), 25);

        select.select(4000);
        assert_eq!(select.next_value(), 4000);
        assert_eq!(select.previous_value(), 1000);
    }
}
