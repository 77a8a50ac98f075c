//! Application constants for the Cassa admin TUI.
//!
//! Paging limits, debounce timing and layout dimensions live here so the
//! transaction view, the HTTP client and the renderer agree on them.

use std::time::Duration;

// ============================================================================
// Transaction Paging
// ============================================================================

/// Limit used on first load and after a reset.
pub const DEFAULT_LOAD_LIMIT: u32 = 10;

/// How much a single "load more" grows the request limit.
pub const LOAD_MORE_STEP: u32 = 10;

/// Hard ceiling for the request limit. The server clamps to the same value.
pub const MAX_LOAD_LIMIT: u32 = 4000;

/// Discrete presets offered by the limit selector.
pub const LIMIT_PRESETS: [u32; 8] = [10, 25, 50, 100, 250, 500, 1000, 4000];

/// Quiet period before a typed search term is sent to the server.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

// ============================================================================
// Timing
// ============================================================================

/// Interval between redraws of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Number of ticks a toast stays on screen.
pub const TOAST_TICKS: u8 = 30;

// ============================================================================
// Layout
// ============================================================================

/// Height of the application header (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the controls bar holding search, filter and limit (in rows).
pub const CONTROLS_HEIGHT: u16 = 3;

/// Height of the summary line below the table (in rows).
pub const SUMMARY_HEIGHT: u16 = 1;

/// Height of the footer with shortcuts (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Tests
// ============================================================================
