//! UI helper utilities for formatting and geometry.

use ratatui::layout::Rect;

use crate::state::app_state::Rect4;

/// Convert a layout [`Rect`] into the cached tuple form used for
/// hit-testing.
#[must_use]
pub const fn rect4(r: Rect) -> Rect4 {
    (r.x, r.y, r.width, r.height)
}

/// Format a price in cents as a dollar string, e.g. `$64.00`.
#[must_use]
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Saturate a `usize` count into terminal cells.
#[must_use]
pub fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
