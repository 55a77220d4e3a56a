//! Modularized state for the collection page.
//!
//! Splits state into value types and the central [`AppState`] container
//! while preserving a flat public API under `crate::state::*` via
//! re-exports.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{Card, DragState, LayoutMode, ScrollMetrics};
