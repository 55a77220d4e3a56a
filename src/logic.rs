//! Interaction logic for the collection page.
//!
//! This module centralizes the non-UI behavior that reacts to user input and
//! the runtime tick:
//! - The card visibility controller (layout-mode resets, incremental reveal).
//! - The synthetic scrollbar controller for the featured strip.
//! - The cross-cutting operations the event layer triggers: activating the
//!   "Show more" affordance and settling a debounced resize.
//!
//! Everything here is synchronous state manipulation; rendering reads the
//! results on the next frame.

use std::time::Instant;

use crate::state::AppState;

pub mod scrollbar;
pub mod visibility;

#[cfg(test)]
mod tests;

/// What: Activate the "Show more" affordance.
///
/// Inputs:
/// - `app`: Application state; cards, visibility controller, and the card
///   pane geometry from the last frame.
/// - `now`: Activation instant, used for pulse deadlines and animation.
///
/// Output:
/// - Mutates visibility state; when cards were revealed, starts a smooth
///   scroll placing the first new card [`visibility::REVEAL_TOP_OFFSET`]
///   rows below the top of the card pane.
///
/// Details:
/// - A no-op when nothing remains hidden (the controller hides the button).
/// - Scroll targeting is skipped before the first frame (no pane geometry).
pub fn activate_reveal(app: &mut AppState, now: Instant) {
    let Some(first) = app
        .visibility
        .reveal_more(&mut app.cards, app.term_width, now)
    else {
        return;
    };
    let Some((_, _, _, pane_h)) = app.cards_rect else {
        return;
    };
    let visible_before = u16::try_from(
        app.cards[..first].iter().filter(|c| c.visible).count(),
    )
    .unwrap_or(u16::MAX);
    let row = visible_before.saturating_mul(crate::ui::CARD_HEIGHT);
    let content = u16::try_from(app.visible_count())
        .unwrap_or(u16::MAX)
        .saturating_mul(crate::ui::CARD_HEIGHT);
    let max = content.saturating_sub(pane_h);
    let target = row
        .saturating_sub(visibility::REVEAL_TOP_OFFSET)
        .min(max);
    app.list_anim
        .start(f64::from(app.list_scroll), f64::from(target), now);
}

/// What: Advance time-driven state by one runtime tick.
///
/// Inputs:
/// - `app`: Application state.
/// - `now`: Tick instant.
///
/// Output:
/// - Fires a settled resize debounce, samples scroll animations, and expires
///   reveal highlights.
///
/// Details:
/// - The debounced resize path re-evaluates visibility with
///   `force_reset = false`, so reveal progress survives same-mode resizes
///   and resets only when the layout mode actually flipped.
pub fn on_tick(app: &mut AppState, now: Instant) {
    if app.resize_debounce.ready(now) {
        app.apply_visibility(false, now);
        app.strip.clamp_offset();
        app.scrollbar.refresh();
    }
    if let Some(v) = app.strip_anim.sample(now) {
        app.strip.offset = v;
        app.strip.clamp_offset();
        app.scrollbar.refresh();
    }
    if let Some(v) = app.list_anim.sample(now) {
        app.list_scroll = to_row(v);
    }
    app.expire_pulses(now);
}

/// Round an animated row offset back to whole terminal rows.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_row(v: f64) -> u16 {
    if v <= 0.0 {
        0
    } else {
        let r = v.round();
        if r >= f64::from(u16::MAX) { u16::MAX } else { r as u16 }
    }
}
