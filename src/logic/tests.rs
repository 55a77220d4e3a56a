//! Tests for the visibility and scrollbar controllers and the tick-driven
//! operations built on them.

use std::time::{Duration, Instant};

use crate::catalog::Product;
use crate::logic::scrollbar::ScrollbarController;
use crate::logic::visibility::{INITIAL_VISIBLE, REVEAL_BATCH, VisibilityController};
use crate::state::types::{Card, LayoutMode, ScrollMetrics};
use crate::state::AppState;

/// Narrow and wide test widths around the default threshold of 100.
const NARROW: u16 = 80;
const WIDE: u16 = 140;

/// Build `n` hidden cards over synthetic products.
fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            Card::new(Product {
                name: format!("Item {i}"),
                price_cents: 1000 + i as u64,
                tagline: String::new(),
                badge: None,
            })
        })
        .collect()
}

/// Indices of visible cards, for terse assertions.
fn visible(cards: &[Card]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.visible.then_some(i))
        .collect()
}

#[test]
/// What: A forced narrow apply shows exactly the first four cards and the
/// "Show more" button.
fn narrow_initial_load_shows_four() {
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(10);
    ctl.apply(&mut cs, NARROW, true, Instant::now());
    assert_eq!(visible(&cs), vec![0, 1, 2, 3]);
    assert_eq!(ctl.shown(), INITIAL_VISIBLE);
    assert!(ctl.button_visible());
    assert!(ctl.is_initialized());
}

#[test]
/// What: With four or fewer cards, everything is visible on narrow and the
/// button never appears.
fn narrow_small_catalog_has_no_button() {
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(3);
    ctl.apply(&mut cs, NARROW, true, Instant::now());
    assert_eq!(visible(&cs), vec![0, 1, 2]);
    assert!(!ctl.button_visible());
}

#[test]
/// What: With ten cards, one reveal shows the remaining six and hides the
/// button.
///
/// Inputs:
/// - Fresh narrow load over ten cards, then one reveal activation.
///
/// Output:
/// - All ten visible, `shown == 10`, button hidden, first new index `4`.
fn reveal_caps_at_remaining_and_hides_button() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(10);
    ctl.apply(&mut cs, NARROW, true, now);
    let first = ctl.reveal_more(&mut cs, NARROW, now);
    assert_eq!(first, Some(4));
    assert_eq!(visible(&cs).len(), 10);
    assert_eq!(ctl.shown(), 10);
    assert!(!ctl.button_visible());
    // Nothing left: the next activation is a defensive no-op.
    assert_eq!(ctl.reveal_more(&mut cs, NARROW, now), None);
    assert_eq!(ctl.shown(), 10);
}

#[test]
/// What: Reveals advance by exactly `min(batch, remaining)` and never pass
/// the catalog size.
fn reveals_are_monotone_and_bounded() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(17);
    ctl.apply(&mut cs, NARROW, true, now);
    let mut last = ctl.shown();
    while ctl.reveal_more(&mut cs, NARROW, now).is_some() {
        let shown = ctl.shown();
        assert!(shown > last, "reveal must strictly increase");
        assert!(shown - last <= REVEAL_BATCH);
        assert!(shown <= cs.len());
        last = shown;
    }
    assert_eq!(last, 17);
    assert!(!ctl.button_visible());
}

#[test]
/// What: Wide apply shows everything, pulsing only the cards that were
/// hidden a moment before.
fn wide_apply_pulses_only_previously_hidden() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(8);
    ctl.apply(&mut cs, NARROW, true, now);
    ctl.apply(&mut cs, WIDE, false, now);
    assert_eq!(visible(&cs).len(), 8);
    assert!(!ctl.button_visible(), "button is always hidden on wide");
    for (i, c) in cs.iter().enumerate() {
        if i < INITIAL_VISIBLE {
            assert!(!c.pulsing(now), "already-visible card {i} must not flash");
        } else {
            assert!(c.pulsing(now), "freshly revealed card {i} should pulse");
        }
    }
}

#[test]
/// What: A narrow→wide→narrow round trip resets paging to four.
fn mode_flip_resets_reveal_progress() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(12);
    ctl.apply(&mut cs, NARROW, true, now);
    ctl.reveal_more(&mut cs, NARROW, now);
    assert_eq!(ctl.shown(), 10);
    ctl.apply(&mut cs, WIDE, false, now);
    assert_eq!(ctl.mode(), LayoutMode::Wide);
    ctl.apply(&mut cs, NARROW, false, now);
    assert_eq!(ctl.mode(), LayoutMode::Narrow);
    assert_eq!(ctl.shown(), INITIAL_VISIBLE);
    assert_eq!(visible(&cs), vec![0, 1, 2, 3]);
    assert!(ctl.button_visible());
}

#[test]
/// What: Same-mode resizes never disturb an in-progress reveal.
fn same_mode_resize_keeps_reveal_progress() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(12);
    ctl.apply(&mut cs, NARROW, true, now);
    ctl.reveal_more(&mut cs, NARROW, now);
    let before = visible(&cs);
    ctl.apply(&mut cs, 60, false, now);
    ctl.apply(&mut cs, 99, false, now);
    assert_eq!(visible(&cs), before);
    assert_eq!(ctl.shown(), 10);
}

#[test]
/// What: An empty card set degrades every operation to a no-op.
fn empty_catalog_is_inert() {
    let now = Instant::now();
    let mut ctl = VisibilityController::new(100);
    let mut cs = cards(0);
    ctl.apply(&mut cs, NARROW, true, now);
    assert!(!ctl.is_initialized());
    assert_eq!(ctl.reveal_more(&mut cs, NARROW, now), None);
    assert!(!ctl.button_visible());
}

#[test]
/// What: Thumb geometry follows the viewport/content ratio exactly.
///
/// Inputs:
/// - Content 300, viewport 100, offset 100 (half of the 200-cell range).
///
/// Output:
/// - Thumb width a third of the track; left edge at half of the remaining
///   track, `offset/max * (100 - width)`.
fn thumb_geometry_matches_ratio() {
    let mut sb = ScrollbarController::attach(true, 100);
    let metrics = ScrollMetrics {
        offset: 100.0,
        content_width: 300,
        viewport_width: 100,
    };
    assert!(sb.take_frame(&metrics, WIDE));
    assert!(sb.visible());
    assert!((sb.thumb_width_pct() - 100.0 / 3.0).abs() < 1e-9);
    let expected_left = 0.5 * (100.0 - sb.thumb_width_pct());
    assert!((sb.thumb_left_pct() - expected_left).abs() < 1e-9);
    // Cell projection stays inside the track.
    let (off, w) = sb.thumb_cells(60);
    assert_eq!(w, 20);
    assert!(off + w <= 60);
}

#[test]
/// What: Content that fits yields a full-width thumb at position zero and an
/// invisible scrollbar.
fn thumb_degenerates_when_content_fits() {
    let mut sb = ScrollbarController::attach(true, 100);
    let metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 100,
        viewport_width: 100,
    };
    assert!(sb.take_frame(&metrics, WIDE));
    assert!(!sb.visible(), "no overflow, no scrollbar");
    assert!((sb.thumb_width_pct() - 100.0).abs() < 1e-9);
    assert!((sb.thumb_left_pct()).abs() < 1e-9);
}

#[test]
/// What: The scrollbar hides on narrow widths even when content overflows.
fn scrollbar_hidden_below_threshold() {
    let mut sb = ScrollbarController::attach(true, 100);
    let metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 300,
        viewport_width: 100,
    };
    assert!(sb.take_frame(&metrics, NARROW));
    assert!(!sb.visible());
}

#[test]
/// What: The frame gate coalesces refreshes: one recomputation per frame.
fn refresh_is_coalesced_per_frame() {
    let mut sb = ScrollbarController::attach(true, 100);
    let metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 300,
        viewport_width: 100,
    };
    assert!(sb.take_frame(&metrics, WIDE), "attach queues one pass");
    sb.refresh();
    sb.refresh();
    sb.refresh();
    assert!(sb.take_frame(&metrics, WIDE));
    assert!(!sb.take_frame(&metrics, WIDE), "gate consumed");
}

#[test]
/// What: Dragging the thumb across the track moves the offset monotonically
/// from zero to `max_scroll`.
fn drag_across_track_is_monotone() {
    let mut sb = ScrollbarController::attach(true, 100);
    let mut metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 400,
        viewport_width: 100,
    };
    let track = (10, 5, 80, 2);
    sb.begin_drag();
    assert!(sb.dragging());
    let mut last = -1.0;
    for col in [0, 10, 30, 50, 70, 89, 120] {
        assert!(sb.drag_to(&mut metrics, track, col));
        assert!(metrics.offset >= last, "offset must not move backwards");
        last = metrics.offset;
    }
    // Clamped at both ends: before the track start and past its end.
    assert_eq!(last, metrics.max_scroll());
    sb.end_drag();
    assert!(!sb.drag_to(&mut metrics, track, 40), "disarmed drag is inert");
}

#[test]
/// What: An inert controller (missing strip) no-ops every operation.
fn missing_strip_attaches_inert() {
    let mut sb = ScrollbarController::attach(false, 100);
    let mut metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 300,
        viewport_width: 100,
    };
    assert!(!sb.is_active());
    assert!(!sb.take_frame(&metrics, WIDE));
    sb.refresh();
    assert!(!sb.frame_due());
    sb.begin_drag();
    assert!(!sb.dragging());
    sb.scroll_to_fraction(&mut metrics, 0.8);
    assert_eq!(metrics.offset, 0.0);
    assert!(!sb.set_hover(true));
}

#[test]
/// What: Dispose cancels pending work and deactivates every handler path.
fn dispose_makes_controller_inert() {
    let mut sb = ScrollbarController::attach(true, 100);
    let mut metrics = ScrollMetrics {
        offset: 0.0,
        content_width: 300,
        viewport_width: 100,
    };
    sb.begin_drag();
    sb.refresh();
    sb.dispose();
    assert!(!sb.is_active());
    assert!(!sb.dragging());
    assert!(!sb.frame_due(), "pending frame request was cancelled");
    assert!(!sb.take_frame(&metrics, WIDE));
    sb.scroll_to_fraction(&mut metrics, 1.0);
    assert_eq!(metrics.offset, 0.0, "no writes after dispose");
}

#[test]
/// What: Track fractions clamp to the track bounds.
fn track_fraction_clamps() {
    let track = (10, 5, 80, 2);
    assert_eq!(ScrollbarController::track_fraction(track, 0), 0.0);
    assert_eq!(ScrollbarController::track_fraction(track, 10), 0.0);
    assert_eq!(ScrollbarController::track_fraction(track, 50), 0.5);
    assert_eq!(ScrollbarController::track_fraction(track, 200), 1.0);
    assert_eq!(ScrollbarController::track_fraction((0, 0, 0, 0), 5), 0.0);
}

#[test]
/// What: Activating the reveal starts a smooth scroll that lands the first
/// new card two rows below the pane top.
///
/// Inputs:
/// - Default ten-card state on a narrow terminal with a 20-row card pane.
///
/// Output:
/// - After the animation completes, `list_scroll` equals the first new
///   card's content row minus the fixed top offset.
fn activate_reveal_scrolls_to_first_new_card() {
    let start = Instant::now();
    let mut app = AppState::default();
    app.term_width = NARROW;
    app.apply_visibility(true, start);
    app.cards_rect = Some((0, 3, NARROW, 20));
    crate::logic::activate_reveal(&mut app, start);
    assert_eq!(app.visible_count(), 10);
    assert!(app.list_anim.active());
    // Drive ticks past the animation duration.
    crate::logic::on_tick(&mut app, start + Duration::from_millis(500));
    let row_of_first_new = 4 * crate::ui::CARD_HEIGHT;
    let expected = row_of_first_new - crate::logic::visibility::REVEAL_TOP_OFFSET;
    // Clamped by max scroll: 10 cards * height - 20 pane rows.
    let max = 10 * crate::ui::CARD_HEIGHT - 20;
    assert_eq!(app.list_scroll, expected.min(max));
    assert!(!app.list_anim.active());
}

#[test]
/// What: A debounced resize applies visibility only after the trailing
/// delay, and resets only on a mode flip.
fn debounced_resize_settles_on_tick() {
    let start = Instant::now();
    let mut app = AppState::default();
    app.term_width = NARROW;
    app.apply_visibility(true, start);
    assert_eq!(app.visible_count(), 4);

    // Cross the threshold; nothing changes until the debounce fires.
    app.term_width = WIDE;
    app.resize_debounce.arm(start);
    crate::logic::on_tick(&mut app, start + Duration::from_millis(10));
    assert_eq!(app.visible_count(), 4, "still waiting for the deadline");
    crate::logic::on_tick(&mut app, start + Duration::from_millis(500));
    assert_eq!(app.visible_count(), 10, "wide mode reveals everything");

    // Back to narrow: the flip resets paging to four.
    app.term_width = NARROW;
    app.resize_debounce.arm(start + Duration::from_millis(600));
    crate::logic::on_tick(&mut app, start + Duration::from_secs(1));
    assert_eq!(app.visible_count(), 4);
}
