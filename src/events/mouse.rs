//! Mouse event handling for platter's TUI.
//!
//! Behavior summary:
//! - Click on the "Show more" button reveals the next card batch.
//! - Click on the scrollbar track jumps (smoothly) to that fraction.
//! - Pointer-down on the thumb arms a drag; movement anywhere then drives
//!   the strip offset directly until pointer-up, so the drag survives the
//!   pointer leaving the thumb.
//! - Pointer movement tracks hover over the scrollbar region (the track and
//!   thumb render thicker while hovered).
//! - Wheel scrolling moves the strip when over it, otherwise the card list.
//!
//! All hit-testing runs against the rectangles the UI cached during the last
//! frame, so clicks land on what is actually on screen.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::scrollbar::ScrollbarController;
use crate::state::AppState;
use crate::state::app_state::Rect4;

/// Cells moved per wheel notch over the featured strip.
const WHEEL_SCROLL_STEP: f64 = 6.0;

/// Rows moved per wheel notch over the narrow card list.
const WHEEL_LIST_STEP: i32 = 2;

/// Whether a point falls inside a cached rectangle.
fn point_in(rect: Option<Rect4>, x: u16, y: u16) -> bool {
    rect.is_some_and(|(rx, ry, rw, rh)| x >= rx && x < rx + rw && y >= ry && y < ry + rh)
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position, button, and kind.
/// - `app`: Mutable application state (cached rects, controllers, scroll
///   models).
///
/// Output:
/// - `true` to request application exit (never used here), `false`
///   otherwise.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let mx = m.column;
    let my = m.row;
    let moved = app.last_mouse_pos != Some((mx, my));
    app.last_mouse_pos = Some((mx, my));

    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_down(app, mx, my),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            // Terminals repeat move events at the same cell; only real
            // movement needs hover or drag work.
            if moved {
                handle_pointer_move(app, mx, my);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.scrollbar.end_drag(),
        MouseEventKind::ScrollLeft => crate::events::nudge_strip(app, -WHEEL_SCROLL_STEP),
        MouseEventKind::ScrollRight => crate::events::nudge_strip(app, WHEEL_SCROLL_STEP),
        MouseEventKind::ScrollUp => handle_wheel(app, mx, my, -1),
        MouseEventKind::ScrollDown => handle_wheel(app, mx, my, 1),
        _ => {}
    }
    false
}

/// Left-button press: button activation, thumb drag arming, or track jump.
fn handle_left_down(app: &mut AppState, mx: u16, my: u16) {
    if app.visibility.button_visible() && point_in(app.button_rect, mx, my) {
        crate::logic::activate_reveal(app, Instant::now());
        return;
    }
    if !app.scrollbar.is_active() || !app.scrollbar.visible() {
        return;
    }
    if point_in(app.thumb_rect, mx, my) {
        // Direct manipulation from here on; stop any jump in flight.
        app.strip_anim.cancel();
        app.scrollbar.begin_drag();
    } else if point_in(app.track_rect, mx, my)
        && let Some(track) = app.track_rect
    {
        let f = ScrollbarController::track_fraction(track, mx);
        let target = f * app.strip.max_scroll();
        app.strip_anim.start(app.strip.offset, target, Instant::now());
    }
}

/// Pointer movement: hover transitions plus document-wide drag tracking.
fn handle_pointer_move(app: &mut AppState, mx: u16, my: u16) {
    let over = point_in(app.scrollbar_rect, mx, my);
    if app.scrollbar.set_hover(over) {
        app.scrollbar.refresh();
    }
    if app.scrollbar.dragging()
        && let Some(track) = app.track_rect
    {
        app.strip_anim.cancel();
        app.scrollbar.drag_to(&mut app.strip, track, mx);
    }
}

/// Vertical wheel: horizontal strip scroll when over the strip or scrollbar,
/// card-list scroll otherwise.
fn handle_wheel(app: &mut AppState, mx: u16, my: u16, direction: i32) {
    let over_strip =
        point_in(app.strip_rect, mx, my) || point_in(app.scrollbar_rect, mx, my);
    if over_strip && app.scrollbar.is_active() {
        crate::events::nudge_strip(app, f64::from(direction) * WHEEL_SCROLL_STEP);
    } else {
        crate::events::nudge_list(app, direction * WHEEL_LIST_STEP);
    }
}
