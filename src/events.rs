//! Event handling layer for platter's TUI.
//!
//! This module dispatches terminal events to the controllers: keyboard
//! shortcuts (quit, reveal, scroll nudges), resize debouncing, and mouse
//! interaction (delegated to [`mouse`]).

use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::AppState;

pub mod mouse;


/// Cells moved per horizontal keyboard nudge of the featured strip.
const KEY_SCROLL_STEP: f64 = 8.0;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the input thread.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` to request application exit, `false` otherwise.
///
/// Details:
/// - `q`, `Esc`, and `Ctrl+C` exit.
/// - `Enter` activates the "Show more" affordance while it is shown
///   (keyboard path to the same operation as clicking the button).
/// - `Left`/`Right` nudge the featured strip, `Home`/`End` jump to its
///   ends; `Up`/`Down` scroll the narrow card list directly, cancelling any
///   reveal scroll in flight.
/// - Resize records the new size and arms the trailing debounce; visibility
///   is re-evaluated on the runtime tick once resizing settles.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            match ke.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
                    return true;
                }
                KeyCode::Enter => {
                    if app.visibility.button_visible() {
                        crate::logic::activate_reveal(app, Instant::now());
                    }
                }
                KeyCode::Left => nudge_strip(app, -KEY_SCROLL_STEP),
                KeyCode::Right => nudge_strip(app, KEY_SCROLL_STEP),
                KeyCode::Home => jump_strip(app, 0.0),
                KeyCode::End => jump_strip(app, 1.0),
                KeyCode::Up => nudge_list(app, -1),
                KeyCode::Down => nudge_list(app, 1),
                _ => {}
            }
        }
        CEvent::Resize(w, h) => {
            app.term_width = w;
            app.term_height = h;
            app.resize_debounce.arm(Instant::now());
        }
        CEvent::Mouse(m) => return mouse::handle_mouse_event(m, app),
        _ => {}
    }
    false
}

/// Jump the featured strip to a fraction of its scrollable range.
fn jump_strip(app: &mut AppState, f: f64) {
    app.strip_anim.cancel();
    app.scrollbar.scroll_to_fraction(&mut app.strip, f);
}

/// Scroll the featured strip by a signed cell delta.
pub(crate) fn nudge_strip(app: &mut AppState, delta: f64) {
    if !app.scrollbar.is_active() {
        return;
    }
    app.strip_anim.cancel();
    app.strip.scroll_by(delta);
    app.scrollbar.refresh();
}

/// Scroll the narrow card list by a signed row delta.
pub(crate) fn nudge_list(app: &mut AppState, delta: i32) {
    app.list_anim.cancel();
    let max = app
        .list_content_rows
        .saturating_sub(app.cards_rect.map_or(0, |(_, _, _, h)| h));
    let next = i64::from(app.list_scroll) + i64::from(delta);
    app.list_scroll = u16::try_from(next.clamp(0, i64::from(max))).unwrap_or(0);
}
