//! Central [`AppState`] container shared by the event, logic, and UI layers.

use std::time::Instant;

use crate::catalog::Product;
use crate::config::Settings;
use crate::logic::scrollbar::ScrollbarController;
use crate::logic::visibility::VisibilityController;
use crate::state::types::{Card, ScrollMetrics};
use crate::util::sched::{Debounce, ScrollAnim};

/// Cached layout rectangle as `(x, y, w, h)` in terminal cells.
///
/// Written by the UI layer on every frame and read by mouse hit-testing.
pub type Rect4 = (u16, u16, u16, u16);

/// Global application state.
///
/// Mutated in response to input events and the runtime tick. Interactive
/// regions publish their rectangles here each frame so the mouse handler can
/// hit-test against what is actually on screen.
#[derive(Debug)]
pub struct AppState {
    /// Resolved user settings.
    pub settings: Settings,
    /// Product cards in catalog order.
    pub cards: Vec<Card>,
    /// Card visibility controller (reveal paging, layout-mode resets).
    pub visibility: VisibilityController,
    /// Synthetic scrollbar controller for the featured strip.
    pub scrollbar: ScrollbarController,
    /// Scroll model of the featured strip.
    pub strip: ScrollMetrics,
    /// Eased animation for strip jumps (track clicks).
    pub strip_anim: ScrollAnim,
    /// Vertical scroll offset of the narrow card list, in rows.
    pub list_scroll: u16,
    /// Total content height of the narrow card list, in rows (set at render).
    pub list_content_rows: u16,
    /// Eased animation for reveal scrolling of the card list.
    pub list_anim: ScrollAnim,
    /// Trailing-edge debounce for resize handling.
    pub resize_debounce: Debounce,
    /// Current terminal width in columns.
    pub term_width: u16,
    /// Current terminal height in rows.
    pub term_height: u16,
    /// Last observed mouse position.
    pub last_mouse_pos: Option<(u16, u16)>,
    /// Card pane rectangle (narrow list or wide grid).
    pub cards_rect: Option<Rect4>,
    /// "Show more" button rectangle, when rendered.
    pub button_rect: Option<Rect4>,
    /// Featured strip rectangle, when rendered.
    pub strip_rect: Option<Rect4>,
    /// Whole synthetic scrollbar region (hover target).
    pub scrollbar_rect: Option<Rect4>,
    /// Scrollbar track rectangle (click-to-jump target).
    pub track_rect: Option<Rect4>,
    /// Scrollbar thumb rectangle (drag handle).
    pub thumb_rect: Option<Rect4>,
}

impl AppState {
    /// Build state for a catalog under the given settings.
    ///
    /// The scrollbar controller attaches inert when the featured strip is
    /// disabled or there is nothing to scroll, so its handlers no-op.
    #[must_use]
    pub fn new(settings: Settings, products: Vec<Product>) -> Self {
        let cards: Vec<Card> = products.into_iter().map(Card::new).collect();
        let strip_present = settings.featured_strip && !cards.is_empty();
        let visibility = VisibilityController::new(settings.narrow_threshold);
        let scrollbar = ScrollbarController::attach(strip_present, settings.narrow_threshold);
        Self {
            cards,
            visibility,
            scrollbar,
            strip: ScrollMetrics::default(),
            strip_anim: ScrollAnim::new(settings.scroll_anim),
            list_scroll: 0,
            list_content_rows: 0,
            list_anim: ScrollAnim::new(settings.scroll_anim),
            resize_debounce: Debounce::new(settings.resize_debounce),
            term_width: 120,
            term_height: 40,
            last_mouse_pos: None,
            cards_rect: None,
            button_rect: None,
            strip_rect: None,
            scrollbar_rect: None,
            track_rect: None,
            thumb_rect: None,
            settings,
        }
    }

    /// Re-evaluate card visibility for the current terminal width.
    ///
    /// Thin forwarder that splits the borrow between the controller and the
    /// card slice; see [`VisibilityController::apply`] for semantics.
    pub fn apply_visibility(&mut self, force_reset: bool, now: Instant) {
        self.visibility
            .apply(&mut self.cards, self.term_width, force_reset, now);
    }

    /// Clear expired reveal highlights. Called from the runtime tick.
    pub fn expire_pulses(&mut self, now: Instant) {
        for card in &mut self.cards {
            if card.pulse_until.is_some_and(|t| now >= t) {
                card.pulse_until = None;
            }
        }
    }

    /// Number of currently visible cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }
}

impl Default for AppState {
    /// State over the demo catalog, sized to a comfortable wide terminal.
    ///
    /// Used heavily by tests as a deterministic starting point.
    fn default() -> Self {
        Self::new(Settings::default(), crate::catalog::demo_catalog())
    }
}
