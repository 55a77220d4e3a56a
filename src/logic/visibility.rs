//! Card visibility control for the collection page.
//!
//! The narrow layout pages cards in: four are visible after a reset, and
//! each "Show more" activation reveals up to six more. The wide layout shows
//! everything. Crossing the width threshold in either direction (or an
//! explicit forced reset) restarts paging; resizes that stay within a layout
//! mode never disturb reveal progress.

use std::time::{Duration, Instant};

use crate::state::types::{Card, LayoutMode};

/// Cards visible after a reset on the narrow layout.
pub const INITIAL_VISIBLE: usize = 4;

/// Cards revealed per "Show more" activation.
pub const REVEAL_BATCH: usize = 6;

/// Rows between the card pane top and the first newly revealed card after a
/// reveal scroll.
pub const REVEAL_TOP_OFFSET: u16 = 2;

/// How long a freshly revealed card keeps its highlight.
pub const REVEAL_PULSE: Duration = Duration::from_millis(400);

/// Controller deciding which cards render, per layout mode.
///
/// Owns the paging state exclusively; the event and tick layers drive it and
/// the UI only reads the resulting `Card` flags.
#[derive(Debug)]
pub struct VisibilityController {
    /// Column threshold separating narrow from wide.
    threshold: u16,
    /// Whether an initial visibility pass has run.
    initialized: bool,
    /// Paging position: cards at index `< shown` are the revealed set.
    shown: usize,
    /// Mode recorded at the last apply, for flip detection.
    mode: LayoutMode,
    /// Whether the "Show more" affordance should render.
    button_visible: bool,
}

impl VisibilityController {
    /// Create an uninitialized controller; the first [`Self::apply`] call
    /// with `force_reset` establishes the real state.
    #[must_use]
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            initialized: false,
            shown: INITIAL_VISIBLE,
            mode: LayoutMode::Wide,
            button_visible: false,
        }
    }

    /// What: Re-evaluate card visibility for the given width.
    ///
    /// Inputs:
    /// - `cards`: Cards in catalog order, mutated in place.
    /// - `width`: Current terminal width in columns.
    /// - `force_reset`: Restart paging regardless of mode.
    /// - `now`: Clock for reveal highlights.
    ///
    /// Output:
    /// - Mutates card flags and the button visibility; no return value.
    ///
    /// Details:
    /// - Reset condition: `force_reset` OR the mode changed since last call;
    ///   a reset restarts paging at [`INITIAL_VISIBLE`].
    /// - Narrow: only a reset (or the very first call) touches card flags,
    ///   so same-mode resizes leave an in-progress reveal alone.
    /// - Wide: every card becomes visible; cards that were hidden get a
    ///   highlight pulse, already-visible ones do not flash.
    /// - Empty card set degrades to a no-op.
    pub fn apply(&mut self, cards: &mut [Card], width: u16, force_reset: bool, now: Instant) {
        if cards.is_empty() {
            return;
        }
        let mode = LayoutMode::from_width(width, self.threshold);
        let reset = force_reset || mode != self.mode;
        if reset {
            self.mode = mode;
            self.shown = INITIAL_VISIBLE;
        }
        match mode {
            LayoutMode::Narrow => {
                if reset || !self.initialized {
                    for (idx, card) in cards.iter_mut().enumerate() {
                        if idx < self.shown {
                            card.show(None);
                        } else {
                            card.hide();
                        }
                    }
                }
            }
            LayoutMode::Wide => {
                for card in cards.iter_mut() {
                    if card.visible {
                        continue;
                    }
                    card.show(Some(now + REVEAL_PULSE));
                }
            }
        }
        self.initialized = true;
        self.update_button(cards, mode);
    }

    /// What: Reveal the next batch of cards.
    ///
    /// Inputs:
    /// - `cards`: Cards in catalog order, mutated in place.
    /// - `width`: Current terminal width (for button recomputation).
    /// - `now`: Clock for reveal highlights.
    ///
    /// Output:
    /// - Index of the first newly revealed card, or `None` when everything
    ///   was already visible (the button is hidden in that case).
    ///
    /// Details:
    /// - Batch size is `min(`[`REVEAL_BATCH`]`, remaining)`; the revealed
    ///   count never exceeds the card total.
    pub fn reveal_more(&mut self, cards: &mut [Card], width: u16, now: Instant) -> Option<usize> {
        if cards.is_empty() {
            return None;
        }
        let to_show = REVEAL_BATCH.min(cards.len().saturating_sub(self.shown));
        if to_show == 0 {
            self.button_visible = false;
            return None;
        }
        let first = self.shown;
        for card in &mut cards[first..first + to_show] {
            card.show(Some(now + REVEAL_PULSE));
        }
        self.shown += to_show;
        let mode = LayoutMode::from_width(width, self.threshold);
        self.update_button(cards, mode);
        Some(first)
    }

    /// Recompute whether the "Show more" affordance should render: narrow
    /// layout with at least one hidden card.
    fn update_button(&mut self, cards: &[Card], mode: LayoutMode) {
        self.button_visible = mode.is_narrow() && cards.iter().any(|c| !c.visible);
    }

    /// Current paging position (cards at index `< shown` are revealed).
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }

    /// Layout mode recorded at the last apply.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Whether the "Show more" affordance should render.
    #[must_use]
    pub const fn button_visible(&self) -> bool {
        self.button_visible
    }

    /// Whether an initial visibility pass has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}
