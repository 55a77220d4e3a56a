//! Synthetic scrollbar for the featured strip.
//!
//! The strip scrolls natively (wheel, animations); this controller mirrors
//! that scroll position onto a thumb/track pair and accepts click and drag
//! input on the synthetic control to drive the real offset. Geometry is
//! recomputed at most once per rendered frame through a single-flight gate,
//! however many scroll or resize events arrive in between.

use crate::state::app_state::Rect4;
use crate::state::types::{DragState, ScrollMetrics};
use crate::util::sched::FrameGate;

/// Controller mirroring strip scroll state onto the synthetic scrollbar.
///
/// Attaches inert when the strip is absent: every operation and handler
/// degrades to a no-op, and rendering shows nothing. [`Self::dispose`]
/// returns the controller to that inert state, cancelling pending work, so
/// subsequent events produce no further writes.
#[derive(Debug)]
pub struct ScrollbarController {
    /// Whether the controller is wired to a live strip.
    active: bool,
    /// Column threshold below which the scrollbar always hides.
    threshold: u16,
    /// Thumb drag flag, armed between pointer-down and pointer-up.
    drag: DragState,
    /// Whether the pointer is inside the scrollbar region.
    hover: bool,
    /// Single-flight gate for geometry recomputation.
    gate: FrameGate,
    /// Whether the scrollbar renders at all (wide layout + overflow).
    visible: bool,
    /// Thumb width as a percentage of the track.
    thumb_width_pct: f64,
    /// Thumb left edge as a percentage of the track.
    thumb_left_pct: f64,
}

impl ScrollbarController {
    /// What: Attach the controller to the featured strip.
    ///
    /// Inputs:
    /// - `strip_present`: Whether the strip exists at all (enabled and
    ///   non-empty catalog).
    /// - `threshold`: Column threshold for the narrow layout.
    ///
    /// Output:
    /// - A live controller with one geometry pass already queued, or an
    ///   inert one when the strip is missing.
    #[must_use]
    pub fn attach(strip_present: bool, threshold: u16) -> Self {
        let mut gate = FrameGate::new();
        if strip_present {
            // Immediate refresh on attach, consumed by the first frame.
            gate.request();
        }
        Self {
            active: strip_present,
            threshold,
            drag: DragState::default(),
            hover: false,
            gate,
            visible: false,
            thumb_width_pct: 100.0,
            thumb_left_pct: 0.0,
        }
    }

    /// Detach: cancel pending geometry work and deactivate every handler
    /// path. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        self.gate.cancel();
        self.drag.dragging = false;
        self.hover = false;
        self.visible = false;
        self.active = false;
    }

    /// Whether the controller is wired to a live strip.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Queue a geometry recomputation for the next frame. Idempotent.
    pub fn refresh(&mut self) {
        if self.active {
            self.gate.request();
        }
    }

    /// Whether a geometry recomputation is queued.
    #[must_use]
    pub const fn frame_due(&self) -> bool {
        self.gate.pending()
    }

    /// What: Consume the frame gate and recompute thumb geometry.
    ///
    /// Inputs:
    /// - `metrics`: Current strip scroll model.
    /// - `width`: Terminal width in columns.
    ///
    /// Output:
    /// - `true` when geometry was recomputed this frame.
    ///
    /// Details:
    /// - Visibility: shown only when `width >= threshold` and the content
    ///   overflows the viewport.
    /// - `thumb_width_pct = viewport / content * 100`; with
    ///   `max = content - viewport`, the left edge is
    ///   `offset / max * (100 - thumb_width_pct)`, or `0` when nothing
    ///   scrolls.
    pub fn take_frame(&mut self, metrics: &ScrollMetrics, width: u16) -> bool {
        if !self.active || !self.gate.take() {
            return false;
        }
        self.visible = width >= self.threshold && metrics.overflows();
        let content = f64::from(metrics.content_width);
        self.thumb_width_pct = if content > 0.0 {
            (f64::from(metrics.viewport_width) / content * 100.0).min(100.0)
        } else {
            100.0
        };
        let max = metrics.max_scroll();
        self.thumb_left_pct = if max > 0.0 {
            metrics.offset / max * (100.0 - self.thumb_width_pct)
        } else {
            0.0
        };
        true
    }

    /// Jump the strip to a fraction of its scrollable range (clamped), then
    /// queue a geometry update.
    pub fn scroll_to_fraction(&mut self, metrics: &mut ScrollMetrics, f: f64) {
        if !self.active {
            return;
        }
        metrics.set_fraction(f);
        self.gate.request();
    }

    /// Arm the thumb drag. Pointer movement anywhere now drives the offset
    /// until [`Self::end_drag`].
    pub fn begin_drag(&mut self) {
        if self.active {
            self.drag.dragging = true;
        }
    }

    /// Disarm the thumb drag.
    pub fn end_drag(&mut self) {
        self.drag.dragging = false;
    }

    /// Whether a thumb drag is in progress.
    #[must_use]
    pub const fn dragging(&self) -> bool {
        self.drag.dragging
    }

    /// What: Drive the offset from a pointer position during a drag.
    ///
    /// Inputs:
    /// - `metrics`: Strip scroll model, written directly (no animation, so
    ///   the thumb tracks the pointer exactly).
    /// - `track`: Track rectangle from the last frame.
    /// - `column`: Pointer column; clamped into the track bounds.
    ///
    /// Output:
    /// - `true` when the offset was written (drag armed on a live strip).
    pub fn drag_to(&mut self, metrics: &mut ScrollMetrics, track: Rect4, column: u16) -> bool {
        if !self.active || !self.drag.dragging {
            return false;
        }
        metrics.set_fraction(Self::track_fraction(track, column));
        self.gate.request();
        true
    }

    /// Record whether the pointer is inside the scrollbar region; returns
    /// `true` on an enter/leave transition.
    pub fn set_hover(&mut self, over: bool) -> bool {
        if !self.active {
            return false;
        }
        let changed = self.hover != over;
        self.hover = over;
        changed
    }

    /// Whether the pointer is inside the scrollbar region.
    #[must_use]
    pub const fn hovered(&self) -> bool {
        self.hover
    }

    /// Whether the scrollbar renders (wide layout and overflowing content).
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Thumb width as a percentage of the track.
    #[must_use]
    pub const fn thumb_width_pct(&self) -> f64 {
        self.thumb_width_pct
    }

    /// Thumb left edge as a percentage of the track.
    #[must_use]
    pub const fn thumb_left_pct(&self) -> f64 {
        self.thumb_left_pct
    }

    /// Fraction of the track a pointer column corresponds to, clamped to
    /// `[0, 1]`. Zero-width tracks yield `0`.
    #[must_use]
    pub fn track_fraction(track: Rect4, column: u16) -> f64 {
        let (x, _, w, _) = track;
        if w == 0 {
            return 0.0;
        }
        crate::util::clamp01((f64::from(column) - f64::from(x)) / f64::from(w))
    }

    /// What: Project the thumb percentages onto a track of `track_width`
    /// cells.
    ///
    /// Inputs:
    /// - `track_width`: Inner track width in cells.
    ///
    /// Output:
    /// - `(offset, width)` of the thumb in cells; width is at least one cell
    ///   so the thumb never vanishes, and the pair never exceeds the track.
    #[must_use]
    pub fn thumb_cells(&self, track_width: u16) -> (u16, u16) {
        if track_width == 0 {
            return (0, 0);
        }
        let tw = f64::from(track_width);
        let width = cells(self.thumb_width_pct / 100.0 * tw).clamp(1, track_width);
        let offset = cells(self.thumb_left_pct / 100.0 * tw).min(track_width - width);
        (offset, width)
    }
}

/// Round a non-negative cell count, saturating into `u16`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cells(v: f64) -> u16 {
    if v <= 0.0 {
        0
    } else if v >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        v.round() as u16
    }
}
