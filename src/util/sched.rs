//! Scheduling primitives for coalescing bursts of UI work.
//!
//! Three small abstractions cover every timing concern in the app:
//!
//! - [`Debounce`]: a trailing-edge timer for rate-limiting resize handling.
//! - [`FrameGate`]: a single-flight gate so at most one visual recomputation
//!   happens per rendered frame, however many events arrived in between.
//! - [`ScrollAnim`]: an eased interpolation between two scroll offsets,
//!   sampled from the runtime tick.
//!
//! All three are plain state machines driven by caller-provided [`Instant`]s,
//! which keeps them trivial to test and free of background tasks. The
//! runtime's periodic tick is the only clock source.

use std::time::{Duration, Instant};

/// Trailing-edge debounce timer.
///
/// `arm` pushes the deadline out by the configured delay; `ready` reports
/// (and consumes) an expired deadline. Re-arming before expiry replaces the
/// deadline, so only the last event in a burst fires.
#[derive(Debug)]
pub struct Debounce {
    /// Fixed delay applied on every arm.
    delay: Duration,
    /// Pending deadline, if armed.
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debouncer with a fixed trailing delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer at `now + delay`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether a deadline is currently pending.
    #[must_use]
    pub const fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// What: Consume an expired deadline.
    ///
    /// Inputs:
    /// - `now`: Current instant, normally the runtime tick time.
    ///
    /// Output:
    /// - `true` exactly once per armed burst, when the deadline has passed.
    ///
    /// Details:
    /// - Returns `false` while unarmed or still waiting; the deadline is
    ///   cleared on the firing call so the next burst starts fresh.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Single-flight gate mirroring a per-frame animation callback.
///
/// Many events may request a visual update between two frames; the draw loop
/// consumes the gate once, performing a single recomputation.
#[derive(Debug, Default)]
pub struct FrameGate {
    /// Whether an update has been requested since the last frame.
    pending: bool,
}

impl FrameGate {
    /// Create an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Request an update; idempotent while one is already pending.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Consume the pending request, returning whether one was queued.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Whether an update is queued for the next frame.
    #[must_use]
    pub const fn pending(&self) -> bool {
        self.pending
    }

    /// Drop a pending request without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

/// In-flight interpolation between two scroll offsets.
#[derive(Debug, Clone, Copy)]
struct AnimSpan {
    /// Offset at animation start.
    from: f64,
    /// Target offset.
    to: f64,
    /// When the animation started.
    started: Instant,
}

/// Eased scroll animation sampled on the runtime tick.
///
/// Uses a cubic ease-out so jumps decelerate into their target instead of
/// teleporting. Direct writes (thumb dragging) should call
/// [`ScrollAnim::cancel`] first so the animation does not fight the pointer.
#[derive(Debug)]
pub struct ScrollAnim {
    /// Total animation duration.
    duration: Duration,
    /// Current animation, if any.
    span: Option<AnimSpan>,
}

impl ScrollAnim {
    /// Create an idle animation with a fixed duration per jump.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            span: None,
        }
    }

    /// Begin animating from `from` to `to`, replacing any animation in flight.
    pub fn start(&mut self, from: f64, to: f64, now: Instant) {
        if self.duration.is_zero() || (from - to).abs() < f64::EPSILON {
            // Degenerate spans complete immediately on the next sample.
            self.span = Some(AnimSpan {
                from: to,
                to,
                started: now,
            });
            return;
        }
        self.span = Some(AnimSpan { from, to, started: now });
    }

    /// What: Sample the animation at `now`.
    ///
    /// Inputs:
    /// - `now`: Current instant, normally the runtime tick time.
    ///
    /// Output:
    /// - `Some(offset)` while animating (the final sample lands exactly on
    ///   the target); `None` when idle.
    ///
    /// Details:
    /// - The span clears itself once the duration has elapsed, so the caller
    ///   sees the target value exactly once and then `None`.
    pub fn sample(&mut self, now: Instant) -> Option<f64> {
        let span = self.span?;
        let elapsed = now.saturating_duration_since(span.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.span = None;
            return Some(span.to);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        Some(span.to.mul_add(eased, span.from * (1.0 - eased)))
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.span.is_some()
    }

    /// Abandon any animation in flight, leaving the offset wherever the last
    /// sample put it.
    pub fn cancel(&mut self) {
        self.span = None;
    }
}
