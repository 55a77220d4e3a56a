//! Tests for scheduling primitives and text/time helpers.

use std::time::{Duration, Instant};

use super::sched::{Debounce, FrameGate, ScrollAnim};
use super::{clamp01, format_epoch_seconds, truncate_to_width};

#[test]
/// What: A debounce burst fires exactly once, at the trailing edge.
///
/// Inputs:
/// - Three rapid `arm` calls, then samples before and after the deadline.
///
/// Output:
/// - `ready` stays `false` until the delay elapses after the LAST arm, fires
///   `true` once, then stays `false`.
///
/// Details:
/// - Re-arming must replace the earlier deadline, not queue a second fire.
fn debounce_fires_once_on_trailing_edge() {
    let start = Instant::now();
    let mut d = Debounce::new(Duration::from_millis(150));
    d.arm(start);
    d.arm(start + Duration::from_millis(50));
    d.arm(start + Duration::from_millis(100));
    assert!(!d.ready(start + Duration::from_millis(200)));
    assert!(d.pending());
    assert!(d.ready(start + Duration::from_millis(250)));
    assert!(!d.ready(start + Duration::from_millis(300)));
    assert!(!d.pending());
}

#[test]
/// What: Cancel clears a pending debounce without firing.
fn debounce_cancel_suppresses_fire() {
    let start = Instant::now();
    let mut d = Debounce::new(Duration::from_millis(100));
    d.arm(start);
    d.cancel();
    assert!(!d.ready(start + Duration::from_secs(1)));
}

#[test]
/// What: The frame gate coalesces any number of requests into one take.
fn frame_gate_is_single_flight() {
    let mut g = FrameGate::new();
    assert!(!g.take());
    g.request();
    g.request();
    g.request();
    assert!(g.pending());
    assert!(g.take());
    assert!(!g.take());
}

#[test]
/// What: A scroll animation starts at the origin, ends exactly on the
/// target, and reports idle afterwards.
///
/// Inputs:
/// - Animation from 0 to 100 over 200ms, sampled mid-flight and past the end.
///
/// Output:
/// - Mid samples are strictly between the endpoints and monotone; the final
///   sample is exactly the target; the next sample is `None`.
fn scroll_anim_eases_to_target() {
    let start = Instant::now();
    let mut a = ScrollAnim::new(Duration::from_millis(200));
    a.start(0.0, 100.0, start);
    let mid1 = a.sample(start + Duration::from_millis(50)).expect("active");
    let mid2 = a.sample(start + Duration::from_millis(150)).expect("active");
    assert!(mid1 > 0.0 && mid1 < 100.0);
    assert!(mid2 > mid1, "easing must be monotone: {mid1} -> {mid2}");
    assert_eq!(a.sample(start + Duration::from_millis(250)), Some(100.0));
    assert_eq!(a.sample(start + Duration::from_millis(300)), None);
    assert!(!a.active());
}

#[test]
/// What: Cancelling an animation stops further samples immediately.
fn scroll_anim_cancel_stops_sampling() {
    let start = Instant::now();
    let mut a = ScrollAnim::new(Duration::from_millis(200));
    a.start(0.0, 50.0, start);
    a.cancel();
    assert_eq!(a.sample(start + Duration::from_millis(100)), None);
}

#[test]
fn clamp01_bounds_and_rejects_nan() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f64::NAN), 0.0);
}

#[test]
fn truncate_respects_display_width() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("a longer name", 8), "a longe…");
    // Wide glyphs count double.
    assert_eq!(truncate_to_width("抹茶セット", 5), "抹茶…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn epoch_formatting_handles_leap_years() {
    assert_eq!(format_epoch_seconds(0), "1970-01-01 00:00:00");
    // 2024-02-29T12:30:45Z
    assert_eq!(format_epoch_seconds(1_709_209_845), "2024-02-29 12:30:45");
    assert_eq!(format_epoch_seconds(-5), "-5");
}
