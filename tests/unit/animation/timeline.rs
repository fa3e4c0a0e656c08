use super::*;

#[test]
fn timeline_reports_completion_exactly_once() {
    let mut t = Timeline::new(1.0, Ease::Linear);
    assert!(!t.advance(0.4));
    assert!(!t.advance(0.4));
    assert!(t.advance(0.4));
    assert!(!t.advance(0.4));
    assert!(t.is_finished());
    assert_eq!(t.progress(), 1.0);
}

#[test]
fn zero_duration_timeline_is_immediately_at_one() {
    let mut t = Timeline::new(0.0, Ease::InOutQuad);
    assert_eq!(t.progress(), 1.0);
    assert!(t.advance(0.016));
}

#[test]
fn eased_progress_tracks_elapsed_time() {
    let mut t = Timeline::new(2.0, Ease::Linear);
    t.advance(0.5);
    assert!((t.progress() - 0.25).abs() < 1e-12);
    assert!((t.raw_progress() - 0.25).abs() < 1e-12);
}

#[test]
fn breathing_oscillates_within_scale_bounds() {
    let mut b = BreathingTimeline::new(1.0);
    assert_eq!(b.scale(), BREATH_SCALE_MIN);
    b.advance(0.5);
    assert!((b.scale() - 1.05).abs() < 1e-9);
    b.advance(0.5);
    assert!((b.scale() - BREATH_SCALE_MAX).abs() < 1e-9);
    for _ in 0..100 {
        b.advance(0.137);
        assert!(b.scale() >= BREATH_SCALE_MIN - 1e-9);
        assert!(b.scale() <= BREATH_SCALE_MAX + 1e-9);
    }
}

#[test]
fn breathing_reports_each_peak_descent() {
    let mut b = BreathingTimeline::new(1.0);
    assert!(!b.advance(0.9)); // still rising
    assert!(b.advance(0.2)); // crossed the peak at t=1.0
    assert!(!b.advance(0.5)); // descending
    assert!(!b.advance(0.5)); // crossed the trough at t=2.0
    assert!(b.advance(1.0)); // crossed the next peak at t=3.0
}

#[test]
fn breathing_peak_survives_a_large_tick() {
    let mut b = BreathingTimeline::new(0.1);
    // One giant dt rolls over several full waves; the peak must not be lost.
    assert!(b.advance(1.0));
}

#[test]
fn ripple_expands_and_fades_to_zero() {
    let mut r = RippleTimeline::new(0.5);
    assert!(!r.is_active());
    r.restart();
    assert!(r.is_active());
    assert_eq!(r.scale(), RIPPLE_SCALE_START);
    assert!((r.alpha() - 1.0).abs() < 1e-9);

    r.advance(0.25);
    assert!((r.scale() - 1.35).abs() < 1e-9);
    assert!((r.alpha() - 0.5).abs() < 1e-9);

    r.advance(0.25);
    assert!(!r.is_active());
    assert!((r.scale() - RIPPLE_SCALE_END).abs() < 1e-9);
    assert_eq!(r.alpha(), 0.0);
}

#[test]
fn ripple_alpha_never_goes_negative() {
    let mut r = RippleTimeline::new(0.5);
    r.restart();
    r.advance(10.0);
    assert_eq!(r.alpha(), 0.0);
    assert!(r.alpha() >= 0.0);
    assert!(r.alpha() <= 1.0);
}

#[test]
fn ripple_restart_rewinds_a_finished_shot() {
    let mut r = RippleTimeline::new(0.5);
    r.restart();
    r.advance(1.0);
    assert!(!r.is_active());
    r.restart();
    assert!(r.is_active());
    assert_eq!(r.scale(), RIPPLE_SCALE_START);
}
