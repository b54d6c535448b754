use limelight_motion_core::{
    Change, Config, Engine, Inputs, MotionEvent, MotionValue, PointerEvent, TransformState,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

const DT: f32 = 1.0 / 60.0;

fn engine() -> Engine {
    Engine::new(Config::default())
}

fn pointer_inputs(events: Vec<PointerEvent>) -> Inputs {
    Inputs {
        viewport_events: vec![],
        pointer_events: events,
    }
}

fn transform_for(changes: &[Change], node: &str) -> TransformState {
    match changes
        .iter()
        .rev()
        .find(|c| c.node == node)
        .map(|c| &c.value)
    {
        Some(MotionValue::Transform(t)) => *t,
        other => panic!("expected transform for {node}, got {other:?}"),
    }
}

/// it should emit nothing pointer-related when the capability is disabled
#[test]
fn disabled_pointer_is_inert() {
    let mut cfg = Config::default();
    cfg.pointer.enabled = false;
    let mut eng = Engine::new(cfg);
    assert!(eng.pointer().is_none());

    let out = eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::Moved { x: 10.0, y: 10.0 }]),
    );
    assert!(out.changes.is_empty());
    assert!(out.events.is_empty());
}

/// it should place the dot on the raw position the frame a move arrives
#[test]
fn dot_tracks_raw_immediately() {
    let mut eng = engine();
    let out = eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::Moved { x: 200.0, y: 120.0 }]),
    );
    let dot = transform_for(&out.changes, "cursor.dot");
    // Centered: positions are for the top-left corner of an 8px dot.
    approx(dot.translate[0], 196.0, 1e-4);
    approx(dot.translate[1], 116.0, 1e-4);
}

/// it should converge the ring monotonically toward a held raw position
#[test]
fn smoothing_converges_monotonically() {
    let mut eng = engine();
    // Park the pointer somewhere first so there is real distance to cover.
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::EnteredWindow { x: 0.0, y: 0.0 }]),
    );
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::Moved { x: 300.0, y: 400.0 }]),
    );

    let dist = |eng: &Engine| -> f32 {
        let s = eng.pointer().unwrap().smoothed();
        ((300.0 - s[0]).powi(2) + (400.0 - s[1]).powi(2)).sqrt()
    };

    let mut prev = dist(&eng);
    for _ in 0..60 {
        eng.update(DT, Inputs::default());
        let d = dist(&eng);
        assert!(d < prev, "distance must strictly decrease ({d} >= {prev})");
        prev = d;
    }
    // Asymptotic: negligible but never bit-exact zero.
    assert!(prev < 0.1);
    assert!(prev > 0.0);
}

/// it should snap both parts on window re-entry instead of interpolating
#[test]
fn enter_window_snaps_both_parts() {
    let mut eng = engine();
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::Moved { x: 100.0, y: 100.0 }]),
    );
    for _ in 0..5 {
        eng.update(DT, Inputs::default());
    }

    // Blur at (100,100), then re-enter far away.
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::FocusChanged { has_focus: false }]),
    );
    let out = eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::EnteredWindow { x: 500.0, y: 300.0 }]),
    );

    let dot = transform_for(&out.changes, "cursor.dot");
    approx(dot.translate[0], 500.0 - 4.0, 1e-4);
    approx(dot.translate[1], 300.0 - 4.0, 1e-4);
    // Ring lands there too (the integrator moves it a hair closer to raw,
    // but raw == smoothed, so it stays put).
    let ring = transform_for(&out.changes, "cursor.ring");
    approx(ring.translate[0], 500.0 - 20.0, 1e-4);
    approx(ring.translate[1], 300.0 - 20.0, 1e-4);
    // Visibility restored without a fade.
    approx(ring.opacity, 1.0, 1e-6);
    approx(dot.opacity, 1.0, 1e-6);
}

/// it should fade out on blur and back in on focus without resetting the lag
#[test]
fn focus_fades_preserve_smoothed_position() {
    let mut eng = engine();
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::Moved { x: 300.0, y: 200.0 }]),
    );
    for _ in 0..3 {
        eng.update(DT, Inputs::default());
    }
    let before = eng.pointer().unwrap().smoothed();

    let out = eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::FocusChanged { has_focus: false }]),
    );
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, MotionEvent::PointerHidden)));

    // Fade completes over fade_duration (0.2s).
    let mut last = 1.0;
    for _ in 0..15 {
        let out = eng.update(DT, Inputs::default());
        let ring = transform_for(&out.changes, "cursor.ring");
        assert!(ring.opacity <= last + 1e-6);
        last = ring.opacity;
    }
    approx(last, 0.0, 1e-4);

    // Smoothed position survives the blur: it kept converging toward the
    // last raw position instead of resetting.
    let after = eng.pointer().unwrap().smoothed();
    assert!(after[0] >= before[0] && after[0] <= 300.0);
    assert!(after[1] >= before[1] && after[1] <= 200.0);
    let out = eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::FocusChanged { has_focus: true }]),
    );
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, MotionEvent::PointerShown)));
}

/// it should scale the ring up and fade the dot over interactive content,
/// and reverse on leave
#[test]
fn hover_affordance_tracks_interactive_set() {
    let mut eng = engine();
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::InteractiveNodesChanged {
            nodes: vec!["cta".into(), "card-0".into()],
        }]),
    );
    // Let the settle delay (0.2s) elapse.
    for _ in 0..15 {
        eng.update(DT, Inputs::default());
    }

    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::HoverChanged {
            node: Some("cta".into()),
        }]),
    );
    // Run the 0.3s affordance transition out.
    let mut out = eng.update(0.3, Inputs::default());
    let ring = transform_for(&out.changes, "cursor.ring");
    let dot = transform_for(&out.changes, "cursor.dot");
    approx(ring.scale, 2.5, 1e-4);
    approx(ring.opacity, 0.6, 1e-4);
    approx(dot.opacity, 0.0, 1e-4);

    // Leaving restores the resting affordance.
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::HoverChanged { node: None }]),
    );
    out = eng.update(0.3, Inputs::default());
    let ring = transform_for(&out.changes, "cursor.ring");
    let dot = transform_for(&out.changes, "cursor.dot");
    approx(ring.scale, 1.0, 1e-4);
    approx(ring.opacity, 1.0, 1e-4);
    approx(dot.opacity, 1.0, 1e-4);
}

/// it should ignore hover reports for nodes outside the interactive set
#[test]
fn non_interactive_hover_is_ignored() {
    let mut eng = engine();
    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::InteractiveNodesChanged {
            nodes: vec!["cta".into()],
        }]),
    );
    for _ in 0..15 {
        eng.update(DT, Inputs::default());
    }

    eng.update(
        DT,
        pointer_inputs(vec![PointerEvent::HoverChanged {
            node: Some("paragraph".into()),
        }]),
    );
    let out = eng.update(0.3, Inputs::default());
    let ring = transform_for(&out.changes, "cursor.ring");
    approx(ring.scale, 1.0, 1e-6);
    approx(ring.opacity, 1.0, 1e-6);
}
