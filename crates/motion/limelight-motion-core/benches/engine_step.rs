use criterion::{black_box, criterion_group, criterion_main, Criterion};

use limelight_motion_core::{
    Config, Engine, InitialState, Inputs, PageData, PointerEvent, TargetDecl, Trigger,
    ViewportEvent,
};

fn busy_page() -> PageData {
    let mut targets = Vec::new();
    for i in 0..8 {
        targets.push(TargetDecl::Entrance {
            node: format!("section-{i}"),
            trigger: Trigger::Viewport { threshold: 0.8 },
            from: InitialState {
                dx: 0.0,
                dy: 60.0,
                opacity: 0.0,
            },
            duration: 0.8,
            ease: limelight_motion_core::Ease::QuartOut,
            delay: 0.0,
        });
    }
    targets.push(TargetDecl::Stagger {
        group: "cards".into(),
        members: (0..8).map(|i| format!("card-{i}")).collect(),
        watch: Some("grid".into()),
        trigger: Trigger::Viewport { threshold: 0.8 },
        from: InitialState {
            dx: 0.0,
            dy: 80.0,
            opacity: 0.0,
        },
        duration: 0.8,
        ease: limelight_motion_core::Ease::CubicOut,
        delay: 0.0,
        interval: 0.15,
    });
    for i in 0..6 {
        targets.push(TargetDecl::Parallax {
            node: format!("img-{i}"),
            max_shift: -8.0,
        });
    }
    PageData {
        name: "bench".into(),
        root: "page".into(),
        fade: None,
        targets,
    }
}

fn bench_update(c: &mut Criterion) {
    c.bench_function("engine_step_busy_frame", |b| {
        let mut eng = Engine::new(Config::default());
        eng.register_page(busy_page()).unwrap();
        let crossings: Vec<ViewportEvent> = eng
            .watcher_rows()
            .iter()
            .map(|r| ViewportEvent::ThresholdCrossed { watcher: r.id })
            .collect();
        let scrolls: Vec<ViewportEvent> = eng
            .watcher_rows()
            .iter()
            .map(|r| ViewportEvent::ScrollProgress {
                watcher: r.id,
                progress: 0.5,
            })
            .collect();
        eng.update(
            0.0,
            Inputs {
                viewport_events: crossings,
                pointer_events: vec![],
            },
        );

        let mut x = 0.0f32;
        b.iter(|| {
            x += 1.0;
            let inputs = Inputs {
                viewport_events: scrolls.clone(),
                pointer_events: vec![PointerEvent::Moved { x, y: x * 0.5 }],
            };
            let out = eng.update(1.0 / 60.0, inputs);
            black_box(out.changes.len());
        });
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
