#![allow(dead_code)]
//! Two-part pointer indicator: an immediate dot on the raw position and a
//! trailing ring that converges on it through a leaky integrator.
//!
//! The follower is process-wide state owned by the engine for its whole
//! lifetime; page mounts come and go around it. Only the interactive-node
//! set is route-dependent, and replacements for it settle after a short
//! grace period so the host can scan freshly rendered content once.

use hashbrown::HashSet;

use crate::config::PointerConfig;
use crate::ease::Ease;
use crate::inputs::PointerEvent;
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::tween::Tween;
use crate::value::{MotionValue, NodeHandle, TransformState};

/// A scalar that can be retargeted with a short tween, or snapped.
#[derive(Debug)]
struct Channel {
    current: f32,
    tween: Option<Tween<f32>>,
}

impl Channel {
    fn new(value: f32) -> Self {
        Self {
            current: value,
            tween: None,
        }
    }

    fn retarget(&mut self, to: f32, duration: f32) {
        self.tween = Some(Tween::new(self.current, to, 0.0, duration, Ease::CubicOut));
    }

    fn snap(&mut self, value: f32) {
        self.current = value;
        self.tween = None;
    }

    fn advance(&mut self, dt: f32) -> f32 {
        if let Some(tw) = self.tween.as_mut() {
            self.current = tw.advance(dt).value;
            if tw.is_done() {
                self.tween = None;
            }
        }
        self.current
    }
}

#[derive(Debug)]
pub struct PointerFollower {
    cfg: PointerConfig,
    raw: [f32; 2],
    smoothed: [f32; 2],
    visible: bool,
    hovering: bool,
    ring_scale: Channel,
    ring_opacity: Channel,
    dot_opacity: Channel,
    interactive: HashSet<NodeHandle>,
    /// Replacement set and its remaining settle time.
    pending_interactive: Option<(Vec<NodeHandle>, f32)>,
}

impl PointerFollower {
    pub fn new(cfg: PointerConfig) -> Self {
        // Parked offscreen until the first move event arrives.
        let start = [-100.0, -100.0];
        Self {
            cfg,
            raw: start,
            smoothed: start,
            visible: true,
            hovering: false,
            ring_scale: Channel::new(1.0),
            ring_opacity: Channel::new(1.0),
            dot_opacity: Channel::new(1.0),
            interactive: HashSet::new(),
            pending_interactive: None,
        }
    }

    #[inline]
    pub fn raw(&self) -> [f32; 2] {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> [f32; 2] {
        self.smoothed
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle_event(&mut self, event: &PointerEvent, out: &mut Outputs) {
        match event {
            PointerEvent::Moved { x, y } => {
                self.raw = [*x, *y];
            }
            PointerEvent::EnteredWindow { x, y } => {
                // Snap both parts: the pointer may re-enter far from where
                // it left, and the ring must not fly in across the window.
                self.raw = [*x, *y];
                self.smoothed = [*x, *y];
                self.visible = true;
                self.ring_opacity
                    .snap(if self.hovering { self.cfg.hover_ring_opacity } else { 1.0 });
                self.dot_opacity.snap(if self.hovering { 0.0 } else { 1.0 });
            }
            PointerEvent::FocusChanged { has_focus } => {
                if *has_focus == self.visible {
                    return;
                }
                self.visible = *has_focus;
                if *has_focus {
                    self.ring_opacity.retarget(
                        if self.hovering { self.cfg.hover_ring_opacity } else { 1.0 },
                        self.cfg.fade_duration,
                    );
                    self.dot_opacity
                        .retarget(if self.hovering { 0.0 } else { 1.0 }, self.cfg.fade_duration);
                    out.push_event(MotionEvent::PointerShown);
                } else {
                    self.ring_opacity.retarget(0.0, self.cfg.fade_duration);
                    self.dot_opacity.retarget(0.0, self.cfg.fade_duration);
                    out.push_event(MotionEvent::PointerHidden);
                }
            }
            PointerEvent::HoverChanged { node } => {
                let hovering = node
                    .as_ref()
                    .is_some_and(|n| self.interactive.contains(n));
                if hovering == self.hovering {
                    return;
                }
                self.hovering = hovering;
                if hovering {
                    self.ring_scale
                        .retarget(self.cfg.hover_ring_scale, self.cfg.hover_duration);
                    if self.visible {
                        self.ring_opacity
                            .retarget(self.cfg.hover_ring_opacity, self.cfg.hover_duration);
                        self.dot_opacity.retarget(0.0, self.cfg.hover_duration);
                    }
                } else {
                    self.ring_scale.retarget(1.0, self.cfg.hover_duration);
                    if self.visible {
                        self.ring_opacity.retarget(1.0, self.cfg.hover_duration);
                        self.dot_opacity.retarget(1.0, self.cfg.hover_duration);
                    }
                }
            }
            PointerEvent::InteractiveNodesChanged { nodes } => {
                self.pending_interactive = Some((nodes.clone(), self.cfg.settle_delay));
            }
        }
    }

    /// Per-frame step: settle pending interactive sets, advance the fade and
    /// hover channels, converge the ring, and emit both parts' transforms.
    pub fn tick(&mut self, dt: f32, out: &mut Outputs) {
        if let Some((nodes, remaining)) = self.pending_interactive.take() {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.interactive = nodes.into_iter().collect();
            } else {
                self.pending_interactive = Some((nodes, remaining));
            }
        }

        let ring_scale = self.ring_scale.advance(dt);
        let ring_opacity = self.ring_opacity.advance(dt);
        let dot_opacity = self.dot_opacity.advance(dt);

        // Leaky integrator: converges asymptotically, never reaches raw.
        let k = self.cfg.smoothing_factor;
        self.smoothed[0] += (self.raw[0] - self.smoothed[0]) * k;
        self.smoothed[1] += (self.raw[1] - self.smoothed[1]) * k;

        let half_dot = self.cfg.dot_size * 0.5;
        out.push_change(Change {
            node: self.cfg.dot_node.clone(),
            value: MotionValue::Transform(TransformState {
                translate: [self.raw[0] - half_dot, self.raw[1] - half_dot],
                scale: 1.0,
                opacity: dot_opacity,
            }),
        });

        let half_ring = self.cfg.ring_size * 0.5;
        out.push_change(Change {
            node: self.cfg.ring_node.clone(),
            value: MotionValue::Transform(TransformState {
                translate: [
                    self.smoothed[0] - half_ring,
                    self.smoothed[1] - half_ring,
                ],
                scale: ring_scale,
                opacity: ring_opacity,
            }),
        });
    }
}
