#![allow(dead_code)]
//! Engine: page registration/disposal and the per-frame step.
//!
//! Methods:
//! - new, register_page, dispose_page, update (drain events -> advance
//!   tweens -> parallax -> pointer tick)
//!
//! Everything runs on the host's single event loop: hosts report events
//! through [`Inputs`] and call update once per frame; the engine owns no
//! clocks and never blocks. Runtime stepping is fail-soft throughout:
//! events naming released watchers or disposed pages are dropped silently,
//! and a target whose watcher never fires simply stays at its resting
//! state.

use hashbrown::HashMap;

use crate::config::Config;
use crate::data::{PageData, PageDataError, TargetDecl, Trigger};
use crate::ease::{lerp, Ease};
use crate::ids::{IdAllocator, PageId, TargetId, WatcherId};
use crate::inputs::{Inputs, ViewportEvent};
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::pointer::PointerFollower;
use crate::tween::Tween;
use crate::value::{MotionValue, NodeHandle, TransformState};
use crate::watch::{WatchKind, WatcherRow, WatcherTable};

#[derive(Debug)]
struct PageRt {
    id: PageId,
    name: String,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum TargetKind {
    EntranceReveal,
    StaggerMember,
    ParallaxScroll,
}

#[derive(Debug)]
struct TargetRt {
    id: TargetId,
    page: PageId,
    node: NodeHandle,
    kind: TargetKind,
    from: TransformState,
    duration: f32,
    ease: Ease,
    /// Absolute start delay after the trigger, stagger offset included.
    delay: f32,
    /// Parallax travel in percent of element height.
    max_shift: f32,
    watcher: Option<WatcherId>,
    /// Set exactly once, when the entrance tween completes. Never reverts
    /// while the page stays mounted.
    played: bool,
}

#[derive(Debug)]
struct RunningTween {
    page: PageId,
    /// None for the page fade, which has no replay state to track.
    target: Option<TargetId>,
    node: NodeHandle,
    tween: Tween<TransformState>,
}

#[derive(Copy, Clone, Debug)]
struct ScrollState {
    progress: f32,
    dirty: bool,
}

/// The reveal scheduler plus the pointer follower, stepped together.
#[derive(Debug)]
pub struct Engine {
    ids: IdAllocator,
    pages: Vec<PageRt>,
    targets: Vec<TargetRt>,
    watchers: WatcherTable,
    tweens: Vec<RunningTween>,
    /// Latest reported scroll progress per parallax target; rapid reports
    /// coalesce to one transform per frame.
    scroll: HashMap<TargetId, ScrollState>,
    pointer: Option<PointerFollower>,
    /// Events raised between updates (registration, disposal), delivered
    /// with the next frame's outputs.
    pending_events: Vec<MotionEvent>,
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config. The pointer follower
    /// exists only if the host enabled the capability.
    pub fn new(cfg: Config) -> Self {
        let pointer = cfg
            .pointer
            .enabled
            .then(|| PointerFollower::new(cfg.pointer.clone()));
        Self {
            ids: IdAllocator::new(),
            pages: Vec::new(),
            targets: Vec::with_capacity(cfg.target_capacity),
            watchers: WatcherTable::new(),
            tweens: Vec::new(),
            scroll: HashMap::new(),
            pointer,
            pending_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    /// Register a page's target list, arming watchers for viewport-gated
    /// entrances and parallax containers and starting on-register reveals
    /// (and the page fade) immediately. Returns the page id, which doubles
    /// as the disposer handle.
    pub fn register_page(&mut self, data: PageData) -> Result<PageId, PageDataError> {
        data.validate_basic()?;
        let pid = self.ids.alloc_page();
        log::debug!("register page '{}' ({} targets)", data.name, data.targets.len());

        if let Some(fade) = data.fade {
            self.tweens.push(RunningTween {
                page: pid,
                target: None,
                node: data.root.clone(),
                tween: Tween::new(
                    TransformState {
                        translate: [0.0, 0.0],
                        scale: 1.0,
                        opacity: 0.0,
                    },
                    TransformState::identity(),
                    0.0,
                    fade.duration,
                    fade.ease,
                ),
            });
        }

        for decl in data.targets {
            match decl {
                TargetDecl::Entrance {
                    node,
                    trigger,
                    from,
                    duration,
                    ease,
                    delay,
                } => {
                    let tid = self.ids.alloc_target();
                    let watcher = self.arm_intersection(pid, &node, trigger);
                    self.targets.push(TargetRt {
                        id: tid,
                        page: pid,
                        node,
                        kind: TargetKind::EntranceReveal,
                        from: initial_transform(from.dx, from.dy, from.opacity),
                        duration,
                        ease,
                        delay,
                        max_shift: 0.0,
                        watcher,
                        played: false,
                    });
                    if watcher.is_none() {
                        self.spawn_reveal(self.targets.len() - 1);
                    }
                }
                TargetDecl::Stagger {
                    members,
                    watch,
                    trigger,
                    from,
                    duration,
                    ease,
                    delay,
                    interval,
                    ..
                } => {
                    let watch_node = watch.unwrap_or_else(|| members[0].clone());
                    let watcher = self.arm_intersection(pid, &watch_node, trigger);
                    for (i, member) in members.into_iter().enumerate() {
                        let tid = self.ids.alloc_target();
                        self.targets.push(TargetRt {
                            id: tid,
                            page: pid,
                            node: member,
                            kind: TargetKind::StaggerMember,
                            from: initial_transform(from.dx, from.dy, from.opacity),
                            duration,
                            ease,
                            delay: delay + i as f32 * interval,
                            max_shift: 0.0,
                            watcher,
                            played: false,
                        });
                        if watcher.is_none() {
                            self.spawn_reveal(self.targets.len() - 1);
                        }
                    }
                }
                TargetDecl::Parallax { node, max_shift } => {
                    let tid = self.ids.alloc_target();
                    let wid = self.ids.alloc_watcher();
                    self.watchers.arm(WatcherRow {
                        id: wid,
                        page: pid,
                        node: node.clone(),
                        kind: WatchKind::ScrollProgress,
                    });
                    self.targets.push(TargetRt {
                        id: tid,
                        page: pid,
                        node,
                        kind: TargetKind::ParallaxScroll,
                        from: TransformState::identity(),
                        duration: 0.0,
                        ease: Ease::Linear,
                        delay: 0.0,
                        max_shift,
                        watcher: Some(wid),
                        played: false,
                    });
                }
            }
        }

        self.pages.push(PageRt {
            id: pid,
            name: data.name,
        });
        self.pending_events
            .push(MotionEvent::PageRegistered { page: pid });
        Ok(pid)
    }

    /// Cancel the page's pending and running entrance tweens and release
    /// its watchers, atomically. Later events naming the released watchers
    /// are dropped. Idempotent; unknown ids are a no-op.
    pub fn dispose_page(&mut self, page: PageId) {
        let Some(idx) = self.pages.iter().position(|p| p.id == page) else {
            return;
        };
        log::debug!("dispose page '{}'", self.pages[idx].name);

        self.tweens.retain(|t| t.page != page);
        self.watchers.release_page(page);
        let released: Vec<TargetId> = self
            .targets
            .iter()
            .filter(|t| t.page == page)
            .map(|t| t.id)
            .collect();
        for tid in &released {
            self.scroll.remove(tid);
        }
        self.targets.retain(|t| t.page != page);
        self.pages.remove(idx);
        self.pending_events
            .push(MotionEvent::PageDisposed { page });
    }

    /// Live observation requests for hosts to service.
    pub fn watcher_rows(&self) -> &[WatcherRow] {
        self.watchers.rows()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Running (or delay-pending) tween count, page fades included.
    pub fn active_tween_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn pointer(&self) -> Option<&PointerFollower> {
        self.pointer.as_ref()
    }

    /// Whether the named entrance target has completed its reveal.
    pub fn target_played(&self, node: &str) -> Option<bool> {
        self.targets
            .iter()
            .find(|t| t.node == node && t.kind != TargetKind::ParallaxScroll)
            .map(|t| t.played)
    }

    /// Step the engine by dt with the frame's events, producing outputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        let mut pending = std::mem::take(&mut self.pending_events);
        self.outputs.events.append(&mut pending);

        // 1) Viewport events, in arrival order.
        for ev in &inputs.viewport_events {
            match ev {
                ViewportEvent::ThresholdCrossed { watcher } => {
                    if self.watchers.get(*watcher).is_none() {
                        continue; // stale: page already disposed
                    }
                    let hits: Vec<usize> = self
                        .targets
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| {
                            t.watcher == Some(*watcher)
                                && t.kind != TargetKind::ParallaxScroll
                                && !t.played
                        })
                        .map(|(i, _)| i)
                        .collect();
                    for i in hits {
                        if !self.is_armed(self.targets[i].id) {
                            self.spawn_reveal(i);
                        }
                    }
                }
                ViewportEvent::ScrollProgress { watcher, progress } => {
                    if !progress.is_finite() {
                        continue;
                    }
                    let Some(row) = self.watchers.get(*watcher) else {
                        continue;
                    };
                    if row.kind != WatchKind::ScrollProgress {
                        continue;
                    }
                    if let Some(t) = self
                        .targets
                        .iter()
                        .find(|t| t.watcher == Some(*watcher))
                    {
                        self.scroll.insert(
                            t.id,
                            ScrollState {
                                progress: progress.clamp(0.0, 1.0),
                                dirty: true,
                            },
                        );
                    }
                }
            }
        }

        // 2) Pointer events.
        if let Some(ptr) = self.pointer.as_mut() {
            for ev in &inputs.pointer_events {
                ptr.handle_event(ev, &mut self.outputs);
            }
        }

        // 3) Advance entrance tweens. A tween holds its from-state through
        // its stagger delay, so grouped members sit at their initial state
        // until their own start time.
        let mut completed: Vec<TargetId> = Vec::new();
        for rt in &mut self.tweens {
            let step = rt.tween.advance(dt);
            if step.started {
                self.outputs.events.push(MotionEvent::RevealStarted {
                    node: rt.node.clone(),
                });
            }
            self.outputs.changes.push(Change {
                node: rt.node.clone(),
                value: MotionValue::Transform(step.value),
            });
            if step.finished {
                self.outputs.events.push(MotionEvent::RevealCompleted {
                    node: rt.node.clone(),
                });
                if let Some(tid) = rt.target {
                    completed.push(tid);
                }
            }
        }
        self.tweens.retain(|t| !t.tween.is_done());
        for tid in completed {
            if let Some(t) = self.targets.iter_mut().find(|t| t.id == tid) {
                t.played = true;
            }
        }

        // 4) Parallax: emit for targets whose progress changed this frame.
        for (tid, st) in self.scroll.iter_mut() {
            if !st.dirty {
                continue;
            }
            st.dirty = false;
            if let Some(t) = self.targets.iter().find(|t| t.id == *tid) {
                self.outputs.changes.push(Change {
                    node: t.node.clone(),
                    value: MotionValue::ParallaxShift(lerp(0.0, t.max_shift, st.progress)),
                });
            }
        }

        // 5) Pointer per-frame tick.
        if let Some(ptr) = self.pointer.as_mut() {
            ptr.tick(dt, &mut self.outputs);
        }

        &self.outputs
    }

    fn arm_intersection(
        &mut self,
        page: PageId,
        node: &str,
        trigger: Trigger,
    ) -> Option<WatcherId> {
        match trigger {
            Trigger::OnRegister => None,
            Trigger::Viewport { threshold } => {
                let wid = self.ids.alloc_watcher();
                self.watchers.arm(WatcherRow {
                    id: wid,
                    page,
                    node: node.to_string(),
                    kind: WatchKind::Intersection { threshold },
                });
                Some(wid)
            }
        }
    }

    fn is_armed(&self, target: TargetId) -> bool {
        self.tweens.iter().any(|t| t.target == Some(target))
    }

    fn spawn_reveal(&mut self, idx: usize) {
        let t = &self.targets[idx];
        self.tweens.push(RunningTween {
            page: t.page,
            target: Some(t.id),
            node: t.node.clone(),
            tween: Tween::new(
                t.from,
                TransformState::identity(),
                t.delay,
                t.duration,
                t.ease,
            ),
        });
    }
}

fn initial_transform(dx: f32, dy: f32, opacity: f32) -> TransformState {
    TransformState {
        translate: [dx, dy],
        scale: 1.0,
        opacity,
    }
}
