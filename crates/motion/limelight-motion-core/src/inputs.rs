#![allow(dead_code)]
//! Input contracts for the core engine.
//!
//! Hosts translate their platform callbacks (intersection observers, scroll
//! ticks, pointer/focus listeners) into these events and pass a batch into
//! Engine::update() each frame. Events are drained in arrival order before
//! any tween advances; rapid scroll reports for the same watcher coalesce
//! to the last one in the batch.

use serde::{Deserialize, Serialize};

use crate::ids::WatcherId;
use crate::value::NodeHandle;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Intersection/scroll reports for armed watchers.
    #[serde(default)]
    pub viewport_events: Vec<ViewportEvent>,
    /// Pointer and window-focus reports for the pointer follower.
    #[serde(default)]
    pub pointer_events: Vec<PointerEvent>,
}

impl Inputs {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.viewport_events.is_empty() && self.pointer_events.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ViewportEvent {
    /// The watched element crossed its declared viewport threshold.
    ThresholdCrossed { watcher: WatcherId },
    /// Latest normalized scroll progress of the watched container through
    /// the viewport, in [0,1].
    ScrollProgress { watcher: WatcherId, progress: f32 },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    /// Pointer re-entered the window; both dot and ring snap, no lag.
    EnteredWindow { x: f32, y: f32 },
    FocusChanged { has_focus: bool },
    /// The node the pointer is over now, or None when over inert content.
    HoverChanged { node: Option<NodeHandle> },
    /// Replacement interactive-node set, applied after the settle delay.
    InteractiveNodesChanged { nodes: Vec<NodeHandle> },
}
