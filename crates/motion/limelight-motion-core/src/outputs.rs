#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Outputs carry the visual values for this tick, keyed by stable
//! NodeHandle, and a separate list of semantic events. Hosts apply changes
//! to their elements and may transport events for instrumentation.

use serde::{Deserialize, Serialize};

use crate::ids::PageId;
use crate::value::{MotionValue, NodeHandle};

/// One changed node value this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub node: NodeHandle,
    pub value: MotionValue,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum MotionEvent {
    PageRegistered { page: PageId },
    PageDisposed { page: PageId },
    RevealStarted { node: NodeHandle },
    RevealCompleted { node: NodeHandle },
    PointerShown,
    PointerHidden,
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
