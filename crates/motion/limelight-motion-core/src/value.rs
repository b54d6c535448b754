#![allow(dead_code)]
//! Visual value kinds emitted by the engine.
//!
//! Hosts apply these to the node named by each change. `Transform` carries
//! absolute pixel translation plus scale/opacity; `ParallaxShift` carries a
//! vertical offset as a percentage of the element's own height, since the
//! engine never measures elements itself.

use serde::{Deserialize, Serialize};

/// Opaque handle naming a renderable node in the host's view tree.
/// The view layer mints these when it builds a page's registration list, and
/// reads them back off [`crate::outputs::Change`]s.
pub type NodeHandle = String;

/// Absolute visual state of a node: pixel translation, uniform scale, opacity.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransformState {
    pub translate: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
}

impl TransformState {
    /// The resting state every entrance tween converges to.
    pub const IDENTITY: TransformState = TransformState {
        translate: [0.0, 0.0],
        scale: 1.0,
        opacity: 1.0,
    };

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One visual value for a node this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum MotionValue {
    Transform(TransformState),
    /// Vertical offset in percent of the node's own height.
    ParallaxShift(f32),
}
