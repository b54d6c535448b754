#![allow(dead_code)]
//! Limelight Motion Core (host-agnostic)
//!
//! The motion layer of the Limelight studio site, as a pure engine: one-shot
//! entrance reveals gated by viewport intersection, staggered group reveals,
//! continuous scroll-linked parallax, and the two-part pointer follower.
//! Hosts (the wasm adapter, tests) feed events in through Inputs and apply
//! the visual values Engine::update() emits; the engine owns no platform
//! handles and steps deterministically.

pub mod config;
pub mod data;
pub mod ease;
pub mod engine;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod pointer;
pub mod tween;
pub mod value;
pub mod watch;

// Re-exports for consumers (adapters)
pub use config::{Config, PointerConfig};
pub use data::{
    parse_page_data_json, InitialState, PageData, PageDataError, PageFade, TargetDecl, Trigger,
};
pub use ease::Ease;
pub use engine::Engine;
pub use ids::{PageId, TargetId, WatcherId};
pub use inputs::{Inputs, PointerEvent, ViewportEvent};
pub use outputs::{Change, MotionEvent, Outputs};
pub use pointer::PointerFollower;
pub use tween::{Blend, Tween, TweenStep};
pub use value::{MotionValue, NodeHandle, TransformState};
pub use watch::{WatchKind, WatcherRow};
