#![allow(dead_code)]
//! Core configuration for limelight-motion-core.

use serde::{Deserialize, Serialize};

use crate::value::NodeHandle;

/// Engine sizing plus the pointer-follower capability block.
/// Everything has serde defaults so hosts can pass partial JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for target/tween storage.
    pub target_capacity: usize,
    pub pointer: PointerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_capacity: 64,
            pointer: PointerConfig::default(),
        }
    }
}

/// Pointer-follower tuning. `enabled` is the capability flag the hosting
/// shell decides once at startup (touch-primary or small-screen hosts pass
/// false); the engine never probes the environment itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub enabled: bool,
    /// Leaky-integrator coefficient for the trailing ring.
    pub smoothing_factor: f32,
    /// Visibility fade on window focus/blur, seconds.
    pub fade_duration: f32,
    /// Hover affordance transition, seconds.
    pub hover_duration: f32,
    pub hover_ring_scale: f32,
    pub hover_ring_opacity: f32,
    /// Grace period before a replacement interactive-node set takes effect,
    /// letting freshly routed content finish rendering first.
    pub settle_delay: f32,
    /// Ring/dot diameters in px; positions are emitted for the top-left
    /// corner, so the engine centers them itself.
    pub ring_size: f32,
    pub dot_size: f32,
    pub ring_node: NodeHandle,
    pub dot_node: NodeHandle,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing_factor: 0.15,
            fade_duration: 0.2,
            hover_duration: 0.3,
            hover_ring_scale: 2.5,
            hover_ring_opacity: 0.6,
            settle_delay: 0.2,
            ring_size: 40.0,
            dot_size: 8.0,
            ring_node: "cursor.ring".to_string(),
            dot_node: "cursor.dot".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"pointer":{"enabled":false}}"#).unwrap();
        assert!(!cfg.pointer.enabled);
        assert_eq!(cfg.pointer.smoothing_factor, 0.15);
        assert_eq!(cfg.target_capacity, 64);
    }
}
