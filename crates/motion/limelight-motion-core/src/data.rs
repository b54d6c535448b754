#![allow(dead_code)]
//! Page registration data model.
//!
//! The view layer builds one [`PageData`] per routed page at render time and
//! hands it to the engine: an explicit list of target declarations, never a
//! document tree for the engine to walk. Handles are small string keys the
//! host can map back to its own elements.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ease::Ease;
use crate::value::NodeHandle;

/// Default viewport threshold: the entrance fires when the element's top
/// reaches 80% down the viewport.
pub const DEFAULT_THRESHOLD: f32 = 0.8;

fn default_duration() -> f32 {
    0.8
}

fn default_interval() -> f32 {
    0.1
}

/// Default parallax travel: -8% of the element's own height across the
/// container's full scroll through the viewport.
fn default_max_shift() -> f32 {
    -8.0
}

fn default_fade_duration() -> f32 {
    0.5
}

fn default_fade_ease() -> Ease {
    Ease::Bezier {
        ctrl: [0.16, 1.0, 0.3, 1.0],
    }
}

/// What arms an entrance.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// Fires as soon as the page registers (hero copy animating on mount).
    OnRegister,
    /// Fires when the watched element crosses the given viewport fraction.
    Viewport { threshold: f32 },
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::Viewport {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Declared initial visual state an entrance animates away from.
/// Offsets are px; opacity defaults to fully transparent.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialState {
    pub dx: f32,
    pub dy: f32,
    pub opacity: f32,
}

/// One animatable target (or staggered group of targets) on a page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TargetDecl {
    /// One-shot entrance reveal for a single node.
    #[serde(rename_all = "camelCase")]
    Entrance {
        node: NodeHandle,
        #[serde(default)]
        trigger: Trigger,
        #[serde(default)]
        from: InitialState,
        #[serde(default = "default_duration")]
        duration: f32,
        #[serde(default)]
        ease: Ease,
        #[serde(default)]
        delay: f32,
    },
    /// Entrance reveals for an ordered member list, with member i delayed by
    /// i * interval past the shared trigger. Members share one watcher; the
    /// watched node defaults to the first member (pass `watch` to observe a
    /// container instead).
    #[serde(rename_all = "camelCase")]
    Stagger {
        group: String,
        members: Vec<NodeHandle>,
        #[serde(default)]
        watch: Option<NodeHandle>,
        #[serde(default)]
        trigger: Trigger,
        #[serde(default)]
        from: InitialState,
        #[serde(default = "default_duration")]
        duration: f32,
        #[serde(default)]
        ease: Ease,
        #[serde(default)]
        delay: f32,
        #[serde(default = "default_interval")]
        interval: f32,
    },
    /// Continuous scroll-linked vertical shift. Never completes; the emitted
    /// offset is a pure function of the reported scroll progress.
    #[serde(rename_all = "camelCase")]
    Parallax {
        node: NodeHandle,
        #[serde(default = "default_max_shift")]
        max_shift: f32,
    },
}

/// Whole-page opacity fade played when the page registers.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageFade {
    pub duration: f32,
    pub ease: Ease,
}

impl Default for PageFade {
    fn default() -> Self {
        Self {
            duration: default_fade_duration(),
            ease: default_fade_ease(),
        }
    }
}

/// Registration list for one routed page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub name: String,
    /// Node the page fade applies to.
    pub root: NodeHandle,
    #[serde(default)]
    pub fade: Option<PageFade>,
    pub targets: Vec<TargetDecl>,
}

/// Errors produced while validating or parsing a page declaration.
#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("page '{0}' declares an empty node handle")]
    EmptyNode(String),
    #[error("viewport threshold must be finite and within [0,1] for '{0}'")]
    BadThreshold(String),
    #[error("durations, delays and intervals must be finite and >= 0 for '{0}'")]
    BadTiming(String),
    #[error("stagger group '{0}' has no members")]
    EmptyGroup(String),
    #[error("page json parse error: {0}")]
    Parse(String),
}

fn check_trigger(page: &str, trigger: &Trigger) -> Result<(), PageDataError> {
    if let Trigger::Viewport { threshold } = trigger {
        if !threshold.is_finite() || !(0.0..=1.0).contains(threshold) {
            return Err(PageDataError::BadThreshold(page.to_string()));
        }
    }
    Ok(())
}

fn check_timing(page: &str, values: &[f32]) -> Result<(), PageDataError> {
    for v in values {
        if !v.is_finite() || *v < 0.0 {
            return Err(PageDataError::BadTiming(page.to_string()));
        }
    }
    Ok(())
}

impl PageData {
    /// Validate basic invariants before registration. Runtime stepping is
    /// fail-soft, so everything that can be rejected is rejected here.
    pub fn validate_basic(&self) -> Result<(), PageDataError> {
        if self.root.is_empty() {
            return Err(PageDataError::EmptyNode(self.name.clone()));
        }
        if let Some(fade) = &self.fade {
            check_timing(&self.name, &[fade.duration])?;
        }
        for decl in &self.targets {
            match decl {
                TargetDecl::Entrance {
                    node,
                    trigger,
                    duration,
                    delay,
                    ..
                } => {
                    if node.is_empty() {
                        return Err(PageDataError::EmptyNode(self.name.clone()));
                    }
                    check_trigger(&self.name, trigger)?;
                    check_timing(&self.name, &[*duration, *delay])?;
                }
                TargetDecl::Stagger {
                    group,
                    members,
                    watch,
                    trigger,
                    duration,
                    delay,
                    interval,
                    ..
                } => {
                    if members.is_empty() {
                        return Err(PageDataError::EmptyGroup(group.clone()));
                    }
                    if members.iter().any(|m| m.is_empty())
                        || watch.as_deref() == Some("")
                    {
                        return Err(PageDataError::EmptyNode(self.name.clone()));
                    }
                    check_trigger(&self.name, trigger)?;
                    check_timing(&self.name, &[*duration, *delay, *interval])?;
                }
                TargetDecl::Parallax { node, max_shift } => {
                    if node.is_empty() {
                        return Err(PageDataError::EmptyNode(self.name.clone()));
                    }
                    if !max_shift.is_finite() {
                        return Err(PageDataError::BadTiming(self.name.clone()));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Parse a PageData JSON document and validate it. This is the form the
/// view layer ships across the wasm boundary.
pub fn parse_page_data_json(s: &str) -> Result<PageData, PageDataError> {
    let data: PageData =
        serde_json::from_str(s).map_err(|e| PageDataError::Parse(e.to_string()))?;
    data.validate_basic()?;
    Ok(data)
}
