#![allow(dead_code)]
//! Watcher table: the engine's record of what the host must observe.
//!
//! register_page arms one row per viewport-gated target (one per declared
//! stagger group) and one per parallax container. Hosts read the table,
//! attach their intersection/scroll machinery, and report back with the row
//! ids. dispose_page releases a page's rows atomically; an event naming a
//! released row no longer resolves and is dropped, which is what makes
//! stale callbacks after teardown a guaranteed no-op.

use serde::{Deserialize, Serialize};

use crate::ids::{PageId, WatcherId};
use crate::value::NodeHandle;

/// What kind of observation a row asks the host for.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum WatchKind {
    /// One-shot: report when the node crosses the viewport fraction.
    Intersection { threshold: f32 },
    /// Continuous: report normalized progress of the node through the
    /// viewport on every scroll tick.
    ScrollProgress,
}

/// One armed observation request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatcherRow {
    pub id: WatcherId,
    pub page: PageId,
    pub node: NodeHandle,
    pub kind: WatchKind,
}

/// All live observation requests across registered pages.
#[derive(Default, Debug)]
pub struct WatcherTable {
    rows: Vec<WatcherRow>,
}

impl WatcherTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn arm(&mut self, row: WatcherRow) {
        self.rows.push(row);
    }

    pub fn get(&self, id: WatcherId) -> Option<&WatcherRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Release every row belonging to the page.
    pub fn release_page(&mut self, page: PageId) {
        self.rows.retain(|r| r.page != page);
    }

    pub fn rows(&self) -> &[WatcherRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_page_drops_only_that_page() {
        let mut table = WatcherTable::new();
        table.arm(WatcherRow {
            id: WatcherId(0),
            page: PageId(0),
            node: "a".into(),
            kind: WatchKind::Intersection { threshold: 0.8 },
        });
        table.arm(WatcherRow {
            id: WatcherId(1),
            page: PageId(1),
            node: "b".into(),
            kind: WatchKind::ScrollProgress,
        });
        table.release_page(PageId(0));
        assert_eq!(table.len(), 1);
        assert!(table.get(WatcherId(0)).is_none());
        assert!(table.get(WatcherId(1)).is_some());
    }
}
