#![allow(dead_code)]
//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PageId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WatcherId(pub u32);

/// Monotonic allocator for PageId, TargetId, and WatcherId.
/// Ids are never reused within an engine lifetime, so a stale id from a
/// disposed page can never alias a live entity.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_page: u32,
    next_target: u32,
    next_watcher: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_page(&mut self) -> PageId {
        let id = PageId(self.next_page);
        self.next_page = self.next_page.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target = self.next_target.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_watcher(&mut self) -> WatcherId {
        let id = WatcherId(self.next_watcher);
        self.next_watcher = self.next_watcher.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_page(), PageId(0));
        assert_eq!(alloc.alloc_page(), PageId(1));
        assert_eq!(alloc.alloc_target(), TargetId(0));
        assert_eq!(alloc.alloc_target(), TargetId(1));
        assert_eq!(alloc.alloc_watcher(), WatcherId(0));
        assert_eq!(alloc.alloc_watcher(), WatcherId(1));
    }
}
