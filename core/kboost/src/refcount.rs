// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use crate::types::BoostKind;

/// Outstanding enable requests per boost kind.
///
/// Counts are unsigned and never drop below zero: releasing a kind that
/// holds no reference leaves the table untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefcountTable {
    counts: [u32; 3],
}

impl RefcountTable {
    /// Creates a table with every count at zero.
    pub const fn new() -> Self {
        Self { counts: [0; 3] }
    }

    const fn slot(kind: BoostKind) -> Option<usize> {
        match kind {
            BoostKind::None => None,
            BoostKind::FullThrottle => Some(0),
            BoostKind::Conservative => Some(1),
            BoostKind::Restrained => Some(2),
        }
    }

    /// Returns the count for `kind`. [`BoostKind::None`] always reads as zero.
    #[inline]
    pub fn get(&self, kind: BoostKind) -> u32 {
        Self::slot(kind).map_or(0, |i| self.counts[i])
    }

    /// Returns `true` if `kind` holds at least one reference.
    #[inline]
    pub fn is_active(&self, kind: BoostKind) -> bool {
        self.get(kind) > 0
    }

    /// Takes a reference on `kind` and returns the new count.
    pub fn acquire(&mut self, kind: BoostKind) -> u32 {
        match Self::slot(kind) {
            Some(i) => {
                self.counts[i] = self.counts[i].saturating_add(1);
                self.counts[i]
            }
            None => 0,
        }
    }

    /// Drops a reference on `kind`.
    ///
    /// Returns the new count, or `None` if the count was already zero and
    /// nothing changed.
    pub fn release(&mut self, kind: BoostKind) -> Option<u32> {
        let i = Self::slot(kind)?;
        if self.counts[i] == 0 {
            return None;
        }
        self.counts[i] -= 1;
        Some(self.counts[i])
    }

    /// Resets `kind` to zero and returns the previous count.
    pub fn clear(&mut self, kind: BoostKind) -> u32 {
        match Self::slot(kind) {
            Some(i) => core::mem::take(&mut self.counts[i]),
            None => 0,
        }
    }

    /// The highest-priority kind with a positive count.
    ///
    /// Priority is full-throttle, then conservative, then restrained.
    pub fn aggregate(&self) -> BoostKind {
        BoostKind::ENABLEABLE
            .into_iter()
            .find(|&kind| self.is_active(kind))
            .unwrap_or(BoostKind::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_idle() {
        let table = RefcountTable::new();
        for kind in BoostKind::ENABLEABLE {
            assert_eq!(table.get(kind), 0);
        }
        assert_eq!(table.aggregate(), BoostKind::None);
    }

    #[test]
    fn test_acquire_release() {
        let mut table = RefcountTable::new();
        assert_eq!(table.acquire(BoostKind::Conservative), 1);
        assert_eq!(table.acquire(BoostKind::Conservative), 2);
        assert_eq!(table.release(BoostKind::Conservative), Some(1));
        assert_eq!(table.release(BoostKind::Conservative), Some(0));
        assert_eq!(table.release(BoostKind::Conservative), None);
        assert_eq!(table.get(BoostKind::Conservative), 0);
    }

    #[test]
    fn test_none_has_no_slot() {
        let mut table = RefcountTable::new();
        assert_eq!(table.acquire(BoostKind::None), 0);
        assert_eq!(table.release(BoostKind::None), None);
        assert_eq!(table.clear(BoostKind::None), 0);
        assert_eq!(table, RefcountTable::new());
    }

    #[test]
    fn test_clear_returns_previous() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::Restrained);
        table.acquire(BoostKind::Restrained);
        assert_eq!(table.clear(BoostKind::Restrained), 2);
        assert!(!table.is_active(BoostKind::Restrained));
    }

    #[test]
    fn test_aggregate_priority() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::Restrained);
        assert_eq!(table.aggregate(), BoostKind::Restrained);
        table.acquire(BoostKind::Conservative);
        assert_eq!(table.aggregate(), BoostKind::Conservative);
        table.acquire(BoostKind::FullThrottle);
        assert_eq!(table.aggregate(), BoostKind::FullThrottle);
        table.release(BoostKind::Conservative);
        assert_eq!(table.aggregate(), BoostKind::FullThrottle);
        table.release(BoostKind::FullThrottle);
        assert_eq!(table.aggregate(), BoostKind::Restrained);
    }
}
