//! Thread-local per-operation counters, snapshotable for tests.

use crate::obs::sink::QueryEvent;
use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static COUNTERS: RefCell<BTreeMap<&'static str, OpCounters>> =
        const { RefCell::new(BTreeMap::new()) };
}

///
/// OpCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpCounters {
    pub executed: u64,
    pub elements_scanned: u64,
    pub failed: u64,
}

///
/// MetricsSnapshot
/// Point-in-time copy of the current thread's counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MetricsSnapshot(BTreeMap<&'static str, OpCounters>);

impl MetricsSnapshot {
    /// Counters for `op`, zeroed if the operation never ran.
    #[must_use]
    pub fn op(&self, op: &str) -> OpCounters {
        self.0.get(op).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold one event into the counters. Called by the default sink only.
pub(crate) fn apply(event: QueryEvent) {
    COUNTERS.with(|counters| {
        let mut counters = counters.borrow_mut();
        match event {
            QueryEvent::OpExecuted {
                op,
                elements_scanned,
            } => {
                let entry = counters.entry(op).or_default();
                entry.executed += 1;
                entry.elements_scanned += elements_scanned;
            }
            QueryEvent::OpFailed { op, .. } => {
                counters.entry(op).or_default().failed += 1;
            }
        }
    });
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn snapshot() -> MetricsSnapshot {
    COUNTERS.with(|counters| MetricsSnapshot(counters.borrow().clone()))
}

/// Reset the current thread's counters.
pub fn reset() {
    COUNTERS.with(|counters| counters.borrow_mut().clear());
}

///
/// TESTS
///
