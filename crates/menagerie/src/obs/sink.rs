//! Metrics sink boundary.
//!
//! This module is the only allowed bridge between pipeline logic and the
//! thread-local metrics state.

use crate::{error::ErrorClass, obs::metrics};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// QueryEvent
///

#[derive(Clone, Copy, Debug)]
pub enum QueryEvent {
    OpExecuted {
        op: &'static str,
        elements_scanned: u64,
    },
    OpFailed {
        op: &'static str,
        class: ErrorClass,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: QueryEvent);
}

///
/// DefaultSink
/// Feeds the thread-local counters in `obs::metrics`.
///

struct DefaultSink;

impl MetricsSink for DefaultSink {
    fn record(&self, event: QueryEvent) {
        metrics::apply(event);
    }
}

/// Emit one event through the active sink.
pub(crate) fn emit(event: QueryEvent) {
    SINK_OVERRIDE.with(|slot| match slot.borrow().as_ref() {
        Some(sink) => sink.record(event),
        None => DefaultSink.record(event),
    });
}

/// Install a sink override for the current thread, returning the previous
/// one. Pass `None` to restore default routing.
pub fn set_sink_override(sink: Option<Rc<dyn MetricsSink>>) -> Option<Rc<dyn MetricsSink>> {
    SINK_OVERRIDE.with(|slot| std::mem::replace(&mut *slot.borrow_mut(), sink))
}

///
/// TESTS
///
