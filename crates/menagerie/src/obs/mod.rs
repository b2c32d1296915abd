//! Observability for the query pipeline.
//!
//! Pipeline logic MUST NOT depend on `obs::metrics` directly.
//! All instrumentation flows through QueryEvent and MetricsSink.

pub mod metrics;
pub mod sink;

pub use sink::{MetricsSink, QueryEvent};
