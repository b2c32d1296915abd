use crate::{
    error::QueryError,
    obs::{QueryEvent, sink},
};
use std::collections::BTreeSet;

const OP_SUM: &str = "sum_of";
const OP_AVERAGE: &str = "average_of";
const OP_COLLECT: &str = "collect_into";

/// Sum of `values`, widened to `u64`.
pub fn sum_of<I>(values: I) -> u64
where
    I: IntoIterator,
    I::Item: Into<u64>,
{
    let mut sum = 0u64;
    let mut scanned = 0u64;

    for value in values {
        scanned += 1;
        sum += value.into();
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP_SUM,
        elements_scanned: scanned,
    });

    sum
}

/// Arithmetic mean of `values` under IEEE-754 `f64` semantics.
#[expect(clippy::cast_precision_loss)]
pub fn average_of<I>(values: I) -> Result<f64, QueryError>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let mut sum = 0.0f64;
    let mut count = 0u64;

    for value in values {
        count += 1;
        sum += value.into();
    }

    if count == 0 {
        let err = QueryError::EmptyInput { op: OP_AVERAGE };
        sink::emit(QueryEvent::OpFailed {
            op: OP_AVERAGE,
            class: err.class(),
        });
        return Err(err);
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP_AVERAGE,
        elements_scanned: count,
    });

    Ok(sum / count as f64)
}

/// Map each element through `key` and insert into `target`; duplicate
/// insertions are no-ops. Returns the mutated set.
pub fn collect_into<I, K, F>(items: I, mut key: F, mut target: BTreeSet<K>) -> BTreeSet<K>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> K,
    K: Ord,
{
    let mut scanned = 0u64;

    for item in items {
        scanned += 1;
        target.insert(key(item));
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP_COLLECT,
        elements_scanned: scanned,
    });

    target
}
