use crate::{
    error::QueryError,
    obs::{QueryEvent, sink},
};

const OP: &str = "detect_first";

/// First element satisfying `predicate`, in sequence order.
pub fn detect_first<I, P>(items: I, mut predicate: P) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut scanned = 0u64;

    for item in items {
        scanned += 1;
        if predicate(&item) {
            sink::emit(QueryEvent::OpExecuted {
                op: OP,
                elements_scanned: scanned,
            });
            return Ok(item);
        }
    }

    let err = QueryError::NotFound { op: OP };
    sink::emit(QueryEvent::OpFailed {
        op: OP,
        class: err.class(),
    });

    Err(err)
}
