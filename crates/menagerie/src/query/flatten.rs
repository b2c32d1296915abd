use crate::obs::{QueryEvent, sink};

const OP: &str = "flat_collect";

/// Concatenate the per-element sequences produced by `f`, preserving
/// outer order then inner order.
pub fn flat_collect<I, F, S>(items: I, mut f: F) -> Vec<S::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: IntoIterator,
{
    let mut out = Vec::new();
    let mut scanned = 0u64;

    for item in items {
        scanned += 1;
        out.extend(f(item));
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP,
        elements_scanned: scanned,
    });

    out
}
