use crate::obs::{QueryEvent, sink};

const OP: &str = "partition";

///
/// Partition
///
/// Stable two-way split of a sequence: every input element lands in
/// exactly one side, relative order preserved on both sides.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition<T> {
    pub selected: Vec<T>,
    pub rejected: Vec<T>,
}

/// Split `items` by `predicate`, preserving relative order on both sides.
pub fn partition<I, P>(items: I, mut predicate: P) -> Partition<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut selected = Vec::new();
    let mut rejected = Vec::new();
    let mut scanned = 0u64;

    for item in items {
        scanned += 1;
        if predicate(&item) {
            selected.push(item);
        } else {
            rejected.push(item);
        }
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP,
        elements_scanned: scanned,
    });

    Partition { selected, rejected }
}
