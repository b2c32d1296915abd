use crate::{
    obs::{QueryEvent, sink},
    types::Bag,
};

const OP: &str = "select_duplicates";

/// Occurrence counts of the value-equal duplicates in `items`: every
/// element occurring at least twice, paired with its count.
pub fn select_duplicates<I>(items: I) -> Bag<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + Ord,
{
    let mut scanned = 0u64;
    let mut bag = Bag::new();

    for item in items {
        scanned += 1;
        bag.insert(item);
    }

    sink::emit(QueryEvent::OpExecuted {
        op: OP,
        elements_scanned: scanned,
    });

    bag.duplicates()
}
