use crate::{
    error::QueryError,
    obs::{QueryEvent, sink},
};
use std::cmp::Ordering;

const OP_MAX: &str = "max_by_key";
const OP_MIN: &str = "min_by_key";

/// Element whose key is greatest. Deterministic tie-break contract:
/// on equal keys the first-encountered element wins.
pub fn max_by_key<I, K, F>(items: I, key: F) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    fold_extremum(items, key, Ordering::Greater, OP_MAX)
}

/// Element whose key is least, under the same tie-break contract as
/// [`max_by_key`].
pub fn min_by_key<I, K, F>(items: I, key: F) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    fold_extremum(items, key, Ordering::Less, OP_MIN)
}

// Single-pass reduction keeping the current winner. A candidate replaces
// it only on a strict directional win, which keeps the first-encountered
// element on ties.
fn fold_extremum<I, K, F>(
    items: I,
    mut key: F,
    winning: Ordering,
    op: &'static str,
) -> Result<I::Item, QueryError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut scanned = 0u64;
    let mut selected: Option<(I::Item, K)> = None;

    for item in items {
        scanned += 1;
        let candidate_key = key(&item);
        let replaces = match selected.as_ref() {
            Some((_, current_key)) => candidate_key.cmp(current_key) == winning,
            None => true,
        };
        if replaces {
            selected = Some((item, candidate_key));
        }
    }

    match selected {
        Some((item, _)) => {
            sink::emit(QueryEvent::OpExecuted {
                op,
                elements_scanned: scanned,
            });
            Ok(item)
        }
        None => {
            let err = QueryError::EmptyInput { op };
            sink::emit(QueryEvent::OpFailed {
                op,
                class: err.class(),
            });
            Err(err)
        }
    }
}
