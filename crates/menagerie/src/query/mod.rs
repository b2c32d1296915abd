//! Module: query
//! Responsibility: pure pipeline operations over in-memory sequences and
//! the domain-facing roster surface.
//! Does not own: record construction or collection storage semantics.
//! Boundary: single-threaded, synchronous, order-stable transforms.

mod detect;
mod duplicates;
mod extrema;
mod flatten;
mod numeric;
mod partition;
mod roster;

#[cfg(test)]
mod tests;

pub use detect::detect_first;
pub use duplicates::select_duplicates;
pub use extrema::{max_by_key, min_by_key};
pub use flatten::flat_collect;
pub use numeric::{average_of, collect_into, sum_of};
pub use partition::{Partition, partition};
pub use roster::Roster;
