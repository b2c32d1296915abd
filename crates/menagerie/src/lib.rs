//! Core runtime for Menagerie: domain records, collection wrappers, the
//! query pipeline, and the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod model;
pub mod obs;
pub mod query;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{Person, PersonBuilder, Pet, PetType},
        query::{Partition, Roster},
        types::{Bag, OrderedList},
    };
}
