pub mod collection;

pub use collection::{Bag, OrderedList};
