use serde::{Deserialize, Serialize};
use std::fmt;

///
/// PetType
///
/// Closed enumeration of the pet kinds the registry understands.
/// Ordering and hashing follow declaration order, so bags and sets over
/// pet types iterate deterministically.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PetType {
    Cat,
    Dog,
    Snake,
    Bird,
    Turtle,
    Hamster,
}

impl PetType {
    /// Symbol used for display output.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Cat => "🐱",
            Self::Dog => "🐶",
            Self::Snake => "🐍",
            Self::Bird => "🐦",
            Self::Turtle => "🐢",
            Self::Hamster => "🐹",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

///
/// Pet
///
/// Immutable pet record: type tag, name, and a non-negative age.
/// Owned exclusively by its [`Person`](crate::model::Person).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Pet {
    kind: PetType,
    name: String,
    age: u32,
}

impl Pet {
    #[must_use]
    pub fn new(kind: PetType, name: impl Into<String>, age: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            age,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PetType {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.symbol())
    }
}

///
/// TESTS
///
