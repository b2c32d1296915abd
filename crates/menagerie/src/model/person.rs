use crate::{
    model::{Pet, PetType},
    types::{Bag, OrderedList},
};
use serde::{Deserialize, Serialize};

///
/// Person
///
/// Pet-owner record. `pets` preserves insertion order; once built the
/// record is read-only. Construct through [`PersonBuilder`].
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    pets: OrderedList<Pet>,
}

impl Person {
    /// Start a builder for a person with no pets.
    #[must_use]
    pub fn builder(first_name: impl Into<String>, last_name: impl Into<String>) -> PersonBuilder {
        PersonBuilder {
            first_name: first_name.into(),
            last_name: last_name.into(),
            pets: Vec::new(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub const fn pets(&self) -> &OrderedList<Pet> {
        &self.pets
    }

    /// A person is a pet person iff they own at least one pet.
    #[must_use]
    pub const fn is_pet_person(&self) -> bool {
        !self.pets.is_empty()
    }

    /// Whether this person's full name matches `full_name` exactly.
    #[must_use]
    pub fn named(&self, full_name: &str) -> bool {
        self.full_name() == full_name
    }

    /// Bag of this person's pet type tags, one occurrence per owned pet.
    #[must_use]
    pub fn pet_types(&self) -> Bag<PetType> {
        self.pets.iter().map(Pet::kind).collect()
    }
}

///
/// PersonBuilder
///
/// Explicit builder for [`Person`]. Each step takes and returns the
/// builder by value; `build` finalizes the record. No aliasing exists
/// between steps, and the built person is immutable.
///

#[derive(Clone, Debug)]
pub struct PersonBuilder {
    first_name: String,
    last_name: String,
    pets: Vec<Pet>,
}

impl PersonBuilder {
    /// Append one pet, preserving insertion order.
    #[must_use]
    pub fn pet(mut self, kind: PetType, name: impl Into<String>, age: u32) -> Self {
        self.pets.push(Pet::new(kind, name, age));
        self
    }

    /// Finalize the person record.
    #[must_use]
    pub fn build(self) -> Person {
        Person {
            first_name: self.first_name,
            last_name: self.last_name,
            pets: self.pets.into(),
        }
    }
}

///
/// TESTS
///
