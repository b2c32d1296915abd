use crate::{
    error::QueryError,
    model::{Person, Pet},
    query::{Partition, average_of, detect_first, flat_collect, max_by_key, min_by_key, partition},
};

///
/// Roster
///
/// Materialized, insertion-ordered collection of people: the domain
/// surface over the generic pipeline operations. Operations never
/// mutate the roster; terminals return derived values.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Roster(Vec<Person>);

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of people on the roster.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the roster holds no people.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the roster.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }

    /// Consume the roster into its people.
    #[must_use]
    pub fn people(self) -> Vec<Person> {
        self.0
    }

    // ------------------------------------------------------------------
    // Pipeline surface
    // ------------------------------------------------------------------

    /// Stable split into pet people and everyone else.
    #[must_use]
    pub fn partition_pet_people(&self) -> Partition<&Person> {
        partition(&self.0, |person| person.is_pet_person())
    }

    /// Every pet on the roster, person-order then pet-order.
    #[must_use]
    pub fn pets(&self) -> Vec<&Pet> {
        flat_collect(&self.0, |person| person.pets().iter())
    }

    /// Ages of every pet on the roster, in pet order.
    #[must_use]
    pub fn pet_ages(&self) -> Vec<u32> {
        self.pets().into_iter().map(Pet::age).collect()
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Pet with the greatest age; first-encountered wins on ties.
    pub fn oldest_pet(&self) -> Result<&Pet, QueryError> {
        max_by_key(self.pets(), |pet| pet.age())
    }

    /// Pet with the least age; first-encountered wins on ties.
    pub fn youngest_pet(&self) -> Result<&Pet, QueryError> {
        min_by_key(self.pets(), |pet| pet.age())
    }

    /// Arithmetic mean of the roster's pet ages.
    pub fn average_pet_age(&self) -> Result<f64, QueryError> {
        average_of(self.pet_ages())
    }

    /// First person satisfying `predicate`, in roster order.
    pub fn detect<P>(&self, mut predicate: P) -> Result<&Person, QueryError>
    where
        P: FnMut(&Person) -> bool,
    {
        detect_first(&self.0, |person| predicate(person))
    }
}

impl From<Vec<Person>> for Roster {
    fn from(people: Vec<Person>) -> Self {
        Self(people)
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Roster {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
