
use crate::{
    error::{ErrorClass, QueryError},
    model::{Person, Pet, PetType},
    obs::metrics,
    query::{
        average_of, collect_into, detect_first, max_by_key, min_by_key, select_duplicates, sum_of,
    },
    test_support::fixtures::sample_roster,
};
use std::collections::BTreeSet;

#[test]
fn partition_splits_pet_people_from_the_rest() {
    let roster = sample_roster();
    let partition = roster.partition_pet_people();

    assert_eq!(partition.selected.len(), 7);
    assert_eq!(partition.rejected.len(), 1);
    assert_eq!(partition.rejected[0].full_name(), "John Doe");

    // Stable: both sides keep roster order.
    let selected: Vec<String> = partition
        .selected
        .iter()
        .map(|person| person.full_name())
        .collect();
    assert_eq!(selected[0], "Mary Smith");
    assert_eq!(selected[6], "Harry Hamster");
}

#[test]
fn flattened_pets_keep_person_then_pet_order() {
    let roster = sample_roster();

    let names: Vec<&str> = roster.pets().into_iter().map(Pet::name).collect();
    assert_eq!(
        names,
        vec![
            "Tabby", "Dolly", "Spot", "Spike", "Serpy", "Tweety", "Speedy", "Fuzzy", "Wuzzy",
        ]
    );
}

#[test]
fn oldest_pet_is_the_dog_aged_four() {
    let roster = sample_roster();

    let oldest = roster.oldest_pet().expect("roster has pets");
    assert_eq!(oldest.kind(), PetType::Dog);
    assert_eq!(oldest.age(), 4);
}

#[test]
fn youngest_pet_is_the_first_encountered_age_one_pet() {
    let roster = sample_roster();

    let youngest = roster.youngest_pet().expect("roster has pets");
    assert_eq!(youngest.name(), "Serpy");
    assert_eq!(youngest.age(), 1);
}

#[test]
fn average_pet_age_matches_the_hand_computed_mean() {
    let roster = sample_roster();

    let average = roster.average_pet_age().expect("roster has pets");
    assert!(
        (average - 1.888_88).abs() < 0.000_01,
        "unexpected average: {average}"
    );
}

#[test]
fn sum_of_pet_ages_widens_to_u64() {
    let roster = sample_roster();

    assert_eq!(sum_of(roster.pet_ages()), 17);
}

#[test]
fn collect_into_a_seeded_set_unions_the_ages() {
    let roster = sample_roster();
    let seeded: BTreeSet<u32> = BTreeSet::from([5]);

    let ages = collect_into(roster.pets(), |pet| pet.age(), seeded);
    assert_eq!(ages, BTreeSet::from([1, 2, 3, 4, 5]));
}

#[test]
fn collect_into_a_fresh_set_dedupes_the_ages() {
    let roster = sample_roster();

    let ages = collect_into(roster.pets(), |pet| pet.age(), BTreeSet::new());
    assert_eq!(ages, BTreeSet::from([1, 2, 3, 4]));
}

#[test]
fn select_duplicates_counts_repeated_pet_kinds() {
    let roster = sample_roster();

    let kinds = select_duplicates(roster.pets().into_iter().map(Pet::kind));
    assert_eq!(kinds.occurrences_of(&PetType::Cat), 2);
    assert_eq!(kinds.occurrences_of(&PetType::Dog), 2);
    assert_eq!(kinds.occurrences_of(&PetType::Hamster), 2);
    assert_eq!(kinds.distinct_len(), 3);
}

#[test]
fn detect_finds_the_owner_of_two_pets_of_the_same_kind() {
    let roster = sample_roster();

    let owner = roster
        .detect(|person| !person.pet_types().duplicates().is_empty())
        .expect("one owner has duplicate pet kinds");

    assert_eq!(owner.full_name(), "Harry Hamster");

    let symbols: Vec<String> = owner.pets().iter().map(ToString::to_string).collect();
    assert_eq!(symbols.join(" "), "🐹 🐹");
}

#[test]
fn detect_without_a_match_is_not_found() {
    let roster = sample_roster();

    let err = roster
        .detect(|person| person.named("Nobody Nowhere"))
        .expect_err("no such person on the roster");

    assert_eq!(err, QueryError::NotFound { op: "detect_first" });
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[test]
fn extrema_over_empty_input_fail_with_empty_input() {
    let no_pets: Vec<&Pet> = Vec::new();

    let err = max_by_key(no_pets, |pet| pet.age()).expect_err("empty input must fail");
    assert_eq!(err.class(), ErrorClass::EmptyInput);
    assert_eq!(err.op(), "max_by_key");

    let err =
        min_by_key(Vec::<&Pet>::new(), |pet| pet.age()).expect_err("empty input must fail");
    assert_eq!(err.op(), "min_by_key");
}

#[test]
fn extrema_tie_break_keeps_the_first_encountered_element() {
    let first = Person::builder("Ann", "Able")
        .pet(PetType::Cat, "Alpha", 3)
        .build();
    let second = Person::builder("Ben", "Baker")
        .pet(PetType::Dog, "Beta", 3)
        .build();

    let pets: Vec<&Pet> = first.pets().iter().chain(second.pets().iter()).collect();

    let max = max_by_key(pets.clone(), |pet| pet.age()).expect("input is non-empty");
    assert_eq!(max.name(), "Alpha");

    let min = min_by_key(pets, |pet| pet.age()).expect("input is non-empty");
    assert_eq!(min.name(), "Alpha");
}

#[test]
fn detect_stops_scanning_at_the_first_match() {
    metrics::reset();

    let detected = detect_first(1..=100u32, |value| *value == 3).expect("3 is in range");
    assert_eq!(detected, 3);

    let counters = metrics::snapshot().op("detect_first");
    assert_eq!(counters.executed, 1);
    assert_eq!(counters.elements_scanned, 3);
}

#[test]
fn operations_account_elements_scanned() {
    metrics::reset();

    let roster = sample_roster();
    let _ = roster.partition_pet_people();
    let ages = roster.pet_ages();
    let _ = average_of(ages);

    let snapshot = metrics::snapshot();
    assert_eq!(snapshot.op("partition").executed, 1);
    assert_eq!(snapshot.op("partition").elements_scanned, 8);
    assert_eq!(snapshot.op("flat_collect").executed, 1);
    assert_eq!(snapshot.op("flat_collect").elements_scanned, 8);
    assert_eq!(snapshot.op("average_of").elements_scanned, 9);

    let failed = roster.detect(|person| person.named("Nobody Nowhere"));
    assert!(failed.is_err());
    assert_eq!(metrics::snapshot().op("detect_first").failed, 1);
}
