//! Integration tests for roster helpers: CSV import and random seeding.

use elimination_bracket::{
    generate_bracket, read_participants, sequential_ids, shuffle_seeds, GeneratorOptions,
    Participant, RosterError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn reads_csv_roster() {
    let data = "registration_id,seed\n alice , 2\nbob,1\ncarol,3\n";
    let roster = read_participants(data.as_bytes()).unwrap();
    assert_eq!(
        roster,
        vec![
            Participant::new("alice", 2),
            Participant::new("bob", 1),
            Participant::new("carol", 3),
        ]
    );
}

#[test]
fn bad_seed_is_a_csv_error() {
    let data = "registration_id,seed\nalice,first\n";
    let err = read_participants(data.as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::Csv(_)));
    assert!(err.to_string().starts_with("Could not read roster"));
}

#[test]
fn csv_roster_feeds_generator() {
    let data = "registration_id,seed\nalice,1\nbob,2\ncarol,3\n";
    let roster = read_participants(data.as_bytes()).unwrap();
    let matches = generate_bracket(&GeneratorOptions::new("cup", roster), sequential_ids("m")).unwrap();
    // 3 in a bracket of 4: alice gets the bye, bob meets carol.
    assert!(matches[0].bye);
    assert_eq!(matches[0].slot1.as_deref(), Some("alice"));
    assert_eq!(matches[1].slot1.as_deref(), Some("bob"));
    assert_eq!(matches[1].slot2.as_deref(), Some("carol"));
    assert_eq!(matches[2].slot1.as_deref(), Some("alice"));
}

#[test]
fn shuffle_reseeds_contiguously() {
    let mut roster: Vec<_> = (0..10).map(|i| Participant::new(format!("p{i}"), 100 + i)).collect();
    let mut rng = StdRng::seed_from_u64(7);
    shuffle_seeds(&mut roster, &mut rng);

    let seeds: Vec<u32> = roster.iter().map(|p| p.seed).collect();
    assert_eq!(seeds, (1..=10).collect::<Vec<_>>());
    let mut ids: Vec<_> = roster.iter().map(|p| p.registration_id.clone()).collect();
    ids.sort();
    let mut expected: Vec<_> = (0..10).map(|i| format!("p{i}")).collect();
    expected.sort();
    assert_eq!(ids, expected);
}

#[test]
fn shuffle_is_deterministic_for_a_seeded_rng() {
    let base: Vec<_> = (0..8).map(|i| Participant::new(format!("p{i}"), i + 1)).collect();
    let mut a = base.clone();
    let mut b = base;
    shuffle_seeds(&mut a, &mut StdRng::seed_from_u64(42));
    shuffle_seeds(&mut b, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
