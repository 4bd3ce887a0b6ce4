//! Elimination bracket generator: builds the full match graph of a single or double
//! elimination bracket from seeded participants, before any match is played.

pub mod logic;
pub mod models;

pub use logic::{
    generate_bracket, losers_match_count, next_power_of_two, participants_from_count,
    read_participants, render_bracket, seed_order, seed_pairs, sequential_ids, shuffle_seeds,
    uuid_ids, winners_match_count, winners_rounds, BracketPlan, BracketSummary, LosersStart,
    MatchIndex, RosterError,
};
pub use models::{
    BracketMatch, BracketType, GeneratorOptions, MatchId, Participant, RegistrationId, Slot,
    ValidationError,
};
