//! Bracket construction: sizing, seeding, both ladders, routing and byes.

mod arena;
mod byes;
mod generate;
mod ids;
mod loser_routing;
mod losers;
mod plan;
mod render;
mod roster;
mod seeding;
mod summary;
mod winners;

pub use generate::generate_bracket;
pub use ids::{sequential_ids, uuid_ids};
pub use losers::losers_match_count;
pub use plan::{BracketPlan, LosersStart};
pub use render::render_bracket;
pub use roster::{participants_from_count, read_participants, shuffle_seeds, RosterError};
pub use seeding::{next_power_of_two, seed_order, seed_pairs, winners_rounds};
pub use summary::{BracketSummary, MatchIndex};
pub use winners::winners_match_count;
