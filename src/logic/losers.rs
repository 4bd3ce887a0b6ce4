//! Losers bracket: alternating crossover (odd) and consolidation (even) rounds.
//!
//! Crossover rounds take fresh losers from the winners bracket; consolidation rounds
//! only advance earlier losers-bracket winners. Each pair of rounds shares a match
//! count, and the count halves every two rounds.

use crate::logic::arena::{Arena, MatchKey, Route};
use crate::logic::plan::BracketPlan;
use crate::models::{BracketType, Slot};

/// Matches in losers round `round`: `effective_size / 2^(ceil(round / 2) + 1)`.
pub fn losers_match_count(effective_bracket_size: usize, round: u32) -> usize {
    effective_bracket_size >> (round.div_ceil(2) + 1)
}

/// Create the losers matches and wire winner advancement inside the losers bracket.
pub(crate) fn build_losers_bracket(arena: &mut Arena, plan: &BracketPlan) {
    let effective = plan.effective_bracket_size();
    for round in 1..=plan.losers_rounds {
        let count = losers_match_count(effective, round) as u32;
        for position in 0..count {
            arena.insert(MatchKey::losers(round, position));
        }
    }

    for key in arena.keys(BracketType::Losers) {
        if key.round >= plan.losers_rounds {
            continue;
        }
        let route = if key.round % 2 == 1 {
            // crossover -> consolidation: same count, same position
            Route {
                to: MatchKey::losers(key.round + 1, key.position),
                slot: Slot::One,
            }
        } else {
            Route {
                to: MatchKey::losers(key.round + 1, key.position / 2),
                slot: Slot::for_position(key.position),
            }
        };
        arena.route_winner(key, route);
    }
}
