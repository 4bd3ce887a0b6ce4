//! Winners bracket: one single-elimination ladder over the whole bracket size.

use crate::logic::arena::{Arena, MatchKey, Route};
use crate::logic::plan::BracketPlan;
use crate::models::{BracketType, Slot};

/// Matches in winners round `round` of a bracket of `bracket_size` slots.
pub fn winners_match_count(bracket_size: usize, round: u32) -> usize {
    bracket_size >> round
}

/// Create every winners match and wire each winner to `(round + 1, position / 2)`.
/// The final has no winner target.
pub(crate) fn build_winners_bracket(arena: &mut Arena, plan: &BracketPlan) {
    for round in 1..=plan.winners_rounds {
        let count = winners_match_count(plan.bracket_size, round) as u32;
        for position in 0..count {
            arena.insert(MatchKey::winners(round, position));
        }
    }

    for key in arena.keys(BracketType::Winners) {
        if key.round >= plan.winners_rounds {
            continue;
        }
        arena.route_winner(
            key,
            Route {
                to: MatchKey::winners(key.round + 1, key.position / 2),
                slot: Slot::for_position(key.position),
            },
        );
    }
}
