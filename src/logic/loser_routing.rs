//! Where each winners-bracket loser drops into the losers bracket.

use crate::logic::arena::{Arena, MatchKey, Route};
use crate::logic::plan::BracketPlan;
use crate::logic::winners::winners_match_count;
use crate::models::{BracketType, Slot};

/// Losers-bracket destination for the loser of winners match `(wb_round, wb_position)`,
/// or None when that loser is eliminated (or takes 2nd place in the final).
pub(crate) fn loser_destination(plan: &BracketPlan, wb_round: u32, wb_position: u32) -> Option<Route> {
    if !plan.has_losers_bracket() {
        return None;
    }
    if wb_round >= plan.winners_rounds || wb_round < plan.start_from_wb_round {
        return None;
    }

    if plan.semifinal_losers_only() {
        // Both semifinal losers meet once for 3rd place, in match order.
        return Some(Route {
            to: MatchKey::losers(1, 0),
            slot: if wb_position == 0 { Slot::One } else { Slot::Two },
        });
    }

    let relative_round = wb_round - plan.start_from_wb_round + 1;
    let route = match relative_round {
        1 => Route {
            to: MatchKey::losers(1, wb_position / 2),
            slot: Slot::for_position(wb_position),
        },
        2 => {
            // Mirrored so players from the same half do not meet again straight away.
            let round_matches = winners_match_count(plan.bracket_size, wb_round) as u32;
            Route {
                to: MatchKey::losers(2, round_matches - 1 - wb_position),
                slot: Slot::Two,
            }
        }
        _ => Route {
            to: MatchKey::losers((relative_round - 2) * 2 + 2, wb_position),
            slot: Slot::Two,
        },
    };
    Some(route)
}

/// Set `loser_to` on every winners match whose loser continues in the losers bracket.
pub(crate) fn wire_loser_routing(arena: &mut Arena, plan: &BracketPlan) {
    for key in arena.keys(BracketType::Winners) {
        if let Some(route) = loser_destination(plan, key.round, key.position) {
            log::trace!(
                "loser of W{}-{} -> L{}-{} slot {}",
                key.round,
                key.position,
                route.to.round,
                route.to.position,
                route.slot
            );
            arena.route_loser(key, route);
        }
    }
}
