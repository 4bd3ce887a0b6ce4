//! First-round bye resolution.

use crate::logic::arena::{Arena, MatchKey, Route};
use crate::models::{BracketType, RegistrationId};

/// Advance the lone participant of every winners round-1 match to its winner target
/// and flag the match as a bye. Returns how many byes were resolved.
///
/// Only round 1 is inspected: later matches with one occupied slot are waiting for
/// an opponent, not byes.
pub(crate) fn resolve_byes(arena: &mut Arena) -> usize {
    let mut resolved = 0;
    for key in arena.round_keys(BracketType::Winners, 1) {
        let Some((present, target)) = bye_advance(arena, &key) else {
            continue;
        };
        if let Some(route) = target {
            if let Some(next) = arena.get_mut(&route.to) {
                next.set_slot(route.slot, present);
            }
        }
        if let Some(node) = arena.get_mut(&key) {
            node.bye = true;
        }
        resolved += 1;
    }
    resolved
}

/// The participant to advance and where, if `key` is a bye.
fn bye_advance(arena: &Arena, key: &MatchKey) -> Option<(RegistrationId, Option<Route>)> {
    let node = arena.get(key)?;
    let present = match (&node.slot1, &node.slot2) {
        (Some(id), None) | (None, Some(id)) => id.clone(),
        _ => return None,
    };
    Some((present, node.winner_to))
}
