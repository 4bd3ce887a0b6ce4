//! Bracket generation: validate, build both ladders, wire losers, seed, resolve byes.

use crate::logic::arena::{Arena, MatchKey};
use crate::logic::byes::resolve_byes;
use crate::logic::loser_routing::wire_loser_routing;
use crate::logic::losers::build_losers_bracket;
use crate::logic::plan::BracketPlan;
use crate::logic::seeding::seed_pairs;
use crate::logic::winners::build_winners_bracket;
use crate::models::{BracketMatch, GeneratorOptions, MatchId, Participant, Slot, ValidationError};

/// Generate the complete match list for one event.
///
/// `id_factory` is called exactly once per match: winners rounds ascending, then
/// losers rounds ascending, position ascending within a round. The returned list
/// follows the same order. Fails before building anything if `options` are invalid.
pub fn generate_bracket<F>(options: &GeneratorOptions, id_factory: F) -> Result<Vec<BracketMatch>, ValidationError>
where
    F: FnMut() -> MatchId,
{
    let plan = BracketPlan::from_options(options)?;
    log::debug!(
        "bracket plan for {}: size={} winners_rounds={} losers_rounds={} start_from_wb_round={}",
        options.event_id,
        plan.bracket_size,
        plan.winners_rounds,
        plan.losers_rounds,
        plan.start_from_wb_round
    );

    let mut arena = Arena::new();
    build_winners_bracket(&mut arena, &plan);
    if plan.has_losers_bracket() {
        build_losers_bracket(&mut arena, &plan);
        wire_loser_routing(&mut arena, &plan);
    }

    place_participants(&mut arena, &options.participants, plan.bracket_size);
    let byes = resolve_byes(&mut arena);

    log::info!(
        "generated {} matches for event {} ({} participants, {} byes)",
        arena.len(),
        options.event_id,
        plan.participants,
        byes
    );
    Ok(arena.into_matches(&options.event_id, id_factory))
}

/// Put participants into winners round 1 following the standard seed pairing.
///
/// Seeds are ranked, so gaps (e.g. 1, 2, 5) are closed: the n-th lowest seed takes
/// bracket seed n. Bracket seeds beyond the participant count stay empty (byes).
fn place_participants(arena: &mut Arena, participants: &[Participant], bracket_size: usize) {
    let mut ranked: Vec<&Participant> = participants.iter().collect();
    ranked.sort_by_key(|p| p.seed);
    let by_rank = |seed: u32| -> Option<String> {
        ranked
            .get(seed as usize - 1)
            .map(|p| p.registration_id.clone())
    };

    for (position, (top, bottom)) in seed_pairs(bracket_size).into_iter().enumerate() {
        let Some(node) = arena.get_mut(&MatchKey::winners(1, position as u32)) else {
            continue;
        };
        if let Some(id) = by_rank(top) {
            node.set_slot(Slot::One, id);
        }
        if let Some(id) = by_rank(bottom) {
            node.set_slot(Slot::Two, id);
        }
    }
}
