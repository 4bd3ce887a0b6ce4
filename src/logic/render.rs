//! Plain-text rendering of a bracket, one line per match.

use crate::logic::summary::MatchIndex;
use crate::models::{BracketMatch, BracketType, Slot};
use std::fmt::Write;

/// Render both brackets round by round:
/// `[pos P] ID: A vs B → W:target[slot] L:target[slot]`.
///
/// Empty winners round-1 slots print as `BYE`, other empty slots as `TBD`, missing
/// targets as `-`.
pub fn render_bracket(matches: &[BracketMatch]) -> String {
    let index = MatchIndex::new(matches);
    let mut out = String::new();
    for (bracket, title) in [
        (BracketType::Winners, "WINNERS BRACKET"),
        (BracketType::Losers, "LOSERS BRACKET"),
    ] {
        let rounds = index.rounds(bracket);
        if rounds == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "=== {} ===", title);
        for round in 1..=rounds {
            let _ = writeln!(out, "\nRound {}:", round);
            for m in index.round(bracket, round) {
                let _ = writeln!(out, "  {}", render_match(m));
            }
        }
    }
    out
}

fn render_match(m: &BracketMatch) -> String {
    let empty = if m.bracket_type == BracketType::Winners && m.round == 1 {
        "BYE"
    } else {
        "TBD"
    };
    let side = |slot: Slot| m.slot(slot).map(String::as_str).unwrap_or(empty);
    format!(
        "[pos {}] {}: {} vs {} → W:{} L:{}",
        m.bracket_position,
        m.id,
        side(Slot::One),
        side(Slot::Two),
        target(m.winner_to.as_deref(), m.winner_to_slot),
        target(m.loser_to.as_deref(), m.loser_to_slot),
    )
}

fn target(id: Option<&str>, slot: Option<Slot>) -> String {
    match (id, slot) {
        (Some(id), Some(slot)) => format!("{}[{}]", id, slot),
        _ => "-".to_string(),
    }
}
