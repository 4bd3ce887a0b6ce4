//! Read-only views over a generated match list.

use crate::logic::seeding::next_power_of_two;
use crate::models::{BracketMatch, BracketType};
use serde::Serialize;
use std::collections::HashMap;

/// Headline numbers of a generated bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketSummary {
    pub participants: usize,
    pub bracket_size: usize,
    pub winners_matches: usize,
    pub losers_matches: usize,
    pub total_matches: usize,
    pub byes: usize,
}

impl BracketSummary {
    pub fn new(participants: usize, matches: &[BracketMatch]) -> Self {
        let winners_matches = matches
            .iter()
            .filter(|m| m.bracket_type == BracketType::Winners)
            .count();
        Self {
            participants,
            bracket_size: next_power_of_two(participants),
            winners_matches,
            losers_matches: matches.len() - winners_matches,
            total_matches: matches.len(),
            byes: matches.iter().filter(|m| m.bye).count(),
        }
    }
}

/// Lookup of matches by id and by `(bracket, round, position)`.
pub struct MatchIndex<'a> {
    by_id: HashMap<&'a str, &'a BracketMatch>,
    by_position: HashMap<(BracketType, u32, u32), &'a BracketMatch>,
}

impl<'a> MatchIndex<'a> {
    pub fn new(matches: &'a [BracketMatch]) -> Self {
        Self {
            by_id: matches.iter().map(|m| (m.id.as_str(), m)).collect(),
            by_position: matches
                .iter()
                .map(|m| ((m.bracket_type, m.round, m.bracket_position), m))
                .collect(),
        }
    }

    pub fn by_id(&self, id: &str) -> Option<&'a BracketMatch> {
        self.by_id.get(id).copied()
    }

    pub fn at(&self, bracket: BracketType, round: u32, position: u32) -> Option<&'a BracketMatch> {
        self.by_position.get(&(bracket, round, position)).copied()
    }

    /// Matches of one round, position ascending.
    pub fn round(&self, bracket: BracketType, round: u32) -> Vec<&'a BracketMatch> {
        let mut matches: Vec<_> = self
            .by_position
            .iter()
            .filter(|((b, r, _), _)| *b == bracket && *r == round)
            .map(|(_, m)| *m)
            .collect();
        matches.sort_by_key(|m| m.bracket_position);
        matches
    }

    /// Highest round number present in `bracket` (0 if empty).
    pub fn rounds(&self, bracket: BracketType) -> u32 {
        self.by_position
            .keys()
            .filter(|(b, _, _)| *b == bracket)
            .map(|(_, r, _)| *r)
            .max()
            .unwrap_or(0)
    }

    /// Target of `m`'s winner, if any.
    pub fn winner_target(&self, m: &BracketMatch) -> Option<&'a BracketMatch> {
        m.winner_to.as_deref().and_then(|id| self.by_id(id))
    }

    /// Target of `m`'s loser, if any.
    pub fn loser_target(&self, m: &BracketMatch) -> Option<&'a BracketMatch> {
        m.loser_to.as_deref().and_then(|id| self.by_id(id))
    }
}
