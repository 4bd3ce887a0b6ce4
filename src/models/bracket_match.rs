//! BracketMatch, BracketType and Slot: the generated match records.

use crate::models::participant::RegistrationId;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a match, produced by the caller's id factory.
pub type MatchId = String;

/// Which ladder a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    Winners,
    Losers,
}

/// One of the two participant positions of a match. Serialized as `1` / `2`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Slot taken by the winner of the match at `position` when two matches merge into one.
    pub fn for_position(position: u32) -> Self {
        if position % 2 == 0 {
            Slot::One
        } else {
            Slot::Two
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Slot::One => 1,
            Slot::Two => 2,
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.number()
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Slot::One),
            2 => Ok(Slot::Two),
            other => Err(format!("slot must be 1 or 2, got {}", other)),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A single match of the generated bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    pub id: MatchId,
    /// Passthrough tag from the caller.
    pub event_id: String,
    /// 1-based, increasing toward the final of its bracket.
    pub round: u32,
    /// 0-based index within the round.
    pub bracket_position: u32,
    /// `bracket_position + 1`, for display.
    pub match_number: u32,
    #[serde(rename = "registration1Id")]
    pub slot1: Option<RegistrationId>,
    #[serde(rename = "registration2Id")]
    pub slot2: Option<RegistrationId>,
    /// None only for the final match of a bracket.
    pub winner_to: Option<MatchId>,
    pub winner_to_slot: Option<Slot>,
    /// None when the loser is eliminated outright.
    pub loser_to: Option<MatchId>,
    pub loser_to_slot: Option<Slot>,
    pub bracket_type: BracketType,
    /// True when the match held a single participant that was advanced without play.
    #[serde(default)]
    pub bye: bool,
}

impl BracketMatch {
    pub fn slot(&self, slot: Slot) -> Option<&RegistrationId> {
        match slot {
            Slot::One => self.slot1.as_ref(),
            Slot::Two => self.slot2.as_ref(),
        }
    }

    /// True if `registration_id` sits in either slot.
    pub fn has_participant(&self, registration_id: &str) -> bool {
        self.slot1.as_deref() == Some(registration_id) || self.slot2.as_deref() == Some(registration_id)
    }

    pub fn occupied_slots(&self) -> usize {
        usize::from(self.slot1.is_some()) + usize::from(self.slot2.is_some())
    }
}
