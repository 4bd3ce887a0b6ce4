//! Generator options and the validation error.

use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};

/// Input to [`crate::generate_bracket`]. The id factory is passed separately.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub event_id: String,
    pub participants: Vec<Participant>,
    /// How many rounds before the winners final the losers bracket starts taking losers.
    ///
    /// - `Some(0)`: pure single elimination
    /// - `Some(1)`: single elimination plus a 3rd place match between the semifinal losers
    /// - `Some(n)`, n >= 2: losers of the last `n` rounds before the final drop down
    /// - `None`: full double elimination
    ///
    /// Signed so that out-of-range input coming over the wire is reported, not truncated.
    #[serde(default)]
    pub losers_start_rounds_before_final: Option<i64>,
}

impl GeneratorOptions {
    pub fn new(event_id: impl Into<String>, participants: Vec<Participant>) -> Self {
        Self {
            event_id: event_id.into(),
            participants,
            losers_start_rounds_before_final: None,
        }
    }

    pub fn with_losers_start(mut self, rounds_before_final: i64) -> Self {
        self.losers_start_rounds_before_final = Some(rounds_before_final);
        self
    }
}

/// Raised before any match is built when the options cannot produce a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Fewer than two participants.
    NotEnoughParticipants { count: usize },
    /// Losers start parameter below zero.
    NegativeLosersStart(i64),
    /// A 3rd place match needs semifinals, i.e. at least 4 participants.
    ThirdPlaceNeedsSemifinals,
    /// Losers start parameter must be below the number of winners rounds.
    LosersStartTooLate { value: i64, winners_rounds: u32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotEnoughParticipants { .. } => {
                write!(f, "At least 2 participants required")
            }
            ValidationError::NegativeLosersStart(_) => write!(
                f,
                "losersStartRoundsBeforeFinal must be at least 0 (0 = pure single elimination)"
            ),
            ValidationError::ThirdPlaceNeedsSemifinals => write!(
                f,
                "losersStartRoundsBeforeFinal=1 requires at least 4 participants (semifinals needed)"
            ),
            ValidationError::LosersStartTooLate { winners_rounds, .. } => write!(
                f,
                "losersStartRoundsBeforeFinal must be less than winnersRounds ({})",
                winners_rounds
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
