//! Option validation: the losers-start parameter is resolved once into a [`LosersStart`]
//! policy and then into the concrete sizes every builder consumes.

use crate::logic::seeding::{next_power_of_two, winners_rounds};
use crate::models::{GeneratorOptions, ValidationError};

/// Which winners rounds drop their losers into a losers bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LosersStart {
    /// Every round before the winners final feeds the losers bracket.
    Full,
    /// No losers bracket at all.
    SingleElimination,
    /// Only the semifinal losers meet, once, for 3rd place.
    ThirdPlace,
    /// The last `n` rounds before the final feed the losers bracket (n >= 2).
    Delayed(u32),
}

/// Derived sizing for one generation pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BracketPlan {
    pub participants: usize,
    pub bracket_size: usize,
    pub winners_rounds: u32,
    /// First winners round whose losers are routed into the losers bracket.
    pub start_from_wb_round: u32,
    pub losers_rounds: u32,
    pub losers_start: LosersStart,
}

impl BracketPlan {
    /// Validate `options` and derive the plan. No match is built before this succeeds.
    pub fn from_options(options: &GeneratorOptions) -> Result<Self, ValidationError> {
        let participants = options.participants.len();
        if participants < 2 {
            return Err(ValidationError::NotEnoughParticipants {
                count: participants,
            });
        }

        let bracket_size = next_power_of_two(participants);
        let winners_rounds = winners_rounds(bracket_size);
        let losers_start = resolve_losers_start(options.losers_start_rounds_before_final, winners_rounds)?;

        let start_from_wb_round = match losers_start {
            LosersStart::Full => 1,
            LosersStart::SingleElimination => winners_rounds,
            LosersStart::ThirdPlace => winners_rounds - 1,
            LosersStart::Delayed(n) => winners_rounds - n,
        };
        let losers_rounds = match losers_start {
            LosersStart::SingleElimination => 0,
            LosersStart::ThirdPlace => 1,
            // Two participants have no feeder round at all.
            LosersStart::Full => (winners_rounds - 1).saturating_mul(2).saturating_sub(1),
            LosersStart::Delayed(n) => n * 2 - 1,
        };

        Ok(Self {
            participants,
            bracket_size,
            winners_rounds,
            start_from_wb_round,
            losers_rounds,
            losers_start,
        })
    }

    /// Bracket size as seen by the losers bracket: halved once per round it skips.
    pub fn effective_bracket_size(&self) -> usize {
        self.bracket_size >> (self.start_from_wb_round - 1)
    }

    /// True when the losers bracket is a single match between the two semifinal losers.
    pub fn semifinal_losers_only(&self) -> bool {
        self.losers_rounds > 0 && self.start_from_wb_round + 1 == self.winners_rounds
    }

    pub fn has_losers_bracket(&self) -> bool {
        self.losers_rounds > 0
    }
}

fn resolve_losers_start(value: Option<i64>, winners_rounds: u32) -> Result<LosersStart, ValidationError> {
    let Some(value) = value else {
        return Ok(LosersStart::Full);
    };
    if value < 0 {
        return Err(ValidationError::NegativeLosersStart(value));
    }
    // Checked before the upper bound so 2-3 participants get the more specific message.
    if value == 1 && winners_rounds < 2 {
        return Err(ValidationError::ThirdPlaceNeedsSemifinals);
    }
    if value >= i64::from(winners_rounds) {
        return Err(ValidationError::LosersStartTooLate {
            value,
            winners_rounds,
        });
    }
    Ok(match value {
        0 => LosersStart::SingleElimination,
        1 => LosersStart::ThirdPlace,
        n => LosersStart::Delayed(n as u32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::roster::participants_from_count;

    fn options(n: usize, losers_start: Option<i64>) -> GeneratorOptions {
        GeneratorOptions {
            event_id: "event-1".to_string(),
            participants: participants_from_count(n),
            losers_start_rounds_before_final: losers_start,
        }
    }

    #[test]
    fn full_double_elimination_plan() {
        let plan = BracketPlan::from_options(&options(8, None)).unwrap();
        assert_eq!(plan.bracket_size, 8);
        assert_eq!(plan.winners_rounds, 3);
        assert_eq!(plan.start_from_wb_round, 1);
        assert_eq!(plan.losers_rounds, 3);
        assert_eq!(plan.effective_bracket_size(), 8);
        assert!(!plan.semifinal_losers_only());
    }

    #[test]
    fn two_participants_have_no_losers_bracket() {
        let plan = BracketPlan::from_options(&options(2, None)).unwrap();
        assert_eq!(plan.winners_rounds, 1);
        assert_eq!(plan.losers_rounds, 0);
        assert!(!plan.has_losers_bracket());
    }

    #[test]
    fn delayed_plan_for_sixteen() {
        let plan = BracketPlan::from_options(&options(16, Some(2))).unwrap();
        assert_eq!(plan.losers_start, LosersStart::Delayed(2));
        assert_eq!(plan.start_from_wb_round, 2);
        assert_eq!(plan.losers_rounds, 3);
        assert_eq!(plan.effective_bracket_size(), 8);
    }

    #[test]
    fn third_place_plan() {
        let plan = BracketPlan::from_options(&options(8, Some(1))).unwrap();
        assert_eq!(plan.losers_start, LosersStart::ThirdPlace);
        assert_eq!(plan.start_from_wb_round, 2);
        assert_eq!(plan.losers_rounds, 1);
        assert!(plan.semifinal_losers_only());
    }

    #[test]
    fn validation_order() {
        assert!(matches!(
            BracketPlan::from_options(&options(1, Some(-1))),
            Err(ValidationError::NotEnoughParticipants { count: 1 })
        ));
        assert!(matches!(
            BracketPlan::from_options(&options(8, Some(-1))),
            Err(ValidationError::NegativeLosersStart(-1))
        ));
        assert!(matches!(
            BracketPlan::from_options(&options(2, Some(1))),
            Err(ValidationError::ThirdPlaceNeedsSemifinals)
        ));
        assert!(matches!(
            BracketPlan::from_options(&options(8, Some(3))),
            Err(ValidationError::LosersStartTooLate { value: 3, winners_rounds: 3 })
        ));
    }
}
