//! Data structures for bracket generation: participants, matches, options.

mod bracket_match;
mod options;
mod participant;

pub use bracket_match::{BracketMatch, BracketType, MatchId, Slot};
pub use options::{GeneratorOptions, ValidationError};
pub use participant::{Participant, RegistrationId};
