//! Building participant lists: numbered test rosters, CSV import, random seeding.

use crate::models::Participant;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::io::Read;

/// Errors while reading a roster.
#[derive(Debug)]
pub enum RosterError {
    /// Malformed CSV or a row that does not match `registration_id,seed`.
    Csv(csv::Error),
    /// Seed 0 is not a valid seed.
    ZeroSeed { registration_id: String },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv(e) => write!(f, "Could not read roster: {}", e),
            RosterError::ZeroSeed { registration_id } => {
                write!(f, "Seed of {} must be at least 1", registration_id)
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Csv(e) => Some(e),
            RosterError::ZeroSeed { .. } => None,
        }
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

#[derive(Deserialize)]
struct RosterRow {
    registration_id: String,
    seed: u32,
}

/// `player-1` .. `player-n` with seeds 1..=n.
pub fn participants_from_count(n: usize) -> Vec<Participant> {
    (1..=n)
        .map(|i| Participant::new(format!("player-{i}"), i as u32))
        .collect()
}

/// Read participants from CSV with a `registration_id,seed` header. Whitespace is trimmed.
pub fn read_participants<R: Read>(reader: R) -> Result<Vec<Participant>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut participants = Vec::new();
    for row in csv_reader.deserialize::<RosterRow>() {
        let row = row?;
        if row.seed == 0 {
            return Err(RosterError::ZeroSeed {
                registration_id: row.registration_id,
            });
        }
        participants.push(Participant::new(row.registration_id, row.seed));
    }
    Ok(participants)
}

/// Shuffle the roster and reseed it 1..=n in the new order (random seeding).
pub fn shuffle_seeds<R: Rng + ?Sized>(participants: &mut [Participant], rng: &mut R) {
    participants.shuffle(rng);
    for (i, p) in participants.iter_mut().enumerate() {
        p.seed = i as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_roster() {
        let roster = participants_from_count(3);
        assert_eq!(roster[0], Participant::new("player-1", 1));
        assert_eq!(roster[2], Participant::new("player-3", 3));
    }

    #[test]
    fn zero_seed_is_rejected() {
        let data = "registration_id,seed\nalice,0\n";
        assert!(matches!(
            read_participants(data.as_bytes()),
            Err(RosterError::ZeroSeed { .. })
        ));
    }
}
