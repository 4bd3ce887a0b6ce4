//! Participant: a registration with its seed.

use serde::{Deserialize, Serialize};

/// Identifier of a registered participant (opaque to the generator).
pub type RegistrationId = String;

/// A seeded participant. Lower seed = stronger.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub registration_id: RegistrationId,
    pub seed: u32,
}

impl Participant {
    pub fn new(registration_id: impl Into<RegistrationId>, seed: u32) -> Self {
        Self {
            registration_id: registration_id.into(),
            seed,
        }
    }
}
