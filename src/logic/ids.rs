//! Ready-made id factories for [`crate::generate_bracket`].

use crate::models::MatchId;
use uuid::Uuid;

/// Deterministic ids: `{prefix}1`, `{prefix}2`, ... Each call starts a fresh counter.
pub fn sequential_ids(prefix: impl Into<String>) -> impl FnMut() -> MatchId {
    let prefix = prefix.into();
    let mut counter: u64 = 0;
    move || {
        counter += 1;
        format!("{prefix}{counter}")
    }
}

/// Random UUID v4 ids.
pub fn uuid_ids() -> impl FnMut() -> MatchId {
    || Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_from_one() {
        let mut next = sequential_ids("match-");
        assert_eq!(next(), "match-1");
        assert_eq!(next(), "match-2");
        let mut other = sequential_ids("m");
        assert_eq!(other(), "m1");
    }

    #[test]
    fn uuid_ids_differ() {
        let mut next = uuid_ids();
        assert_ne!(next(), next());
    }
}
