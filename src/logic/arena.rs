//! Match arena used while building: matches are addressed by `(bracket, round, position)`
//! and only receive opaque ids once the structure is complete.

use crate::models::{BracketMatch, BracketType, MatchId, RegistrationId, Slot};
use std::collections::HashMap;

/// Stable address of a match inside one generation pass.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct MatchKey {
    pub bracket: BracketType,
    pub round: u32,
    pub position: u32,
}

impl MatchKey {
    pub fn winners(round: u32, position: u32) -> Self {
        Self {
            bracket: BracketType::Winners,
            round,
            position,
        }
    }

    pub fn losers(round: u32, position: u32) -> Self {
        Self {
            bracket: BracketType::Losers,
            round,
            position,
        }
    }
}

/// Downstream destination: target match and the slot taken there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Route {
    pub to: MatchKey,
    pub slot: Slot,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub key: MatchKey,
    pub slot1: Option<RegistrationId>,
    pub slot2: Option<RegistrationId>,
    pub winner_to: Option<Route>,
    pub loser_to: Option<Route>,
    pub bye: bool,
}

impl Node {
    fn new(key: MatchKey) -> Self {
        Self {
            key,
            slot1: None,
            slot2: None,
            winner_to: None,
            loser_to: None,
            bye: false,
        }
    }

    pub fn set_slot(&mut self, slot: Slot, registration_id: RegistrationId) {
        match slot {
            Slot::One => self.slot1 = Some(registration_id),
            Slot::Two => self.slot2 = Some(registration_id),
        }
    }
}

/// All matches of one bracket, in creation order.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
    index: HashMap<MatchKey, usize>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty match. Creation order is the order ids are later assigned in.
    pub fn insert(&mut self, key: MatchKey) {
        debug_assert!(!self.index.contains_key(&key), "duplicate match {:?}", key);
        self.index.insert(key, self.nodes.len());
        self.nodes.push(Node::new(key));
    }

    pub fn contains(&self, key: &MatchKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &MatchKey) -> Option<&Node> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    pub fn get_mut(&mut self, key: &MatchKey) -> Option<&mut Node> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.nodes[i]),
            None => None,
        }
    }

    /// Keys of every match in `(bracket, round)`, position ascending.
    pub fn round_keys(&self, bracket: BracketType, round: u32) -> Vec<MatchKey> {
        self.nodes
            .iter()
            .map(|n| n.key)
            .filter(|k| k.bracket == bracket && k.round == round)
            .collect()
    }

    pub fn keys(&self, bracket: BracketType) -> Vec<MatchKey> {
        self.nodes
            .iter()
            .map(|n| n.key)
            .filter(|k| k.bracket == bracket)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Point the winner of `from` at `route`. Ignored when the target does not exist.
    pub fn route_winner(&mut self, from: MatchKey, route: Route) {
        if !self.contains(&route.to) {
            return;
        }
        if let Some(node) = self.get_mut(&from) {
            node.winner_to = Some(route);
        }
    }

    /// Point the loser of `from` at `route`. Ignored when the target does not exist.
    pub fn route_loser(&mut self, from: MatchKey, route: Route) {
        if !self.contains(&route.to) {
            return;
        }
        if let Some(node) = self.get_mut(&from) {
            node.loser_to = Some(route);
        }
    }

    /// Assign ids (one factory call per match, creation order) and flatten into match records.
    pub fn into_matches<F>(self, event_id: &str, mut id_factory: F) -> Vec<BracketMatch>
    where
        F: FnMut() -> MatchId,
    {
        let ids: Vec<MatchId> = self.nodes.iter().map(|_| id_factory()).collect();
        let id_of = |key: &MatchKey| -> MatchId { ids[self.index[key]].clone() };

        self.nodes
            .iter()
            .zip(ids.iter())
            .map(|(node, id)| BracketMatch {
                id: id.clone(),
                event_id: event_id.to_string(),
                round: node.key.round,
                bracket_position: node.key.position,
                match_number: node.key.position + 1,
                slot1: node.slot1.clone(),
                slot2: node.slot2.clone(),
                winner_to: node.winner_to.map(|r| id_of(&r.to)),
                winner_to_slot: node.winner_to.map(|r| r.slot),
                loser_to: node.loser_to.map(|r| id_of(&r.to)),
                loser_to_slot: node.loser_to.map(|r| r.slot),
                bracket_type: node.key.bracket,
                bye: node.bye,
            })
            .collect()
    }
}
