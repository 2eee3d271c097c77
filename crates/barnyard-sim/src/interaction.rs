//! Interaction bridge
//!
//! The renderer resolves a pointer to one visual part. [`HitIndex`] maps that
//! part back to the animal owning it without walking any scene graph; the
//! reverse index is filled once when the animal spawns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, PartId, Species};

/// Kind of mesh making up an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Body,
    Head,
    Snout,
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    /// Front left, front right, back left, back right
    Leg(u8),
    Tail,
}

const PIG_PARTS: &[PartKind] = &[
    PartKind::Body,
    PartKind::Head,
    PartKind::Snout,
    PartKind::LeftEye,
    PartKind::RightEye,
    PartKind::LeftEar,
    PartKind::RightEar,
    PartKind::Leg(0),
    PartKind::Leg(1),
    PartKind::Leg(2),
    PartKind::Leg(3),
    PartKind::Tail,
];

const DOG_PARTS: &[PartKind] = &[
    PartKind::Body,
    PartKind::Head,
    PartKind::Snout,
    PartKind::Nose,
    PartKind::LeftEye,
    PartKind::RightEye,
    PartKind::LeftEar,
    PartKind::RightEar,
    PartKind::Leg(0),
    PartKind::Leg(1),
    PartKind::Leg(2),
    PartKind::Leg(3),
    PartKind::Tail,
];

impl PartKind {
    /// Parts a species is built from, in build order
    pub fn catalog(species: Species) -> &'static [PartKind] {
        match species {
            Species::Pig => PIG_PARTS,
            Species::Dog => DOG_PARTS,
        }
    }
}

/// A part handed to the renderer at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualPart {
    pub id: PartId,
    pub kind: PartKind,
}

/// Reverse index from visual part to owning agent
#[derive(Debug, Clone, Default)]
pub struct HitIndex {
    owners: HashMap<PartId, AgentId>,
    next_part: u32,
}

impl HitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate ids for every part of `species` and record `agent` as owner
    pub fn register(&mut self, agent: AgentId, species: Species) -> Vec<VisualPart> {
        PartKind::catalog(species)
            .iter()
            .map(|&kind| {
                let id = PartId(self.next_part);
                self.next_part += 1;
                self.owners.insert(id, agent);
                VisualPart { id, kind }
            })
            .collect()
    }

    pub fn owner(&self, part: PartId) -> Option<AgentId> {
        self.owners.get(&part).copied()
    }

    /// Owner of the first part in hit order that belongs to anybody
    pub fn first_owner(&self, hits: &[PartId]) -> Option<AgentId> {
        hits.iter().find_map(|&part| self.owner(part))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_nose_only_on_dog() {
        assert!(!PartKind::catalog(Species::Pig).contains(&PartKind::Nose));
        assert!(PartKind::catalog(Species::Dog).contains(&PartKind::Nose));
        assert_eq!(PartKind::catalog(Species::Pig).len(), 12);
        assert_eq!(PartKind::catalog(Species::Dog).len(), 13);
    }

    #[test]
    fn test_register_maps_every_part() {
        let mut index = HitIndex::new();
        let pig = index.register(AgentId(0), Species::Pig);
        let dog = index.register(AgentId(1), Species::Dog);

        assert_eq!(index.len(), pig.len() + dog.len());
        assert!(pig.iter().all(|part| index.owner(part.id) == Some(AgentId(0))));
        assert!(dog.iter().all(|part| index.owner(part.id) == Some(AgentId(1))));
        assert_eq!(dog[0].id, PartId(pig.len() as u32));
    }

    #[test]
    fn test_unknown_part_has_no_owner() {
        let index = HitIndex::new();
        assert_eq!(index.owner(PartId(99)), None);
        assert_eq!(index.first_owner(&[]), None);
    }

    #[test]
    fn test_first_owner_skips_scenery_hits() {
        let mut index = HitIndex::new();
        let pig = index.register(AgentId(7), Species::Pig);
        let dog = index.register(AgentId(8), Species::Dog);

        let hits = [PartId(500), dog[3].id, pig[0].id];
        assert_eq!(index.first_owner(&hits), Some(AgentId(8)));
    }
}
