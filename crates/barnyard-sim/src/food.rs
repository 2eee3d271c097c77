//! Food registry
//!
//! Holds the edible items scattered on the farm. Iteration follows insertion
//! order. A linear scan is plenty for the tens of items a farm carries.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::terrain::Terrain;
use crate::types::{planar, FoodId};

/// A single piece of food resting on the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub position: Vec3,
}

impl FoodItem {
    /// Ground-plane position
    pub fn planar(&self) -> Vec2 {
        planar(self.position)
    }
}

/// Ordered, mutable collection of food items
#[derive(Debug, Clone, Default)]
pub struct FoodRegistry {
    items: Vec<FoodItem>,
    next_id: u32,
}

impl FoodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a new item on the ground at `point`, `lift` above the terrain
    pub fn drop(&mut self, point: Vec2, terrain: &Terrain, lift: f32) -> FoodId {
        let id = FoodId(self.next_id);
        self.next_id += 1;
        self.items.push(FoodItem {
            id,
            position: terrain.place(point, lift),
        });
        id
    }

    /// Closest item by planar distance, with that distance.
    ///
    /// Ties go to the earliest inserted item.
    pub fn nearest(&self, point: Vec2) -> Option<(&FoodItem, f32)> {
        let mut best: Option<(&FoodItem, f32)> = None;
        for item in &self.items {
            let dist = item.planar().distance(point);
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((item, dist)),
            }
        }
        best
    }

    /// Take an item out of the registry
    pub fn remove(&mut self, id: FoodId) -> Option<FoodItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(points: &[(f32, f32)]) -> FoodRegistry {
        let terrain = Terrain::default();
        let mut food = FoodRegistry::new();
        for &(x, z) in points {
            food.drop(Vec2::new(x, z), &terrain, 0.3);
        }
        food
    }

    #[test]
    fn test_empty_registry_has_no_nearest() {
        let food = FoodRegistry::new();
        assert!(food.nearest(Vec2::ZERO).is_none());
        assert!(food.is_empty());
    }

    #[test]
    fn test_drop_rests_on_terrain() {
        let terrain = Terrain::default();
        let mut food = FoodRegistry::new();
        let id = food.drop(Vec2::new(12.0, -4.0), &terrain, 0.3);

        let item = food.get(id).unwrap();
        assert!((item.position.y - (terrain.height(12.0, -4.0) + 0.3)).abs() < 1e-6);
        assert_eq!(item.planar(), Vec2::new(12.0, -4.0));
    }

    #[test]
    fn test_nearest_uses_planar_distance() {
        let food = registry_with(&[(10.0, 0.0), (3.0, 4.0), (-8.0, -8.0)]);

        let (item, dist) = food.nearest(Vec2::ZERO).unwrap();
        assert_eq!(item.id, FoodId(1));
        assert!((dist - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_inserted() {
        let food = registry_with(&[(2.0, 0.0), (-2.0, 0.0)]);
        let (item, _) = food.nearest(Vec2::ZERO).unwrap();
        assert_eq!(item.id, FoodId(0));
    }

    #[test]
    fn test_remove_keeps_order_and_ids() {
        let mut food = registry_with(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);

        let removed = food.remove(FoodId(1)).unwrap();
        assert_eq!(removed.id, FoodId(1));
        assert!(food.remove(FoodId(1)).is_none());

        let ids: Vec<FoodId> = food.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![FoodId(0), FoodId(2)]);

        // Ids are never reused
        let terrain = Terrain::default();
        assert_eq!(food.drop(Vec2::ZERO, &terrain, 0.3), FoodId(3));
    }
}
