//! Axis-aligned collision boxes for the cat and obstacles
//!
//! Coordinates are field pixels: x grows rightward, y grows downward,
//! the ground's top edge sits at `FIELD_BASELINE`.

use glam::Vec2;

use super::state::ObstacleKind;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Standard overlap test; touching edges do not count as a hit
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Cat box at its fixed horizontal slot, `height` pixels above the ground
pub fn cat_hitbox(height: f32) -> Aabb {
    Aabb::from_pos_size(
        Vec2::new(CAT_X, FIELD_BASELINE - CAT_HEIGHT - height),
        Vec2::new(CAT_WIDTH, CAT_HEIGHT),
    )
}

/// Obstacle box at scroll position `x`. Pits are wider and sunk into the
/// ground; every other kind sits on the ground surface.
pub fn obstacle_hitbox(kind: ObstacleKind, x: f32) -> Aabb {
    let (top, size) = match kind {
        ObstacleKind::Pit => (FIELD_BASELINE, Vec2::new(PIT_WIDTH, PIT_HEIGHT)),
        _ => (
            FIELD_BASELINE - OBSTACLE_HEIGHT,
            Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        ),
    };
    Aabb::from_pos_size(Vec2::new(x, top), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        let c = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(30.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_grounded_cat_hits_surface_obstacle() {
        let cat = cat_hitbox(0.0);
        let dog = obstacle_hitbox(ObstacleKind::Dog, CAT_X);
        assert!(cat.overlaps(&dog));
    }

    #[test]
    fn test_high_jump_clears_surface_obstacle() {
        // Above the obstacle's 20 px height the cat's bottom edge is clear
        let cat = cat_hitbox(OBSTACLE_HEIGHT + 1.0);
        let chair = obstacle_hitbox(ObstacleKind::Chair, CAT_X);
        assert!(!cat.overlaps(&chair));
    }

    #[test]
    fn test_pit_sits_below_the_cat() {
        // The pit's box starts at the baseline, so even a grounded cat
        // only ever touches its top edge
        let cat = cat_hitbox(0.0);
        let pit = obstacle_hitbox(ObstacleKind::Pit, CAT_X);
        assert!(!cat.overlaps(&pit));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -50.0f32..850.0,
            height in 0.0f32..200.0,
            kind_index in 0usize..4,
        ) {
            let cat = cat_hitbox(height);
            let obstacle = obstacle_hitbox(ObstacleKind::ALL[kind_index], ax);
            prop_assert_eq!(cat.overlaps(&obstacle), obstacle.overlaps(&cat));
        }
    }
}
