//! Circle-circle collision detection
//!
//! Every entity is a circle. There is no swept test, so a fast bullet can
//! tunnel through a small asteroid between ticks.

use glam::Vec2;

use super::body::Body;
use crate::distance;

/// Strict overlap of two circles (touching edges don't count)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    distance(a_pos, b_pos) < a_radius + b_radius
}

/// Whether two bodies overlap
#[inline]
pub fn collides<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    circles_overlap(
        a.position(),
        a.bounding_radius(),
        b.position(),
        b.bounding_radius(),
    )
}

/// Index of the first body in `others` that overlaps `body`.
///
/// First match in collection order, not the closest one.
pub fn first_collision<A: Body + ?Sized, B: Body>(body: &A, others: &[B]) -> Option<usize> {
    others.iter().position(|other| collides(body, other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Playfield;

    struct Dot {
        pos: Vec2,
        radius: f32,
    }

    impl Body for Dot {
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn bounding_radius(&self) -> f32 {
            self.radius
        }
        fn update(&mut self, _dt: f32, _field: &Playfield) {}
    }

    fn dot(x: f32, y: f32, radius: f32) -> Dot {
        Dot {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_overlap_and_touching() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.9, 0.0), 5.0));
        // Exactly touching is not a hit
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(20.0, 0.0), 5.0));
    }

    #[test]
    fn test_collides_uses_bounding_radius() {
        assert!(collides(&dot(0.0, 0.0, 2.0), &dot(0.0, 50.0, 49.0)));
        assert!(!collides(&dot(0.0, 0.0, 2.0), &dot(0.0, 52.0, 49.0)));
    }

    #[test]
    fn test_first_collision_is_first_in_order_not_closest() {
        let body = dot(0.0, 0.0, 1.0);
        let others = vec![
            dot(100.0, 0.0, 5.0), // miss
            dot(8.0, 0.0, 10.0),  // hit, farther
            dot(1.0, 0.0, 10.0),  // hit, closer
        ];
        assert_eq!(first_collision(&body, &others), Some(1));
    }

    #[test]
    fn test_first_collision_none() {
        let body = dot(0.0, 0.0, 1.0);
        let others = vec![dot(100.0, 0.0, 5.0)];
        assert_eq!(first_collision(&body, &others), None);
        assert_eq!(first_collision::<_, Dot>(&body, &[]), None);
    }
}
