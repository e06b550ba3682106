//! Axis-aligned box overlap
//!
//! Boxes are given as a center and half-extents. The vertical test only
//! checks where the top edge of `a` falls: `a` overlaps when its top edge is
//! strictly inside `b`'s vertical span. Paddle hits depend on that trigger
//! zone (a ball whose top edge has passed a paddle's top edge no longer
//! bounces), so the test is not symmetric in `a` and `b`.

use glam::Vec2;

/// Overlap test between box `a` and box `b`.
#[inline]
pub fn aabb_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
    let a_top = center_a.y + half_a.y;
    center_a.x + half_a.x > center_b.x - half_b.x
        && center_a.x - half_a.x < center_b.x + half_b.x
        && a_top > center_b.y - half_b.y
        && a_top < center_b.y + half_b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UNIT: Vec2 = Vec2::ONE;

    #[test]
    fn test_overlap() {
        assert!(aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(0.5, 0.5), UNIT));
        assert!(aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(-0.5, 0.5), UNIT));
    }

    #[test]
    fn test_no_overlap() {
        assert!(!aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(3.0, 3.0), UNIT));
        assert!(!aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(-3.0, -3.0), UNIT));
    }

    #[test]
    fn test_vertical_test_is_one_sided() {
        // Swapping the boxes changes the answer
        assert!(aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(0.5, 0.5), UNIT));
        assert!(!aabb_overlap(Vec2::new(0.5, 0.5), UNIT, Vec2::ZERO, UNIT));

        // `a`'s top edge (1.0) sits above `b`'s top edge (0.5)
        assert!(!aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(-0.5, -0.5), UNIT));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(2.0, 0.5), UNIT));
        assert!(!aabb_overlap(Vec2::ZERO, UNIT, Vec2::new(-2.0, 0.5), UNIT));
    }

    #[test]
    fn test_ball_against_paddle_zone() {
        let paddle = Vec2::new(80.0, 0.0);
        let paddle_half = Vec2::new(2.5, 12.0);
        let ball_half = Vec2::splat(1.0);

        // Ball top edge must lie strictly inside (-12, 12)
        assert!(aabb_overlap(Vec2::new(78.0, 10.9), ball_half, paddle, paddle_half));
        assert!(!aabb_overlap(Vec2::new(78.0, 11.0), ball_half, paddle, paddle_half));
        assert!(aabb_overlap(Vec2::new(78.0, -12.9), ball_half, paddle, paddle_half));
        assert!(!aabb_overlap(Vec2::new(78.0, -13.0), ball_half, paddle, paddle_half));
    }

    proptest! {
        #[test]
        fn prop_horizontal_test_is_symmetric(
            ax in -100.0f32..100.0,
            bx in -100.0f32..100.0,
            ahx in 0.1f32..20.0,
            bhx in 0.1f32..20.0,
        ) {
            // Vertical placement fixed so the Y test passes; swap only the X extents
            let (ha_y, hb_y) = (0.5, 1.0);
            let forward = aabb_overlap(
                Vec2::new(ax, 0.0),
                Vec2::new(ahx, ha_y),
                Vec2::new(bx, 0.0),
                Vec2::new(bhx, hb_y),
            );
            let swapped = aabb_overlap(
                Vec2::new(bx, 0.0),
                Vec2::new(bhx, ha_y),
                Vec2::new(ax, 0.0),
                Vec2::new(ahx, hb_y),
            );
            prop_assert_eq!(forward, swapped);
        }
    }
}
