//! Sphere-overlap collision test
//!
//! Every gameplay collision reduces to one pairwise sphere check. The radii
//! fed in are interaction radii from `consts`, not visual geometry.

use glam::Vec3;

/// True iff two spheres overlap. Strict inequality: spheres that exactly
/// touch do not count as overlapping.
#[inline]
pub fn overlaps(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    pos_a.distance(pos_b) < radius_a + radius_b
}
