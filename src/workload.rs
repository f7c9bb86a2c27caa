//! Seeded shape collections and offset streams.
//!
//! A [`Workload`] is replayed once per variant: the generator is reseeded,
//! the shape recipes are drawn, and the same generator then yields one offset
//! per step. Every variant therefore processes identical shapes and offsets.

use crate::geometry::{ShapeRecipe, Vector3D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workload {
    pub shape_count: usize,
    pub steps: usize,
    pub seed: u64,
}

impl Workload {
    pub fn new(shape_count: usize, steps: usize, seed: u64) -> Self {
        Self {
            shape_count,
            steps,
            seed,
        }
    }

    /// Reseed and draw the shape collection, returning the generator
    /// positioned at the first offset.
    pub fn replay(&self) -> (Vec<ShapeRecipe>, Offsets) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let recipes = (0..self.shape_count)
            .map(|_| sample_recipe(&mut rng))
            .collect();
        (recipes, Offsets { rng })
    }

    /// Draw only the shape collection.
    pub fn recipes(&self) -> Vec<ShapeRecipe> {
        self.replay().0
    }
}

/// Circle or square with equal probability, extent in `[0, 1)`, at the origin.
pub fn sample_recipe<R: Rng + ?Sized>(rng: &mut R) -> ShapeRecipe {
    if rng.random::<f64>() < 0.5 {
        ShapeRecipe::circle(rng.random())
    } else {
        ShapeRecipe::square(rng.random())
    }
}

/// Endless stream of translation offsets `(u, u, 0)`, `u` in `[0, 1)`.
pub struct Offsets {
    rng: StdRng,
}

impl Offsets {
    #[inline(always)]
    pub fn next_offset(&mut self) -> Vector3D {
        let x = self.rng.random();
        let y = self.rng.random();
        Vector3D::new(x, y, 0.0)
    }
}

impl Iterator for Offsets {
    type Item = Vector3D;

    #[inline(always)]
    fn next(&mut self) -> Option<Vector3D> {
        Some(self.next_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;

    #[test]
    fn test_replay_is_deterministic() {
        let workload = Workload::new(64, 10, 0xdead_beef);
        let (a, mut offsets_a) = workload.replay();
        let (b, mut offsets_b) = workload.replay();
        assert_eq!(a, b);
        for _ in 0..workload.steps {
            assert_eq!(offsets_a.next_offset(), offsets_b.next_offset());
        }
    }

    #[test]
    fn test_recipes_are_in_range() {
        let recipes = Workload::new(500, 0, 7).recipes();
        assert_eq!(recipes.len(), 500);
        assert!(recipes.iter().all(|r| (0.0..1.0).contains(&r.extent)));
        assert!(recipes.iter().all(|r| r.center == Vector3D::ZERO));
        // 500 fair coin flips landing all on one side would be a broken sampler
        assert!(recipes.iter().any(|r| r.kind == ShapeKind::Circle));
        assert!(recipes.iter().any(|r| r.kind == ShapeKind::Square));
    }

    #[test]
    fn test_offsets_stay_in_plane() {
        let (_, offsets) = Workload::new(1, 0, 42).replay();
        for offset in offsets.take(100) {
            assert_eq!(offset.z, 0.0);
            assert!((0.0..1.0).contains(&offset.x));
            assert!((0.0..1.0).contains(&offset.y));
        }
    }
}
