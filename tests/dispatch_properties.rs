//! Property-based tests for the translation laws using proptest.
//!
//! Properties verified, for every variant of every suite:
//! - Round trip: +v then -v restores the center
//! - Identity: translating by zero changes nothing
//! - Associativity: v1 then v2 matches one step by v1 + v2
//! - Equivalence: identical workloads give identical centers across variants

use dispatch_bench::dispatch::{all_variants, replay};
use dispatch_bench::geometry::{ShapeRecipe, Vector3D};
use dispatch_bench::workload::Workload;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn vector() -> impl Strategy<Value = Vector3D> {
    (-1.0e3..1.0e3f64, -1.0e3..1.0e3f64, -1.0e3..1.0e3f64)
        .prop_map(|(x, y, z)| Vector3D::new(x, y, z))
}

fn recipe() -> impl Strategy<Value = ShapeRecipe> {
    (any::<bool>(), 0.0..10.0f64, vector()).prop_map(|(is_circle, extent, center)| {
        let recipe = if is_circle {
            ShapeRecipe::circle(extent)
        } else {
            ShapeRecipe::square(extent)
        };
        recipe.at(center)
    })
}

fn assert_close(actual: &[Vector3D], expected: &[Vector3D], variant: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        prop_assert!(
            a.max_abs_diff(e) <= TOLERANCE,
            "{}: expected {:?}, got {:?}",
            variant,
            e,
            a
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_round_trip_restores_center(
        recipes in prop::collection::vec(recipe(), 1..16),
        offset in vector(),
    ) {
        let start: Vec<_> = recipes.iter().map(|r| r.center).collect();
        for variant in all_variants() {
            let mut shapes = (variant.function)(&recipes);
            shapes.translate(&offset);
            shapes.translate(&-offset);
            assert_close(&shapes.centers(), &start, variant.name)?;
        }
    }

    #[test]
    fn prop_zero_offset_is_identity(recipes in prop::collection::vec(recipe(), 0..16)) {
        let start: Vec<_> = recipes.iter().map(|r| r.center).collect();
        for variant in all_variants() {
            let mut shapes = (variant.function)(&recipes);
            shapes.translate(&Vector3D::ZERO);
            prop_assert_eq!(shapes.centers(), start.clone(), "{}", variant.name);
        }
    }

    #[test]
    fn prop_translation_is_associative(
        recipes in prop::collection::vec(recipe(), 1..16),
        v1 in vector(),
        v2 in vector(),
    ) {
        for variant in all_variants() {
            let mut stepwise = (variant.function)(&recipes);
            stepwise.translate(&v1);
            stepwise.translate(&v2);

            let mut combined = (variant.function)(&recipes);
            combined.translate(&(v1 + v2));

            assert_close(&stepwise.centers(), &combined.centers(), variant.name)?;
        }
    }

    #[test]
    fn prop_variants_are_equivalent(
        shape_count in 1..64usize,
        steps in 0..64usize,
        seed in any::<u64>(),
    ) {
        let workload = Workload::new(shape_count, steps, seed);
        let variants = all_variants();
        let expected = replay(&variants[0], &workload).centers();
        for variant in &variants[1..] {
            prop_assert_eq!(replay(variant, &workload).centers(), expected.clone(), "{}", variant.name);
        }
    }
}

#[test]
fn circle_round_trip_scenario() {
    let offset = Vector3D::new(1.0, 2.0, 3.0);
    for variant in all_variants() {
        let mut shapes = (variant.function)(&[ShapeRecipe::circle(1.0)]);
        shapes.translate(&offset);
        shapes.translate(&Vector3D::new(-1.0, -2.0, -3.0));
        assert_eq!(shapes.centers(), vec![Vector3D::ZERO], "{}", variant.name);
    }
}

#[test]
fn circle_and_square_scenario() {
    let recipes = [ShapeRecipe::circle(1.0), ShapeRecipe::square(1.0)];
    let target = Vector3D::new(5.0, 0.0, 0.0);
    for variant in all_variants() {
        let mut shapes = (variant.function)(&recipes);
        shapes.translate(&target);
        assert_eq!(shapes.centers(), vec![target, target], "{}", variant.name);
    }
}
