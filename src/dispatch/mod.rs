//! # Shape Translation Dispatch
//!
//! Every variant in this module implements the same operation, translating
//! each shape of a heterogeneous collection by an offset, through a different
//! dispatch mechanism. Variants are grouped into two suites:
//!
//! - [`visitor`]: tagged switch, trait-object override, double-dispatch
//!   visitor and two closed tagged unions
//! - [`strategy`]: per-shape strategy objects, boxed closures, an inline
//!   type-erased callable and plain function pointers
//!
//! Variants are compared against each other, never against a single
//! "correct" mechanism. The first variant of a suite is only the baseline for
//! the speedup column.

pub mod strategy;
pub mod visitor;

use crate::error::VerifyError;
use crate::geometry::{ShapeRecipe, Vector3D};
use crate::registry::VariantClosure;
use crate::utils::bench::Measurement;
use crate::utils::VariantInfo;
use crate::workload::Workload;
use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A shape collection owned by one dispatch variant.
pub trait ShapeCollection {
    /// Translate every shape's center by `offset`.
    fn translate(&mut self, offset: &Vector3D);

    /// Centers in insertion order.
    fn centers(&self) -> Vec<Vector3D>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of every center coordinate, reported as the result sample.
    fn checksum(&self) -> f64 {
        self.centers().iter().map(|c| c.x + c.y + c.z).sum()
    }
}

/// Builds a variant's collection from shared recipes.
pub type BuildFn = fn(&[ShapeRecipe]) -> Box<dyn ShapeCollection>;

pub type DispatchVariant = VariantInfo<BuildFn>;

/// Apply `workload.steps` offsets to a freshly built collection.
///
/// Returns the final collection so callers can inspect the centers.
pub fn replay(variant: &DispatchVariant, workload: &Workload) -> Box<dyn ShapeCollection> {
    let (recipes, offsets) = workload.replay();
    let mut shapes = (variant.function)(&recipes);
    for offset in offsets.take(workload.steps) {
        shapes.translate(&offset);
    }
    shapes
}

/// One wall-clock timed pass: build, then translate `workload.steps` times.
///
/// Construction is excluded from the measurement; drawing the offsets is
/// included, the same for every variant.
pub fn time_single_pass(variant: &DispatchVariant, workload: &Workload) -> (Duration, f64) {
    let (recipes, mut offsets) = workload.replay();
    let mut shapes = (variant.function)(&recipes);

    let start = Instant::now();
    for _ in 0..workload.steps {
        shapes.translate(black_box(&offsets.next_offset()));
    }
    let elapsed = start.elapsed();

    (elapsed, black_box(shapes.checksum()))
}

/// Wrap each variant in a closure that rebuilds its collection and measures
/// one full pass over the workload.
pub fn variant_closures<'a>(
    variants: Vec<DispatchVariant>,
    workload: &Workload,
) -> Vec<VariantClosure<'a>> {
    let recipes: Arc<Vec<ShapeRecipe>> = Arc::new(workload.recipes());
    let workload = *workload;

    variants
        .into_iter()
        .map(|v| {
            let recipes = Arc::clone(&recipes);
            let build = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let mut shapes = build(&recipes);
                    let (_, mut offsets) = workload.replay();
                    let (elapsed, _): (Measurement, _) = crate::measure!({
                        for _ in 0..workload.steps {
                            shapes.translate(black_box(&offsets.next_offset()));
                        }
                    });
                    (elapsed, Some(shapes.checksum()))
                }),
            }
        })
        .collect()
}

/// Check that every variant ends with exactly the centers of the first one.
///
/// All variants apply the same additions in the same order, so centers must
/// match bit for bit.
pub fn verify_variants(
    suite: &'static str,
    variants: &[DispatchVariant],
    workload: &Workload,
) -> Result<(), VerifyError> {
    let reference = variants.first().ok_or(VerifyError::NoVariants { suite })?;
    let expected = replay(reference, workload).centers();

    if expected.len() != workload.shape_count {
        return Err(VerifyError::ShapeCount {
            variant: reference.name,
            expected: workload.shape_count,
            actual: expected.len(),
        });
    }

    for variant in &variants[1..] {
        let actual = replay(variant, workload).centers();
        if actual.len() != expected.len() {
            return Err(VerifyError::ShapeCount {
                variant: variant.name,
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        if let Some((index, (e, a))) = expected
            .iter()
            .zip(&actual)
            .enumerate()
            .find(|(_, (e, a))| e != a)
        {
            return Err(VerifyError::Diverged {
                variant: variant.name,
                reference: reference.name,
                index,
                expected: *e,
                actual: *a,
            });
        }
    }

    Ok(())
}

/// All variants of both suites, visitor suite first.
pub fn all_variants() -> Vec<DispatchVariant> {
    let mut variants = visitor::code::get_variants();
    variants.extend(strategy::code::get_variants());
    variants
}
