//! Tagged union from the `either` crate.
//!
//! Same closed-set layout as [`super::sum_type`], but the union is the
//! library's generic `Either<Circle, Square>` and visitation goes through
//! `for_both!`, which expands the same body once per alternative.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};
use either::{for_both, Either};

pub type Shape = Either<Circle, Square>;

pub struct Shapes(Vec<Shape>);

#[inline(always)]
fn translate_one(shape: &mut Shape, v: &Vector3D) {
    for_both!(shape, s => s.center = s.center + *v);
}

#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        translate_one(s, v);
    }
}

pub fn build(recipes: &[ShapeRecipe]) -> Box<dyn ShapeCollection> {
    let shapes = recipes
        .iter()
        .map(|r| match r.kind {
            ShapeKind::Circle => Either::Left(r.to_circle()),
            ShapeKind::Square => Either::Right(r.to_square()),
        })
        .collect();
    Box::new(Shapes(shapes))
}

impl ShapeCollection for Shapes {
    fn translate(&mut self, offset: &Vector3D) {
        translate(self, offset)
    }

    fn centers(&self) -> Vec<Vector3D> {
        self.0.iter().map(|s| for_both!(s, s => s.center)).collect()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
