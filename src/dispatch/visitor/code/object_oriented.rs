//! Virtual override dispatch.
//!
//! Each kind implements `Shape::translate`; the collection holds trait
//! objects and every call goes through the vtable. New kinds can be added
//! without touching the collection-level loop.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};

pub trait Shape {
    fn translate(&mut self, v: &Vector3D);
    fn center(&self) -> Vector3D;
}

impl Shape for Circle {
    fn translate(&mut self, v: &Vector3D) {
        self.center = self.center + *v;
    }

    fn center(&self) -> Vector3D {
        self.center
    }
}

impl Shape for Square {
    fn translate(&mut self, v: &Vector3D) {
        self.center = self.center + *v;
    }

    fn center(&self) -> Vector3D {
        self.center
    }
}

pub struct Shapes(Vec<Box<dyn Shape>>);

#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        s.translate(v);
    }
}

pub fn build(recipes: &[ShapeRecipe]) -> Box<dyn ShapeCollection> {
    let shapes = recipes
        .iter()
        .map(|r| -> Box<dyn Shape> {
            match r.kind {
                ShapeKind::Circle => Box::new(r.to_circle()),
                ShapeKind::Square => Box::new(r.to_square()),
            }
        })
        .collect();
    Box::new(Shapes(shapes))
}

impl ShapeCollection for Shapes {
    fn translate(&mut self, offset: &Vector3D) {
        translate(self, offset)
    }

    fn centers(&self) -> Vec<Vector3D> {
        self.0.iter().map(|s| s.center()).collect()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
