//! Strategy as a plain function pointer.
//!
//! No erasure beyond the pointer itself: `Copy`, no allocation, one indirect
//! call. Serves as the floor for the other strategy variants.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};

pub type CircleStrategy = fn(&mut Circle, &Vector3D);
pub type SquareStrategy = fn(&mut Square, &Vector3D);

pub fn translate_circle(circle: &mut Circle, v: &Vector3D) {
    circle.center = circle.center + *v;
}

pub fn translate_square(square: &mut Square, v: &Vector3D) {
    square.center = square.center + *v;
}

pub trait Shape {
    fn translate(&mut self, v: &Vector3D);
    fn center(&self) -> Vector3D;
}

pub struct CircleShape {
    circle: Circle,
    strategy: CircleStrategy,
}

impl Shape for CircleShape {
    fn translate(&mut self, v: &Vector3D) {
        (self.strategy)(&mut self.circle, v);
    }

    fn center(&self) -> Vector3D {
        self.circle.center
    }
}

pub struct SquareShape {
    square: Square,
    strategy: SquareStrategy,
}

impl Shape for SquareShape {
    fn translate(&mut self, v: &Vector3D) {
        (self.strategy)(&mut self.square, v);
    }

    fn center(&self) -> Vector3D {
        self.square.center
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
                ShapeKind::Circle => Box::new(CircleShape {
                    circle: r.to_circle(),
                    strategy: translate_circle,
                }),
                ShapeKind::Square => Box::new(SquareShape {
                    square: r.to_square(),
                    strategy: translate_square,
                }),
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
