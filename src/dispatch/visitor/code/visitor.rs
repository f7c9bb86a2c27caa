//! Double dispatch through a visitor.
//!
//! Shapes only know how to `accept` a visitor; the visitor has one method per
//! concrete kind. Adding an operation means adding a visitor, adding a kind
//! means growing the `Visitor` trait.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};

pub trait Visitor {
    fn visit_circle(&self, circle: &mut Circle);
    fn visit_square(&self, square: &mut Square);
}

pub trait Shape {
    fn accept(&mut self, visitor: &dyn Visitor);
    fn center(&self) -> Vector3D;
}

impl Shape for Circle {
    fn accept(&mut self, visitor: &dyn Visitor) {
        visitor.visit_circle(self);
    }

    fn center(&self) -> Vector3D {
        self.center
    }
}

impl Shape for Square {
    fn accept(&mut self, visitor: &dyn Visitor) {
        visitor.visit_square(self);
    }

    fn center(&self) -> Vector3D {
        self.center
    }
}

pub struct Translate {
    pub offset: Vector3D,
}

impl Visitor for Translate {
    fn visit_circle(&self, circle: &mut Circle) {
        circle.center = circle.center + self.offset;
    }

    fn visit_square(&self, square: &mut Square) {
        square.center = square.center + self.offset;
    }
}

pub struct Shapes(Vec<Box<dyn Shape>>);

#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        s.accept(&Translate { offset: *v });
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
