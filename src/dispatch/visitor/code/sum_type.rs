//! Closed tagged union dispatch.
//!
//! Shapes are stored by value in an enum; `translate` is an exhaustive
//! `match`. No vtables and no per-shape allocation, but a new kind is a
//! compile error at every match until it is handled.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
}

impl Shape {
    #[inline(always)]
    pub fn translate(&mut self, v: &Vector3D) {
        match self {
            Shape::Circle(c) => c.center = c.center + *v,
            Shape::Square(s) => s.center = s.center + *v,
        }
    }

    pub fn center(&self) -> Vector3D {
        match self {
            Shape::Circle(c) => c.center,
            Shape::Square(s) => s.center,
        }
    }
}

impl From<&ShapeRecipe> for Shape {
    fn from(recipe: &ShapeRecipe) -> Self {
        match recipe.kind {
            ShapeKind::Circle => Shape::Circle(recipe.to_circle()),
            ShapeKind::Square => Shape::Square(recipe.to_square()),
        }
    }
}

pub struct Shapes(Vec<Shape>);

#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        s.translate(v);
    }
}

pub fn build(recipes: &[ShapeRecipe]) -> Box<dyn ShapeCollection> {
    Box::new(Shapes(recipes.iter().map(Shape::from).collect()))
}

impl ShapeCollection for Shapes {
    fn translate(&mut self, offset: &Vector3D) {
        translate(self, offset)
    }

    fn centers(&self) -> Vec<Vector3D> {
        self.0.iter().map(Shape::center).collect()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
