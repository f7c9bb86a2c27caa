//! Tagged switch dispatch.
//!
//! Each shape carries an explicit kind tag next to a type-erased body. The
//! collection-level `translate` matches on the tag and downcasts the body to
//! the concrete kind. This is the baseline of the visitor suite: adding a kind
//! means editing the tag enum and every match over it.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};
use std::any::Any;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeType {
    Circle,
    Square,
}

pub struct Shape {
    shape_type: ShapeType,
    body: Box<dyn Any>,
}

impl Shape {
    pub fn circle(circle: Circle) -> Self {
        Self {
            shape_type: ShapeType::Circle,
            body: Box::new(circle),
        }
    }

    pub fn square(square: Square) -> Self {
        Self {
            shape_type: ShapeType::Square,
            body: Box::new(square),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    fn center(&self) -> Vector3D {
        match self.shape_type {
            ShapeType::Circle => {
                let Some(c) = self.body.downcast_ref::<Circle>() else {
                    unreachable!("shape tagged Circle holds another body");
                };
                c.center
            }
            ShapeType::Square => {
                let Some(s) = self.body.downcast_ref::<Square>() else {
                    unreachable!("shape tagged Square holds another body");
                };
                s.center
            }
        }
    }
}

fn translate_circle(c: &mut Circle, v: &Vector3D) {
    c.center = c.center + *v;
}

fn translate_square(s: &mut Square, v: &Vector3D) {
    s.center = s.center + *v;
}

pub struct Shapes(Vec<Shape>);

/// Switch on each shape's tag and forward to the kind-specific function.
///
/// The tag is fixed at construction together with the body. A tag that
/// disagrees with its body is a broken invariant and panics.
#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        match s.shape_type {
            ShapeType::Circle => {
                let Some(c) = s.body.downcast_mut::<Circle>() else {
                    unreachable!("shape tagged Circle holds another body");
                };
                translate_circle(c, v);
            }
            ShapeType::Square => {
                let Some(sq) = s.body.downcast_mut::<Square>() else {
                    unreachable!("shape tagged Square holds another body");
                };
                translate_square(sq, v);
            }
        }
    }
}

pub fn build(recipes: &[ShapeRecipe]) -> Box<dyn ShapeCollection> {
    let shapes = recipes
        .iter()
        .map(|r| match r.kind {
            ShapeKind::Circle => Shape::circle(r.to_circle()),
            ShapeKind::Square => Shape::square(r.to_square()),
        })
        .collect();
    Box::new(Shapes(shapes))
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
