//! Classic strategy pattern.
//!
//! Every shape owns a heap-allocated `dyn TranslateStrategy` with one method
//! per concrete kind. Translating costs the shape's own virtual call plus the
//! strategy's.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};

pub trait TranslateStrategy {
    fn translate_circle(&self, circle: &mut Circle, v: &Vector3D);
    fn translate_square(&self, square: &mut Square, v: &Vector3D);
}

pub struct ConcreteTranslateStrategy;

impl TranslateStrategy for ConcreteTranslateStrategy {
    fn translate_circle(&self, circle: &mut Circle, v: &Vector3D) {
        circle.center = circle.center + *v;
    }

    fn translate_square(&self, square: &mut Square, v: &Vector3D) {
        square.center = square.center + *v;
    }
}

pub trait Shape {
    fn translate(&mut self, v: &Vector3D);
    fn center(&self) -> Vector3D;
}

pub struct CircleShape {
    circle: Circle,
    strategy: Box<dyn TranslateStrategy>,
}

impl CircleShape {
    pub fn new(circle: Circle, strategy: Box<dyn TranslateStrategy>) -> Self {
        Self { circle, strategy }
    }
}

impl Shape for CircleShape {
    fn translate(&mut self, v: &Vector3D) {
        self.strategy.translate_circle(&mut self.circle, v);
    }

    fn center(&self) -> Vector3D {
        self.circle.center
    }
}

pub struct SquareShape {
    square: Square,
    strategy: Box<dyn TranslateStrategy>,
}

impl SquareShape {
    pub fn new(square: Square, strategy: Box<dyn TranslateStrategy>) -> Self {
        Self { square, strategy }
    }
}

impl Shape for SquareShape {
    fn translate(&mut self, v: &Vector3D) {
        self.strategy.translate_square(&mut self.square, v);
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
                ShapeKind::Circle => Box::new(CircleShape::new(
                    r.to_circle(),
                    Box::new(ConcreteTranslateStrategy),
                )),
                ShapeKind::Square => Box::new(SquareShape::new(
                    r.to_square(),
                    Box::new(ConcreteTranslateStrategy),
                )),
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
