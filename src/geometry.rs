//! # Geometry
//!
//! Value types shared by every dispatch variant: the translation vector and
//! the two concrete shape kinds. The set of kinds is closed; variants that
//! model open-set polymorphism still only ever see circles and squares.

use std::ops::{Add, Neg, Sub};

/// A point or offset in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Largest per-axis distance to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl Add for Vector3D {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub center: Vector3D,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Square {
    pub side: f64,
    pub center: Vector3D,
}

/// The closed set of shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

/// Dispatch-independent description of one shape.
///
/// Every variant builds its own representation from the same recipes, so all
/// variants start a run from an identical collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeRecipe {
    pub kind: ShapeKind,
    /// Radius for circles, side length for squares.
    pub extent: f64,
    pub center: Vector3D,
}

impl ShapeRecipe {
    pub const fn circle(radius: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            extent: radius,
            center: Vector3D::ZERO,
        }
    }

    pub const fn square(side: f64) -> Self {
        Self {
            kind: ShapeKind::Square,
            extent: side,
            center: Vector3D::ZERO,
        }
    }

    pub fn at(mut self, center: Vector3D) -> Self {
        self.center = center;
        self
    }

    pub fn to_circle(&self) -> Circle {
        Circle {
            radius: self.extent,
            center: self.center,
        }
    }

    pub fn to_square(&self) -> Square {
        Square {
            side: self.extent,
            center: self.center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(0.5, -2.0, 4.0);
        assert_eq!(a + b, Vector3D::new(1.5, 0.0, 7.0));
    }

    #[test]
    fn test_vector_neg_cancels() {
        let a = Vector3D::new(1.25, -7.5, 3.0);
        assert_eq!(a + (-a), Vector3D::ZERO);
        assert_eq!(a - a, Vector3D::ZERO);
    }

    #[test]
    fn test_recipe_conversion() {
        let center = Vector3D::new(1.0, 1.0, 1.0);
        let circle = ShapeRecipe::circle(2.0).at(center).to_circle();
        assert_eq!(circle.radius, 2.0);
        assert_eq!(circle.center, center);

        let square = ShapeRecipe::square(3.0).to_square();
        assert_eq!(square.side, 3.0);
        assert_eq!(square.center, Vector3D::ZERO);
    }
}
