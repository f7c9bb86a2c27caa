//! Tests for the strategy suite

use super::code::get_variants;
use crate::dispatch::verify_variants;
use crate::error::VerifyError;
use crate::workload::Workload;

/// Verify all variants end with the same centers as the classic baseline
pub fn verify_all() -> Result<(), VerifyError> {
    for seed in [0x1234_5678, 0xcafe_babe, 7] {
        verify_variants("strategy", &get_variants(), &Workload::new(100, 500, seed))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::strategy::code::{classic, inline_fn};
    use crate::geometry::{Circle, ShapeRecipe, Square, Vector3D};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce identical centers");
    }

    #[test]
    fn test_baseline_is_classic() {
        assert_eq!(get_variants()[0].name, "classic");
    }

    #[test]
    fn test_strategy_mutates_only_its_shape() {
        use classic::{CircleShape, ConcreteTranslateStrategy, Shape, SquareShape};

        let mut circle = CircleShape::new(Circle::default(), Box::new(ConcreteTranslateStrategy));
        let mut square = SquareShape::new(Square::default(), Box::new(ConcreteTranslateStrategy));
        circle.translate(&Vector3D::new(1.0, 0.0, 0.0));

        assert_eq!(circle.center(), Vector3D::new(1.0, 0.0, 0.0));
        assert_eq!(square.center(), Vector3D::ZERO);

        square.translate(&Vector3D::new(0.0, 0.0, -1.0));
        assert_eq!(square.center(), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_inline_strategy_is_shared_by_value() {
        use inline_fn::{CircleShape, CircleStrategy, Shape};

        let prototype = CircleStrategy::new(inline_fn::translate_circle);
        let mut a = CircleShape::new(Circle::default(), prototype.clone());
        let mut b = CircleShape::new(Circle::default(), prototype);

        a.translate(&Vector3D::new(1.0, 1.0, 1.0));
        b.translate(&Vector3D::new(2.0, 2.0, 2.0));

        assert_eq!(a.center(), Vector3D::new(1.0, 1.0, 1.0));
        assert_eq!(b.center(), Vector3D::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_translate_back_and_forth() {
        let start = Vector3D::new(-1.0, 4.0, 0.5);
        let recipes = [
            ShapeRecipe::square(1.0).at(start),
            ShapeRecipe::circle(1.0).at(start),
        ];
        let offset = Vector3D::new(0.5, 0.25, 0.125);

        for variant in get_variants() {
            let mut shapes = (variant.function)(&recipes);
            shapes.translate(&offset);
            shapes.translate(&-offset);
            assert_eq!(shapes.centers(), vec![start, start], "{}", variant.name);
        }
    }
}
