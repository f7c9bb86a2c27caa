//! Tests for the visitor suite

use super::code::get_variants;
use crate::dispatch::verify_variants;
use crate::error::VerifyError;
use crate::workload::Workload;

/// Verify all variants end with the same centers as the enum baseline
pub fn verify_all() -> Result<(), VerifyError> {
    for seed in [0x1234_5678, 0xdead_beef, 42] {
        verify_variants("visitor", &get_variants(), &Workload::new(100, 500, seed))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::visitor::code::{enum_tag, sum_type, visitor};
    use crate::geometry::{Circle, ShapeRecipe, Square, Vector3D};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce identical centers");
    }

    #[test]
    fn test_baseline_is_enum() {
        assert_eq!(get_variants()[0].name, "enum");
    }

    #[test]
    fn test_enum_tag_matches_body() {
        let circle = enum_tag::Shape::circle(Circle::default());
        let square = enum_tag::Shape::square(Square::default());
        assert_eq!(circle.shape_type(), enum_tag::ShapeType::Circle);
        assert_eq!(square.shape_type(), enum_tag::ShapeType::Square);
    }

    #[test]
    fn test_translate_visitor_touches_only_center() {
        use visitor::{Translate, Visitor};

        let offset = Vector3D::new(1.0, -1.0, 0.5);
        let mut circle = Circle {
            radius: 3.0,
            center: Vector3D::ZERO,
        };
        let mut square = Square {
            side: 2.0,
            center: Vector3D::new(1.0, 1.0, 1.0),
        };

        let translate = Translate { offset };
        translate.visit_circle(&mut circle);
        translate.visit_square(&mut square);

        assert_eq!(circle.radius, 3.0);
        assert_eq!(circle.center, offset);
        assert_eq!(square.side, 2.0);
        assert_eq!(square.center, Vector3D::new(2.0, 0.0, 1.5));
    }

    #[test]
    fn test_sum_type_keeps_kind() {
        let mut shape = sum_type::Shape::from(&ShapeRecipe::square(4.0));
        shape.translate(&Vector3D::new(2.0, 2.0, 2.0));
        match shape {
            sum_type::Shape::Square(s) => {
                assert_eq!(s.side, 4.0);
                assert_eq!(s.center, Vector3D::new(2.0, 2.0, 2.0));
            }
            sum_type::Shape::Circle(_) => panic!("square turned into a circle"),
        }
    }

    #[test]
    fn test_repeated_translation_accumulates() {
        let recipes = [ShapeRecipe::circle(1.0), ShapeRecipe::square(1.0)];
        let step = Vector3D::new(0.5, 0.25, 0.0);

        for variant in get_variants() {
            let mut shapes = (variant.function)(&recipes);
            for _ in 0..4 {
                shapes.translate(&step);
            }
            let expected = Vector3D::new(2.0, 1.0, 0.0);
            assert_eq!(shapes.centers(), vec![expected, expected], "{}", variant.name);
        }
    }
}
