//! Implementation variants for the visitor suite

pub mod either_variant;
pub mod enum_tag;
pub mod object_oriented;
pub mod sum_type;
pub mod visitor;

use crate::dispatch::DispatchVariant;

/// Returns all available variants, baseline first
pub fn get_variants() -> Vec<DispatchVariant> {
    vec![
        DispatchVariant {
            name: "enum",
            description: "Kind tag + match, downcast to the concrete shape",
            function: enum_tag::build,
        },
        DispatchVariant {
            name: "object-oriented",
            description: "Box<dyn Shape> with a translate method (virtual override)",
            function: object_oriented::build,
        },
        DispatchVariant {
            name: "visitor",
            description: "Shape::accept(&dyn Visitor), one visit method per kind",
            function: visitor::build,
        },
        DispatchVariant {
            name: "sum-type",
            description: "enum Shape { Circle, Square } with exhaustive match",
            function: sum_type::build,
        },
        DispatchVariant {
            name: "either",
            description: "either::Either<Circle, Square> visited with for_both!",
            function: either_variant::build,
        },
    ]
}
