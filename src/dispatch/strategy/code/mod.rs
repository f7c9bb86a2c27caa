//! Implementation variants for the strategy suite

pub mod boxed_fn;
pub mod classic;
pub mod fn_pointer;
pub mod inline_fn;

use crate::dispatch::DispatchVariant;

/// Returns all available variants, baseline first
pub fn get_variants() -> Vec<DispatchVariant> {
    vec![
        DispatchVariant {
            name: "classic",
            description: "Box<dyn TranslateStrategy> with one method per kind",
            function: classic::build,
        },
        DispatchVariant {
            name: "boxed-fn",
            description: "Box<dyn Fn(&mut Shape, &Vector3D)> per shape",
            function: boxed_fn::build,
        },
        DispatchVariant {
            name: "inline-fn",
            description: "Hand-rolled type-erased callable in a fixed inline buffer",
            function: inline_fn::build,
        },
        DispatchVariant {
            name: "fn-pointer",
            description: "Plain fn(&mut Shape, &Vector3D) pointer per shape",
            function: fn_pointer::build,
        },
    ]
}
