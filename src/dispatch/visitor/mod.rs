//! # Visitor Suite
//!
//! Closed-set versus open-set dispatch for translating shapes:
//!
//! - **enum**: explicit kind tag and a `match` at the call site
//! - **object-oriented**: trait objects, one indirect call per shape
//! - **visitor**: double dispatch, two indirect calls per shape
//! - **sum-type** / **either**: shapes stored by value in a tagged union

pub mod code;
pub mod test;

use crate::dispatch::DispatchVariant;
use crate::error::VerifyError;
use crate::registry::{SuiteRunner, VariantClosure};
use crate::workload::Workload;

pub struct VisitorSuiteRunner;

impl SuiteRunner for VisitorSuiteRunner {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn description(&self) -> &'static str {
        "Enum switch vs virtual override vs visitor vs tagged union"
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn variants(&self) -> Vec<DispatchVariant> {
        code::get_variants()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, workload: &Workload) -> Vec<VariantClosure<'a>> {
        crate::dispatch::variant_closures(code::get_variants(), workload)
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
