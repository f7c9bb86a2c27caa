//! # Strategy Suite
//!
//! Each shape owns the behaviour that translates it. The variants differ in
//! how that behaviour is stored and erased:
//!
//! - **classic**: `Box<dyn TranslateStrategy>`, double virtual call
//! - **boxed-fn**: boxed closure
//! - **inline-fn**: closure erased into a fixed inline buffer, no allocation
//! - **fn-pointer**: plain function pointer

pub mod code;
pub mod test;

use crate::dispatch::DispatchVariant;
use crate::error::VerifyError;
use crate::registry::{SuiteRunner, VariantClosure};
use crate::workload::Workload;

pub struct StrategySuiteRunner;

impl SuiteRunner for StrategySuiteRunner {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn description(&self) -> &'static str {
        "Strategy object vs boxed closure vs inline type-erased callable"
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
