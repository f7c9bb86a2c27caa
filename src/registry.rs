//! Suite registry for dynamic suite discovery and execution.
//!
//! This module provides a generic interface for registering and running
//! dispatch suites without needing separate binary files for each.

use crate::dispatch::DispatchVariant;
use crate::error::VerifyError;
use crate::utils::bench::Measurement;
use crate::utils::timer::VariantResult;
use crate::workload::Workload;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A simple closure that runs one measured pass of a variant
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Returns (timing_measurement, optional_result_value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Trait that all dispatch suites must implement
pub trait SuiteRunner: Send + Sync {
    /// Name of the suite (e.g., "visitor")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "dispatch")
    fn category(&self) -> &'static str;

    /// Variant descriptors, baseline first
    fn variants(&self) -> Vec<DispatchVariant>;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure rebuilds the collection and times one pass over the
    /// workload. The runner will handle warmup, timing, and repetition.
    fn get_variant_closures<'a>(&'a self, workload: &Workload) -> Vec<VariantClosure<'a>>;

    /// Verify every variant ends with the same centers as the baseline
    fn verify(&self) -> Result<(), VerifyError>;
}

/// Global registry of all suites
pub struct SuiteRegistry {
    suites: Vec<Box<dyn SuiteRunner>>,
}

impl SuiteRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Register a suite
    pub fn register<S: SuiteRunner + 'static>(&mut self, suite: S) {
        self.suites.push(Box::new(suite));
    }

    /// Get all registered suites
    pub fn all(&self) -> &[Box<dyn SuiteRunner>] {
        &self.suites
    }

    /// Find suite by name
    pub fn find(&self, name: &str) -> Option<&dyn SuiteRunner> {
        self.suites
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// List suite names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.suites.iter().map(|s| s.name()).collect()
    }

    /// List suites by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn SuiteRunner> {
        self.suites
            .iter()
            .filter(|s| s.category() == category)
            .map(|s| s.as_ref())
            .collect()
    }
}

impl Default for SuiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all suites
pub fn build_registry() -> SuiteRegistry {
    let mut registry = SuiteRegistry::new();

    registry.register(crate::dispatch::visitor::VisitorSuiteRunner);
    registry.register(crate::dispatch::strategy::StrategySuiteRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["visitor", "strategy"]);
        assert!(registry.find("visitor").is_some());
        assert!(registry.find("strategy").is_some());
        assert!(registry.find("nope").is_none());
        assert_eq!(registry.by_category("dispatch").len(), 2);
        assert!(registry.by_category("math").is_empty());
    }

    #[test]
    fn test_closures_cover_every_variant() {
        let registry = build_registry();
        let workload = Workload::new(8, 16, 3);

        for suite in registry.all() {
            let names: Vec<_> = suite
                .get_variant_closures(&workload)
                .iter()
                .map(|c| c.name)
                .collect();
            assert_eq!(names, suite.available_variants(), "{}", suite.name());
        }
    }

    #[test]
    fn test_closure_reports_checksum() {
        let registry = build_registry();
        let workload = Workload::new(8, 16, 3);
        let suite = registry.find("visitor").expect("visitor suite registered");

        let mut checksums = suite
            .get_variant_closures(&workload)
            .into_iter()
            .map(|mut c| (c.run)().1);
        let first = checksums.next().flatten().expect("baseline reports a checksum");
        assert!(first > 0.0);
        assert!(checksums.all(|c| c == Some(first)));
    }
}
