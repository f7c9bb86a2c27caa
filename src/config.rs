//! Run configuration.
//!
//! Defaults reproduce the fixed benchmark setup: 100 shapes translated
//! 2 500 000 times, one timed pass per variant. Every field can be
//! overridden from the command line.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::utils::timer::{PinStrategy, TimingConfig};
use crate::workload::Workload;

/// Number of shapes in every collection.
pub const SHAPE_COUNT: usize = 100;

/// Translation steps in single-pass mode.
pub const STEP_COUNT: usize = 2_500_000;

/// Translation steps per sample in statistical mode.
pub const STATS_STEP_COUNT: usize = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One wall-clock timed pass per variant, reported in seconds
    #[default]
    SinglePass,
    /// Warmup, shuffled repeated samples, statistics table
    Statistical,
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub mode: Mode,
    pub shape_count: usize,
    /// `None` picks the default for the mode
    pub steps: Option<usize>,
    /// `None` draws a fresh seed from OS entropy
    pub seed: Option<u64>,
    pub runs_per_variant: usize,
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Run only this suite
    pub suite: Option<String>,
    pub csv_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            mode: Mode::default(),
            shape_count: SHAPE_COUNT,
            steps: None,
            seed: None,
            runs_per_variant: timing.runs_per_variant,
            warmup_iterations: timing.warmup_iterations,
            pin_strategy: timing.pin_strategy,
            suite: None,
            csv_path: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_count == 0 {
            return Err(ConfigError::ZeroShapes);
        }
        if self.steps == Some(0) {
            return Err(ConfigError::ZeroSteps);
        }
        if self.mode == Mode::Statistical && self.runs_per_variant == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.steps.unwrap_or(match self.mode {
            Mode::SinglePass => STEP_COUNT,
            Mode::Statistical => STATS_STEP_COUNT,
        })
    }

    /// Resolve the seed once; every variant replays from it.
    pub fn workload(&self) -> Workload {
        let seed = self.seed.unwrap_or_else(rand::random);
        Workload::new(self.shape_count, self.step_count(), seed)
    }

    pub fn timing(&self, workload: &Workload) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs_per_variant,
            warmup_iterations: self.warmup_iterations,
            pin_strategy: self.pin_strategy,
            schedule_seed: workload.seed.rotate_left(17),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_setup() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        let workload = config.workload();
        assert_eq!(workload.shape_count, 100);
        assert_eq!(workload.steps, 2_500_000);
    }

    #[test]
    fn test_statistical_default_steps() {
        let config = RunConfig {
            mode: Mode::Statistical,
            ..RunConfig::default()
        };
        assert_eq!(config.step_count(), STATS_STEP_COUNT);
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        let config = RunConfig {
            seed: Some(99),
            steps: Some(3),
            ..RunConfig::default()
        };
        assert_eq!(config.workload(), Workload::new(100, 3, 99));
    }

    #[test]
    fn test_rejects_zero_counts() {
        let zero_shapes = RunConfig {
            shape_count: 0,
            ..RunConfig::default()
        };
        assert!(matches!(zero_shapes.validate(), Err(ConfigError::ZeroShapes)));

        let zero_steps = RunConfig {
            steps: Some(0),
            ..RunConfig::default()
        };
        assert!(matches!(zero_steps.validate(), Err(ConfigError::ZeroSteps)));

        let zero_runs = RunConfig {
            mode: Mode::Statistical,
            runs_per_variant: 0,
            ..RunConfig::default()
        };
        assert!(matches!(zero_runs.validate(), Err(ConfigError::ZeroRuns)));
    }
}
