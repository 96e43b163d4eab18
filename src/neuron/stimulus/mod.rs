//! Injected-current stimulus protocols

use crate::error::StimulusError;


/// A piecewise-constant injected current protocol described as an ordered
/// table of `(onset time, current level)` pairs over a baseline level,
/// modeling an experimenter-controlled stimulus independent of membrane state
#[derive(Debug, Clone, PartialEq)]
pub struct StepProtocol {
    /// Current level before the first onset (µA/cm²)
    baseline: f64,
    /// Strictly increasing onset times (ms) paired with the level that
    /// applies after each onset (µA/cm²)
    steps: Vec<(f64, f64)>,
}

impl StepProtocol {
    /// Builds a protocol from a baseline level and an onset table, rejecting
    /// non-finite entries and onsets that are not strictly increasing
    pub fn new(baseline: f64, steps: Vec<(f64, f64)>) -> Result<Self, StimulusError> {
        let entries_finite = baseline.is_finite()
            && steps.iter().all(|(onset, level)| onset.is_finite() && level.is_finite());
        if !entries_finite {
            return Err(StimulusError::NonFiniteEntry);
        }

        if steps.windows(2).any(|pair| pair[1].0 <= pair[0].0) {
            return Err(StimulusError::OnsetsNotIncreasing);
        }

        Ok(StepProtocol { baseline, steps })
    }

    /// A protocol that injects no current at any time
    pub fn silent() -> Self {
        StepProtocol { baseline: 0., steps: vec![] }
    }

    /// Injected current (µA/cm²) at time `t` (ms); onsets use strict
    /// greater-than semantics, so a sample exactly at an onset still takes
    /// the preceding level
    pub fn current_at(&self, t: f64) -> f64 {
        let mut current = self.baseline;
        for &(onset, level) in self.steps.iter() {
            if t > onset {
                current = level;
            }
        }

        current
    }
}

impl Default for StepProtocol {
    /// The two-pulse protocol: 10 µA/cm² over (100, 200] ms and
    /// 35 µA/cm² over (300, 400] ms, otherwise silent
    fn default() -> Self {
        StepProtocol {
            baseline: 0.,
            steps: vec![(100., 10.), (200., 0.), (300., 35.), (400., 0.)],
        }
    }
}
