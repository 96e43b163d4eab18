use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid stimulus protocol definitions
pub enum StimulusError {
    /// Step onsets must be strictly increasing
    OnsetsNotIncreasing,
    /// Onset times and current levels must be finite
    NonFiniteEntry,
}

impl Display for StimulusError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            StimulusError::OnsetsNotIncreasing => "Step onsets must be strictly increasing",
            StimulusError::NonFiniteEntry => "Onset times and current levels must be finite",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for StimulusError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for failures while integrating the membrane equations
pub enum SimulationError {
    /// Integrator could not complete the requested time span
    Integration(String),
    /// Integrator produced no output samples
    EmptyTrajectory,
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SimulationError::Integration(err_msg) => write!(f, "Integration failed: {}", err_msg),
            SimulationError::EmptyTrajectory => write!(f, "Integrator produced no output samples"),
        }
    }
}

impl Debug for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}
