//! Hodgkin-Huxley membrane excitability: channel gating kinetics, the
//! membrane vector field, injected-current protocols, and a driver that
//! hands the model to an adaptive-step integrator

pub mod kinetics;
pub mod membrane;
pub mod stimulus;

use ndarray::Array1;
use ode_solvers::dopri5::Dopri5;

use crate::error::SimulationError;
pub use membrane::{
    MembraneDerivative, MembraneModel, MembraneParameters, MembraneState, StateVector,
};
pub use stimulus::StepProtocol;


/// Relative tolerance handed to the integrator
const RTOL: f64 = 1e-6;
/// Absolute tolerance handed to the integrator
const ATOL: f64 = 1e-6;

/// Sampled solution of a membrane simulation, one row per output time
#[derive(Debug, Clone, PartialEq)]
pub struct MembraneTrajectory {
    /// Output times (ms)
    pub times: Array1<f64>,
    /// Membrane potential at each output time (mV)
    pub voltages: Array1<f64>,
    /// Sodium activation gating variable at each output time
    pub m: Array1<f64>,
    /// Sodium inactivation gating variable at each output time
    pub h: Array1<f64>,
    /// Potassium activation gating variable at each output time
    pub n: Array1<f64>,
}

impl MembraneTrajectory {
    /// Voltages sampled strictly inside the `(start, end)` time window (ms)
    pub fn voltages_in_window(&self, start: f64, end: f64) -> Vec<f64> {
        self.times.iter()
            .zip(self.voltages.iter())
            .filter(|(t, _)| **t > start && **t < end)
            .map(|(_, voltage)| *voltage)
            .collect()
    }
}

/// Integrates the membrane equations from `initial_state` over
/// `[t_start, t_end]` (ms) under the given stimulus protocol, sampling the
/// dense output every `dt` ms with a Dormand-Prince 5(4) stepper
pub fn run_injection_protocol(
    parameters: MembraneParameters,
    stimulus: StepProtocol,
    initial_state: MembraneState,
    t_start: f64,
    t_end: f64,
    dt: f64,
) -> Result<MembraneTrajectory, SimulationError> {
    let model = MembraneModel::new(parameters, stimulus);

    let mut stepper = Dopri5::new(
        model,
        t_start,
        t_end,
        dt,
        StateVector::from(initial_state),
        RTOL,
        ATOL,
    );

    stepper.integrate()
        .map_err(|err| SimulationError::Integration(err.to_string()))?;

    let times = stepper.x_out();
    let states = stepper.y_out();
    if times.is_empty() {
        return Err(SimulationError::EmptyTrajectory);
    }

    Ok(MembraneTrajectory {
        times: Array1::from_iter(times.iter().copied()),
        voltages: Array1::from_iter(states.iter().map(|y| y[0])),
        m: Array1::from_iter(states.iter().map(|y| y[1])),
        h: Array1::from_iter(states.iter().map(|y| y[2])),
        n: Array1::from_iter(states.iter().map(|y| y[3])),
    })
}

/// Counts action potentials in a voltage trace as excursions that rise from
/// below `lower` to above `upper` before falling back below `lower` again
pub fn count_action_potentials(voltages: &[f64], lower: f64, upper: f64) -> usize {
    let mut count = 0;
    let mut below_lower_seen = false;
    let mut peaked = false;

    for &voltage in voltages {
        if voltage < lower {
            if peaked {
                count += 1;
                peaked = false;
            }

            below_lower_seen = true;
        } else if voltage > upper && below_lower_seen {
            peaked = true;
            below_lower_seen = false;
        }
    }

    count
}
