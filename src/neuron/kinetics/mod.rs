//! Voltage-dependent channel gating kinetics for the Hodgkin-Huxley model
//!
//! Every function here is a pure, total function of membrane voltage (mV),
//! returning opening/closing rate coefficients in 1/ms. The two rational
//! coefficients have a removable singularity where numerator and denominator
//! vanish together; the analytic limit is substituted there so the literal
//! formula never produces a NaN.

use rayon::prelude::*;


/// Half-width of the voltage window around a removable singularity within
/// which the analytic limit replaces the literal formula
const SINGULARITY_TOLERANCE: f64 = 1e-7;

/// Sodium activation gate opening rate (1/ms)
pub fn alpha_m(voltage: f64) -> f64 {
    let shifted = voltage + 40.;
    if shifted.abs() < SINGULARITY_TOLERANCE {
        // limit of 0.1x / (1 - e^(-x / 10)) as x approaches 0
        1.
    } else {
        0.1 * shifted / (1. - (-shifted / 10.).exp())
    }
}

/// Sodium activation gate closing rate (1/ms)
pub fn beta_m(voltage: f64) -> f64 {
    4. * (-(voltage + 65.) / 18.).exp()
}

/// Sodium inactivation gate opening rate (1/ms)
pub fn alpha_h(voltage: f64) -> f64 {
    0.07 * (-(voltage + 65.) / 20.).exp()
}

/// Sodium inactivation gate closing rate (1/ms)
pub fn beta_h(voltage: f64) -> f64 {
    1. / (1. + (-(voltage + 35.) / 10.).exp())
}

/// Potassium activation gate opening rate (1/ms)
pub fn alpha_n(voltage: f64) -> f64 {
    let shifted = voltage + 55.;
    if shifted.abs() < SINGULARITY_TOLERANCE {
        // limit of 0.01x / (1 - e^(-x / 10)) as x approaches 0
        0.1
    } else {
        0.01 * shifted / (1. - (-shifted / 10.).exp())
    }
}

/// Potassium activation gate closing rate (1/ms)
pub fn beta_n(voltage: f64) -> f64 {
    0.125 * (-(voltage + 65.) / 80.).exp()
}

/// Steady state of the sodium activation gate at the given voltage
pub fn m_steady_state(voltage: f64) -> f64 {
    let alpha = alpha_m(voltage);
    alpha / (alpha + beta_m(voltage))
}

/// Steady state of the sodium inactivation gate at the given voltage
pub fn h_steady_state(voltage: f64) -> f64 {
    let alpha = alpha_h(voltage);
    alpha / (alpha + beta_h(voltage))
}

/// Steady state of the potassium activation gate at the given voltage
pub fn n_steady_state(voltage: f64) -> f64 {
    let alpha = alpha_n(voltage);
    alpha / (alpha + beta_n(voltage))
}

/// Relaxation time constant of the sodium activation gate (ms)
pub fn m_time_constant(voltage: f64) -> f64 {
    1. / (alpha_m(voltage) + beta_m(voltage))
}

/// Relaxation time constant of the sodium inactivation gate (ms)
pub fn h_time_constant(voltage: f64) -> f64 {
    1. / (alpha_h(voltage) + beta_h(voltage))
}

/// Relaxation time constant of the potassium activation gate (ms)
pub fn n_time_constant(voltage: f64) -> f64 {
    1. / (alpha_n(voltage) + beta_n(voltage))
}

/// Gating steady states and time constants at a single voltage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationPoint {
    /// Membrane potential (mV)
    pub voltage: f64,
    /// Sodium activation steady state
    pub m: f64,
    /// Sodium inactivation steady state
    pub h: f64,
    /// Potassium activation steady state
    pub n: f64,
    /// Sodium activation time constant (ms)
    pub tau_m: f64,
    /// Sodium inactivation time constant (ms)
    pub tau_h: f64,
    /// Potassium activation time constant (ms)
    pub tau_n: f64,
}

/// Evaluates the gating steady states and time constants over a voltage
/// grid, one [`ActivationPoint`] per input voltage, each voltage handled
/// independently in parallel
pub fn activation_curves(voltages: &[f64]) -> Vec<ActivationPoint> {
    voltages.par_iter()
        .map(|&voltage| ActivationPoint {
            voltage,
            m: m_steady_state(voltage),
            h: h_steady_state(voltage),
            n: n_steady_state(voltage),
            tau_m: m_time_constant(voltage),
            tau_h: h_time_constant(voltage),
            tau_n: n_time_constant(voltage),
        })
        .collect()
}
