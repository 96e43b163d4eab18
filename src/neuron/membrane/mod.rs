//! The Hodgkin-Huxley membrane: biophysical constants, per-channel currents,
//! and the four-variable vector field consumed by the integrator

use ode_solvers::SVector;

use super::kinetics::{
    alpha_m, beta_m, alpha_h, beta_h, alpha_n, beta_n,
    m_steady_state, h_steady_state, n_steady_state,
};
use super::stimulus::StepProtocol;


/// State vector layout handed to the integrator, ordered `(v, m, h, n)`
pub type StateVector = SVector<f64, 4>;

/// Fixed biophysical constants of the membrane, set once at construction
/// and shared read-only during integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneParameters {
    /// Membrane capacitance (µF/cm²)
    pub c_m: f64,
    /// Sodium maximum conductance (mS/cm²)
    pub g_na: f64,
    /// Potassium maximum conductance (mS/cm²)
    pub g_k: f64,
    /// Leak maximum conductance (mS/cm²)
    pub g_l: f64,
    /// Sodium Nernst reversal potential (mV)
    pub e_na: f64,
    /// Potassium Nernst reversal potential (mV)
    pub e_k: f64,
    /// Leak Nernst reversal potential (mV)
    pub e_l: f64,
}

impl Default for MembraneParameters {
    fn default() -> Self {
        MembraneParameters {
            c_m: 1.,
            g_na: 120.,
            g_k: 36.,
            g_l: 0.3,
            e_na: 50.,
            e_k: -77.,
            e_l: -54.387,
        }
    }
}

impl MembraneParameters {
    /// Sodium current (µA/cm², positive outward)
    pub fn sodium_current(&self, voltage: f64, m: f64, h: f64) -> f64 {
        self.g_na * m.powi(3) * h * (voltage - self.e_na)
    }

    /// Potassium current (µA/cm², positive outward)
    pub fn potassium_current(&self, voltage: f64, n: f64) -> f64 {
        self.g_k * n.powi(4) * (voltage - self.e_k)
    }

    /// Leak current (µA/cm², positive outward)
    pub fn leak_current(&self, voltage: f64) -> f64 {
        self.g_l * (voltage - self.e_l)
    }

    /// Sum of the three ionic currents at the given state (µA/cm²)
    pub fn ionic_current(&self, state: &MembraneState) -> f64 {
        self.sodium_current(state.v, state.m, state.h)
            + self.potassium_current(state.v, state.n)
            + self.leak_current(state.v)
    }
}

/// Membrane voltage together with the three channel gating variables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneState {
    /// Membrane potential (mV)
    pub v: f64,
    /// Sodium activation gating variable
    pub m: f64,
    /// Sodium inactivation gating variable
    pub h: f64,
    /// Potassium activation gating variable
    pub n: f64,
}

impl MembraneState {
    pub fn new(v: f64, m: f64, h: f64, n: f64) -> Self {
        MembraneState { v, m, h, n }
    }

    /// State at the given voltage with every gating variable at its own
    /// steady state, `alpha / (alpha + beta)`
    pub fn resting(voltage: f64) -> Self {
        MembraneState {
            v: voltage,
            m: m_steady_state(voltage),
            h: h_steady_state(voltage),
            n: n_steady_state(voltage),
        }
    }
}

impl From<MembraneState> for StateVector {
    fn from(state: MembraneState) -> Self {
        StateVector::new(state.v, state.m, state.h, state.n)
    }
}

impl From<StateVector> for MembraneState {
    fn from(y: StateVector) -> Self {
        MembraneState { v: y[0], m: y[1], h: y[2], n: y[3] }
    }
}

/// Instantaneous rate of change of a [`MembraneState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneDerivative {
    /// dV/dt (mV/ms)
    pub dv: f64,
    /// dm/dt (1/ms)
    pub dm: f64,
    /// dh/dt (1/ms)
    pub dh: f64,
    /// dn/dt (1/ms)
    pub dn: f64,
}

/// The four-variable Hodgkin-Huxley vector field, combining channel
/// kinetics, leak and capacitance terms, and the injected-current protocol
#[derive(Debug, Clone, Default)]
pub struct MembraneModel {
    /// Biophysical constants of the membrane
    pub parameters: MembraneParameters,
    /// Externally injected current protocol
    pub stimulus: StepProtocol,
}

impl MembraneModel {
    pub fn new(parameters: MembraneParameters, stimulus: StepProtocol) -> Self {
        MembraneModel { parameters, stimulus }
    }

    /// Rate of change of the state at time `t` (ms); pure and stateless, so
    /// adaptive integrators may probe intermediate and out-of-order times
    pub fn derivative(&self, state: &MembraneState, t: f64) -> MembraneDerivative {
        let MembraneState { v, m, h, n } = *state;

        let injected = self.stimulus.current_at(t);
        let ionic = self.parameters.ionic_current(state);

        MembraneDerivative {
            dv: (injected - ionic) / self.parameters.c_m,
            dm: alpha_m(v) * (1. - m) - beta_m(v) * m,
            dh: alpha_h(v) * (1. - h) - beta_h(v) * h,
            dn: alpha_n(v) * (1. - n) - beta_n(v) * n,
        }
    }
}

impl ode_solvers::System<f64, StateVector> for MembraneModel {
    /// System of ordinary differential equations over `(v, m, h, n)`
    fn system(&self, t: f64, y: &StateVector, dy: &mut StateVector) {
        let derivative = self.derivative(&MembraneState::from(*y), t);

        dy[0] = derivative.dv;
        dy[1] = derivative.dm;
        dy[2] = derivative.dh;
        dy[3] = derivative.dn;
    }

    /// Called at every successful integration step; never stops the integration
    fn solout(&mut self, _t: f64, _y: &StateVector, _dy: &StateVector) -> bool {
        false
    }
}
