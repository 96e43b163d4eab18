//! # Excitable Membrane
//!
//! `excitable_membrane` models the electrical excitability of a neuron
//! membrane with the Hodgkin-Huxley formalism: four coupled ordinary
//! differential equations over membrane voltage and three ion-channel
//! gating variables, driven by an externally injected current protocol.
//! The crate supplies the voltage-dependent channel gating kinetics and
//! the four-variable vector field; numerical integration is delegated to
//! an adaptive-step Dormand-Prince stepper, and plotting of the resulting
//! trajectory is left to the caller.
//!
//! ## Running the two-pulse injection protocol
//!
//! ```rust
//! use excitable_membrane::neuron::{
//!     run_injection_protocol, count_action_potentials,
//!     MembraneParameters, MembraneState, StepProtocol,
//! };
//!
//! // 10 µA/cm² over (100, 200] ms and 35 µA/cm² over (300, 400] ms
//! let trajectory = run_injection_protocol(
//!     MembraneParameters::default(),
//!     StepProtocol::default(),
//!     MembraneState::new(-65., 0.05, 0.6, 0.32),
//!     0.,
//!     450.,
//!     0.01,
//! ).expect("Could not integrate membrane equations");
//!
//! let spikes_during_first_pulse = count_action_potentials(
//!     &trajectory.voltages_in_window(100., 200.),
//!     -50.,
//!     20.,
//! );
//! assert!(spikes_during_first_pulse >= 1);
//! ```
//!
//! ## Evaluating the vector field directly
//!
//! An external integrator only needs the pure derivative function; it may
//! probe intermediate and out-of-order times freely since no state is
//! retained between evaluations.
//!
//! ```rust
//! use excitable_membrane::neuron::{MembraneModel, MembraneState};
//!
//! let model = MembraneModel::default();
//! let resting = MembraneState::resting(-65.);
//!
//! let derivative = model.derivative(&resting, 0.);
//! assert!(derivative.dm.abs() < 1e-12);
//! ```

pub mod error;
pub mod neuron;
