#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use excitable_membrane::neuron::kinetics::{
        alpha_m, beta_m, alpha_h, beta_h, alpha_n, beta_n,
        m_steady_state, h_steady_state, n_steady_state,
        m_time_constant, h_time_constant, n_time_constant,
        activation_curves,
    };

    // -100 mV to +50 mV in 0.1 mV increments, including both singular voltages
    fn voltage_sweep() -> Vec<f64> {
        (-1000..=500).map(|i| i as f64 * 0.1).collect()
    }

    #[test]
    pub fn test_rate_coefficients_are_nonnegative_over_sweep() {
        for voltage in voltage_sweep() {
            assert!(alpha_m(voltage) >= 0., "alpha_m({}) = {}", voltage, alpha_m(voltage));
            assert!(alpha_h(voltage) >= 0., "alpha_h({}) = {}", voltage, alpha_h(voltage));
            assert!(alpha_n(voltage) >= 0., "alpha_n({}) = {}", voltage, alpha_n(voltage));
            assert!(beta_m(voltage) > 0., "beta_m({}) = {}", voltage, beta_m(voltage));
            assert!(beta_h(voltage) > 0., "beta_h({}) = {}", voltage, beta_h(voltage));
            assert!(beta_n(voltage) > 0., "beta_n({}) = {}", voltage, beta_n(voltage));
        }
    }

    #[test]
    pub fn test_rate_coefficients_are_finite_over_sweep() {
        for voltage in voltage_sweep() {
            assert!(alpha_m(voltage).is_finite());
            assert!(beta_m(voltage).is_finite());
            assert!(alpha_h(voltage).is_finite());
            assert!(beta_h(voltage).is_finite());
            assert!(alpha_n(voltage).is_finite());
            assert!(beta_n(voltage).is_finite());
        }
    }

    #[test]
    pub fn test_singular_voltages_take_analytic_limits() {
        // alpha_m at -40 mV and alpha_n at -55 mV are 0/0 forms whose
        // limits are the numerator slope over the denominator slope
        assert!(alpha_m(-40.).is_finite());
        assert!(alpha_n(-55.).is_finite());
        assert_relative_eq!(alpha_m(-40.), 1.0, max_relative = 1e-12);
        assert_relative_eq!(alpha_n(-55.), 0.1, max_relative = 1e-12);
    }

    #[test]
    pub fn test_rate_coefficients_are_continuous_across_singularities() {
        assert_abs_diff_eq!(alpha_m(-40.), alpha_m(-40.0001), epsilon = 1e-4);
        assert_abs_diff_eq!(alpha_m(-40.), alpha_m(-39.9999), epsilon = 1e-4);
        assert_abs_diff_eq!(alpha_n(-55.), alpha_n(-55.0001), epsilon = 1e-5);
        assert_abs_diff_eq!(alpha_n(-55.), alpha_n(-54.9999), epsilon = 1e-5);
    }

    #[test]
    pub fn test_steady_states_stay_within_unit_interval() {
        for voltage in voltage_sweep() {
            for steady_state in [
                m_steady_state(voltage),
                h_steady_state(voltage),
                n_steady_state(voltage),
            ] {
                assert!((0. ..=1.).contains(&steady_state), "steady state {} at {} mV", steady_state, voltage);
            }
        }
    }

    #[test]
    pub fn test_time_constants_are_positive() {
        for voltage in voltage_sweep() {
            assert!(m_time_constant(voltage) > 0.);
            assert!(h_time_constant(voltage) > 0.);
            assert!(n_time_constant(voltage) > 0.);
        }
    }

    #[test]
    pub fn test_activation_curves_match_pointwise_evaluation() {
        let voltages = voltage_sweep();
        let curves = activation_curves(&voltages);

        assert_eq!(curves.len(), voltages.len());

        for (point, voltage) in curves.iter().zip(voltages.iter()) {
            assert_eq!(point.voltage, *voltage);
            assert_eq!(point.m, m_steady_state(*voltage));
            assert_eq!(point.h, h_steady_state(*voltage));
            assert_eq!(point.n, n_steady_state(*voltage));
            assert_eq!(point.tau_m, m_time_constant(*voltage));
            assert_eq!(point.tau_h, h_time_constant(*voltage));
            assert_eq!(point.tau_n, n_time_constant(*voltage));
        }
    }

    #[test]
    pub fn test_sodium_activates_and_inactivates_with_depolarization() {
        // m rises and h falls as voltage increases
        assert!(m_steady_state(-100.) < m_steady_state(0.));
        assert!(h_steady_state(-100.) > h_steady_state(0.));
        assert!(n_steady_state(-100.) < n_steady_state(0.));
    }
}
