use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use pipeflow_cordic::fixed::{angle_error, angle_to_radians, from_fixed, to_fixed};
use pipeflow_cordic::*;
use proptest::prelude::*;

fn polar(config: CordicConfig, x: i64, y: i64) -> VectoringOutput {
    VectoringCore::new(config).unwrap().polar(VectoringInput { x, y }).unwrap()
}

proptest! {
    #[test]
    fn magnitude_and_phase(radius in 0.25f64..1.99, phase in -PI..PI) {
        let config = CordicConfig::default();
        let fraction_bits = config.unit_fraction_bits();
        let x = to_fixed(radius * phase.cos(), fraction_bits);
        let y = to_fixed(radius * phase.sin(), fraction_bits);

        let output = polar(config, x, y);
        let (x, y) = (from_fixed(x, fraction_bits), from_fixed(y, fraction_bits));
        let theta = angle_to_radians(output.theta, config.angle_width);
        prop_assert!(angle_error(theta, y.atan2(x)) <= 2e-3, "theta {} for ({}, {})", theta, x, y);
        prop_assert!((from_fixed(output.mag, fraction_bits) - x.hypot(y)).abs() <= 2e-3);
    }

    #[test]
    fn magnitude_and_phase_high_precision(radius in 0.25f64..1.0, phase in -PI..PI) {
        let config = CordicConfig::default()
            .with_xy_width(24)
            .with_angle_width(24)
            .with_iterations(24)
            .with_guard_bits(5);
        let fraction_bits = config.unit_fraction_bits();
        let x = to_fixed(radius * phase.cos(), fraction_bits);
        let y = to_fixed(radius * phase.sin(), fraction_bits);

        let output = polar(config, x, y);
        let (x, y) = (from_fixed(x, fraction_bits), from_fixed(y, fraction_bits));
        let theta = angle_to_radians(output.theta, config.angle_width);
        prop_assert!(angle_error(theta, y.atan2(x)) <= 2e-5);
        prop_assert!((from_fixed(output.mag, fraction_bits) - x.hypot(y)).abs() <= 2e-5);
    }
}

#[test]
fn third_quadrant_diagonal() {
    let mut core = VectoringCore::new(CordicConfig::default()).unwrap();
    let (mag, theta) = core.to_polar(-1.0, -1.0).unwrap();
    assert_abs_diff_eq!(mag, 2f64.sqrt(), epsilon = 2e-3);
    assert_abs_diff_eq!(theta, -3.0 * PI / 4.0, epsilon = 2e-3);
}

#[test]
fn magnitude_above_one() {
    let mut core = VectoringCore::new(CordicConfig::default()).unwrap();
    let (mag, theta) = core.to_polar(1.3, 0.0).unwrap();
    assert_abs_diff_eq!(mag, 1.3, epsilon = 2e-3);
    assert_abs_diff_eq!(theta, 0.0, epsilon = 2e-3);

    let (mag, theta) = core.to_polar(-0.9, 1.7).unwrap();
    assert_abs_diff_eq!(mag, f64::hypot(-0.9, 1.7), epsilon = 2e-3);
    assert!(angle_error(theta, f64::atan2(1.7, -0.9)) <= 2e-3);
}

#[test]
fn axes_are_exact() {
    let config = CordicConfig::default();
    let unit = to_fixed(1.0, config.unit_fraction_bits());
    let quarter = 1 << (config.angle_width - 2);
    let cases = [((unit, 0), 0), ((0, unit), quarter), ((-unit, 0), -2 * quarter), ((0, -unit), -quarter)];

    for ((x, y), theta) in cases {
        assert_eq!(polar(config, x, y), VectoringOutput { mag: unit, theta }, "({}, {})", x, y);
    }
}

#[test]
fn phase_near_the_negative_axis() {
    let config = CordicConfig::default();
    let unit = to_fixed(1.0, config.unit_fraction_bits());
    for y in [-1, 1] {
        let output = polar(config, -unit, y);
        let theta = angle_to_radians(output.theta, config.angle_width);
        assert!(angle_error(theta, (y as f64).atan2(-unit as f64)) <= 2e-3);
        assert!(angle_error(theta, PI) <= 2e-3);
    }
}

#[test]
fn uncompensated_magnitude_carries_the_gain() {
    let config = CordicConfig::default().with_gain_comp(false);
    let mut core = VectoringCore::new(config).unwrap();
    let gain = core.table().gain();
    for (x, y) in [(0.3, 0.4), (-0.5, 0.2), (-0.1, -0.6), (0.45, -0.45)] {
        let (mag, theta) = core.to_polar(x, y).unwrap();
        assert_abs_diff_eq!(mag, gain * f64::hypot(x, y), epsilon = 2e-3);
        assert!(angle_error(theta, f64::atan2(y, x)) <= 2e-3);
    }
}

#[test]
fn zero_vector_is_defined() {
    let output = polar(CordicConfig::default(), 0, 0);
    assert_eq!(output.mag, 0);
}
