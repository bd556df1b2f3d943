//! Rotation core: rotates a vector by an angle. With the input vector `(1, 0)` it computes `cos` and `sin`.

use crate::fixed::{angle_from_radians, from_fixed, to_fixed};
use crate::*;

/// CORDIC core in rotation mode.
pub type RotationCore = CordicCore<RotationPreprocessor, RotationOutputStage>;

impl RotationCore {
    /// Builds a rotation core.
    pub fn new(config: CordicConfig) -> Result<Self, ConfigError> {
        let table = ConstantTable::new(&config)?;
        let gain = GainCompensator::new(&config, &table);
        let preprocessor = RotationPreprocessor::new(config, table.clone());
        Ok(Self::from_parts(config, table, Mode::Rotation, preprocessor, RotationOutputStage::new(gain)))
    }

    /// Rotates a single vector. See [`CordicCore::process`].
    pub fn rotate(&mut self, input: RotationInput) -> Result<RotationOutput, CoreError> { self.process(input) }

    /// Returns `(sin, cos)` of `radians`.
    ///
    /// The unit vector is encoded with [`CordicConfig::unit_fraction_bits`] fractional bits. Without gain compensation
    /// both values are scaled by `K`.
    pub fn sin_cos(&mut self, radians: f64) -> Result<(f64, f64), CoreError> {
        let fraction_bits = self.config().unit_fraction_bits();
        let input = RotationInput {
            x: to_fixed(1.0, fraction_bits),
            y: 0,
            angle: angle_from_radians(radians, self.config().angle_width),
        };
        let output = self.rotate(input)?;
        Ok((from_fixed(output.sin, fraction_bits), from_fixed(output.cos, fraction_bits)))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quarter_turn() {
        let mut core = RotationCore::new(CordicConfig::default()).unwrap();
        assert_eq!(core.mode(), Mode::Rotation);
        assert_eq!(core.latency(), 17);

        let output = core.rotate(RotationInput { x: 1 << 13, y: 0, angle: 1 << 14 }).unwrap();
        assert!(output.cos.abs() <= 1);
        assert!((output.sin - (1 << 13)).abs() <= 1);
        assert_eq!(core.cycles(), 18);
        assert_eq!(core.occupancy(), 0);
    }

    #[test]
    fn diagonal_vector_keeps_its_length() {
        let mut core = RotationCore::new(CordicConfig::default()).unwrap();
        let unit = 1 << 14;
        let output = core.rotate(RotationInput { x: unit, y: unit, angle: 0 }).unwrap();
        assert!((output.cos - unit).abs() <= 1, "cos {}", output.cos);
        assert!((output.sin - unit).abs() <= 1, "sin {}", output.sin);
    }

    #[test]
    fn sin_cos_helper() {
        let mut core = RotationCore::new(CordicConfig::default()).unwrap();
        let (sin, cos) = core.sin_cos(PI / 6.0).unwrap();
        assert_abs_diff_eq!(sin, 0.5, epsilon = 2e-3);
        assert_abs_diff_eq!(cos, 0.75f64.sqrt(), epsilon = 2e-3);
    }

    #[test]
    fn busy_core_rejects_single_samples() {
        let mut core = RotationCore::new(CordicConfig::default()).unwrap();
        let _ = core.cycle(Valid::valid(RotationInput::default()), Ready::new(false));
        assert_eq!(core.rotate(RotationInput::default()), Err(CoreError::PipelineBusy { in_flight: 1 }));

        core.reset();
        assert_eq!(core.occupancy(), 0);
        assert!(core.rotate(RotationInput::default()).is_ok());
    }

    #[test]
    fn invalid_configuration_is_reported() {
        let config = CordicConfig::default().with_iterations(0);
        assert_eq!(RotationCore::new(config).err(), Some(ConfigError::NoIterations));
    }
}
