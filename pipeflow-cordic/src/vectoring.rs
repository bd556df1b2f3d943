//! Vectoring core: computes the magnitude and the phase of a vector.

use crate::fixed::{angle_to_radians, from_fixed, to_fixed};
use crate::*;

/// CORDIC core in vectoring mode.
pub type VectoringCore = CordicCore<VectoringPreprocessor, VectoringOutputStage>;

impl VectoringCore {
    /// Builds a vectoring core.
    pub fn new(config: CordicConfig) -> Result<Self, ConfigError> {
        let table = ConstantTable::new(&config)?;
        let gain = GainCompensator::new(&config, &table);
        let preprocessor = VectoringPreprocessor::new(config, table.clone());
        Ok(Self::from_parts(config, table, Mode::Vectoring, preprocessor, VectoringOutputStage::new(gain)))
    }

    /// Converts a single vector to polar form. See [`CordicCore::process`].
    pub fn polar(&mut self, input: VectoringInput) -> Result<VectoringOutput, CoreError> { self.process(input) }

    /// Returns `(hypot(x, y), atan2(y, x))`, the phase in radians.
    ///
    /// `x` and `y` are encoded with [`CordicConfig::unit_fraction_bits`] fractional bits, so both components and the
    /// magnitude must stay below 2. Without gain compensation the magnitude is scaled by `K` and must stay below `2/K`.
    pub fn to_polar(&mut self, x: f64, y: f64) -> Result<(f64, f64), CoreError> {
        let fraction_bits = self.config().unit_fraction_bits();
        let output = self.polar(VectoringInput { x: to_fixed(x, fraction_bits), y: to_fixed(y, fraction_bits) })?;
        Ok((from_fixed(output.mag, fraction_bits), angle_to_radians(output.theta, self.config().angle_width)))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn third_quadrant() {
        let mut core = VectoringCore::new(CordicConfig::default()).unwrap();
        assert_eq!(core.mode(), Mode::Vectoring);

        let (mag, theta) = core.to_polar(-0.5, -0.5).unwrap();
        assert_abs_diff_eq!(mag, 0.5f64.sqrt(), epsilon = 2e-3);
        assert_abs_diff_eq!(theta, -3.0 * PI / 4.0, epsilon = 2e-3);
    }

    #[test]
    fn axes_are_exact() {
        let mut core = VectoringCore::new(CordicConfig::default()).unwrap();
        let unit = 1 << 13;
        assert_eq!(core.polar(VectoringInput { x: unit, y: 0 }).unwrap(), VectoringOutput { mag: unit, theta: 0 });
        assert_eq!(
            core.polar(VectoringInput { x: 0, y: unit }).unwrap(),
            VectoringOutput { mag: unit, theta: 1 << 14 }
        );
        assert_eq!(
            core.polar(VectoringInput { x: -unit, y: 0 }).unwrap(),
            VectoringOutput { mag: unit, theta: -(1 << 15) }
        );
    }

    #[test]
    fn uncompensated_magnitude_carries_the_gain() {
        let mut core = VectoringCore::new(CordicConfig::default().with_gain_comp(false)).unwrap();
        let gain = core.table().gain();
        let (mag, _) = core.to_polar(0.6, 0.0).unwrap();
        assert_abs_diff_eq!(mag, 0.6 * gain, epsilon = 2e-3);
    }
}
