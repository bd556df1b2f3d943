//! Configuration of a CORDIC core.

use pipeflow::clog2;

use crate::constants::*;
use crate::ConfigError;

/// CORDIC mode. Fixed when a pipeline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Rotates the input vector by the residual angle, driving the residual to zero.
    Rotation,

    /// Rotates the input vector onto the positive x-axis, accumulating the angle removed.
    Vectoring,
}

/// Parameters of a CORDIC core, fixed per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CordicConfig {
    /// Width of x/y at the core boundary.
    pub xy_width: usize,

    /// Width of angles. The full range spans one turn.
    pub angle_width: usize,

    /// Number of micro-rotations, i.e. pipeline stages.
    pub iterations: usize,

    /// Extra low-order bits of x/y inside the pipeline.
    pub guard_bits: usize,

    /// Whether outputs are multiplied by `1/K`.
    pub gain_comp: bool,
}

impl Default for CordicConfig {
    fn default() -> Self { Self { xy_width: 16, angle_width: 16, iterations: 16, guard_bits: 4, gain_comp: true } }
}

impl CordicConfig {
    /// Sets the x/y width.
    pub const fn with_xy_width(self, xy_width: usize) -> Self { Self { xy_width, ..self } }

    /// Sets the angle width.
    pub const fn with_angle_width(self, angle_width: usize) -> Self { Self { angle_width, ..self } }

    /// Sets the number of iterations.
    pub const fn with_iterations(self, iterations: usize) -> Self { Self { iterations, ..self } }

    /// Sets the number of guard bits.
    pub const fn with_guard_bits(self, guard_bits: usize) -> Self { Self { guard_bits, ..self } }

    /// Enables or disables gain compensation.
    pub const fn with_gain_comp(self, gain_comp: bool) -> Self { Self { gain_comp, ..self } }

    /// Width of x/y inside the pipeline: the boundary width, the guard bits below it and [`HEADROOM_BITS`] above it.
    pub const fn datapath_width(&self) -> usize { self.xy_width + self.guard_bits + HEADROOM_BITS }

    /// Fractional bits of the unit used by the floating-point helpers of the cores: boundary values are in `[-2, 2)`.
    pub const fn unit_fraction_bits(&self) -> usize { self.xy_width.saturating_sub(2) }

    /// Guard bits that keep the truncation error accumulated over `iterations` shifts of both components below one
    /// output LSB.
    pub const fn recommended_guard_bits(&self) -> usize { clog2(self.iterations) + 2 }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.xy_width == 0 {
            return Err(ConfigError::ZeroWidth { name: "xy_width" });
        }
        if self.angle_width == 0 {
            return Err(ConfigError::ZeroWidth { name: "angle_width" });
        }
        if self.angle_width < MIN_ANGLE_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                name: "angle_width",
                width: self.angle_width,
                min: MIN_ANGLE_WIDTH,
            });
        }
        if self.angle_width > MAX_ANGLE_WIDTH {
            return Err(ConfigError::WidthTooLarge {
                name: "angle_width",
                width: self.angle_width,
                max: MAX_ANGLE_WIDTH,
            });
        }
        if self.datapath_width() > MAX_DATAPATH_WIDTH {
            return Err(ConfigError::WidthTooLarge {
                name: "xy_width + guard_bits + headroom",
                width: self.datapath_width(),
                max: MAX_DATAPATH_WIDTH,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.iterations > ATAN_TABLE_LEN {
            return Err(ConfigError::TooManyIterations { iterations: self.iterations, available: ATAN_TABLE_LEN });
        }
        Ok(())
    }
}
