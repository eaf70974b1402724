use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Range};
use crate::RangeLimits;

/// Input range used when none is given.
pub const DEFAULT_INPUT_RANGE: RangeLimits = RangeLimits::new(-255, 255);

/// Construction-time settings of a motor driver.
///
/// Start from one of the presets and adjust with the builder methods:
/// ```
/// use embedded_motor::{DriverConfig, RangeLimits};
///
/// let config = DriverConfig::pulse()
///     .input_range(1000, 2000)
///     .dead_zone(-20, 20)
///     .scale_factor(0.8);
///
/// assert_eq!(config.input, RangeLimits::new(1000, 2000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Raw input values that map onto the full control range.
    pub input: RangeLimits,
    /// Control values inside this range stop the motor.
    pub dead_zone: RangeLimits,
    /// Initial scale factor, clamped into `[0, 1]` by the driver.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
}

fn default_scale_factor() -> f32 {
    1.
}

impl DriverConfig {
    /// Defaults for values supplied directly by the program.
    pub const fn direct() -> Self {
        Self {
            input: DEFAULT_INPUT_RANGE,
            dead_zone: RangeLimits::new(0, 0),
            scale_factor: 1.,
        }
    }

    /// Defaults for values read from a receiver, with a wider dead zone to
    /// absorb stick jitter.
    pub const fn pulse() -> Self {
        Self {
            input: DEFAULT_INPUT_RANGE,
            dead_zone: RangeLimits::new(-10, 10),
            scale_factor: 1.,
        }
    }

    pub fn input_range(mut self, floor: i32, ceiling: i32) -> Self {
        self.input = RangeLimits::new(floor, ceiling);
        self
    }

    pub fn dead_zone(mut self, min: i32, max: i32) -> Self {
        self.dead_zone = RangeLimits::new(min, max);
        self
    }

    pub fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.is_ordered() {
            return Err(ConfigError::InvertedRange(Range::Input));
        }
        if self.input.span() == 0 {
            return Err(ConfigError::DegenerateInputRange);
        }
        if !self.dead_zone.is_ordered() {
            return Err(ConfigError::InvertedRange(Range::DeadZone));
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::direct()
    }
}

#[cfg(test)]
mod tests {
    use super::DriverConfig;
    use crate::error::{ConfigError, Range};
    use crate::RangeLimits;

    #[test]
    fn presets() {
        let direct = DriverConfig::direct();
        assert_eq!(direct.input, RangeLimits::new(-255, 255));
        assert_eq!(direct.dead_zone, RangeLimits::new(0, 0));

        let pulse = DriverConfig::pulse();
        assert_eq!(pulse.input, RangeLimits::new(-255, 255));
        assert_eq!(pulse.dead_zone, RangeLimits::new(-10, 10));
        assert_eq!(DriverConfig::default(), direct);
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            DriverConfig::direct().input_range(10, 10).validate(),
            Err(ConfigError::DegenerateInputRange)
        );
        assert_eq!(
            DriverConfig::direct().input_range(2000, 1000).validate(),
            Err(ConfigError::InvertedRange(Range::Input))
        );
        assert_eq!(
            DriverConfig::pulse().dead_zone(10, -10).validate(),
            Err(ConfigError::InvertedRange(Range::DeadZone))
        );
    }

    #[test]
    fn scale_factor_is_not_clamped_here() {
        // Clamping happens when the driver applies it.
        assert_eq!(DriverConfig::direct().scale_factor(3.).scale_factor, 3.);
    }

    #[test]
    fn loads_from_params_file() {
        let config: DriverConfig = toml::from_str(
            r#"
            input = { minimum = 1000, maximum = 2000 }
            dead_zone = { minimum = -15, maximum = 15 }
            "#,
        )
        .unwrap();

        assert_eq!(config, DriverConfig::pulse().input_range(1000, 2000).dead_zone(-15, 15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn params_file_scale_factor() {
        let config: DriverConfig = toml::from_str(
            r#"
            scale_factor = 0.25
            input = { minimum = -100, maximum = 100 }
            dead_zone = { minimum = 0, maximum = 0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.scale_factor, 0.25);
        assert_eq!(config.input, RangeLimits::new(-100, 100));
    }
}
