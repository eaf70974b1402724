//! Signal conditioning: maps raw input onto a bounded control value.

use num_traits::Float;

use crate::{RangeLimits, CONTROL_MAX, CONTROL_MIN};

/// Remaps a raw input range onto `CONTROL_MIN ..= CONTROL_MAX` and limits the
/// result by a scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalConditioner {
    input: RangeLimits,
    scale_factor: f32,
    control: RangeLimits,
}

impl SignalConditioner {
    /// Create a conditioner for `input` with a scale factor of 1.
    ///
    /// `input` must be ordered with a non-zero span,
    /// see [`DriverConfig::validate`](crate::DriverConfig::validate).
    pub fn new(input: RangeLimits) -> Self {
        let mut conditioner = Self {
            input,
            scale_factor: 1.,
            control: RangeLimits::new(CONTROL_MIN as i32, CONTROL_MAX as i32),
        };
        conditioner.set_scale_factor(1.);
        conditioner
    }

    pub fn input_limits(&self) -> RangeLimits {
        self.input
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Control limits after scaling.
    pub fn control_limits(&self) -> RangeLimits {
        self.control
    }

    /// Set the scale factor, clamped into `[0, 1]`, and return the previous one.
    ///
    /// ```
    /// use embedded_motor::{RangeLimits, SignalConditioner};
    ///
    /// let mut conditioner = SignalConditioner::new(RangeLimits::new(-255, 255));
    /// assert_eq!(conditioner.set_scale_factor(0.5), 1.0);
    /// assert_eq!(conditioner.control_limits(), RangeLimits::new(-128, 127));
    /// ```
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> f32 {
        let clamped = if !(scale_factor >= 0.) {
            0.
        } else if scale_factor > 1. {
            1.
        } else {
            scale_factor
        };
        if clamped != scale_factor {
            log::debug!("scale factor {} clamped to {}", scale_factor, clamped);
        }

        let previous = self.scale_factor;
        self.scale_factor = clamped;
        self.control = RangeLimits::new(
            scaled_limit(CONTROL_MIN, clamped),
            scaled_limit(CONTROL_MAX, clamped),
        );
        previous
    }

    /// Linear remap of `raw` from the input range onto the full control range.
    ///
    /// Values outside the input range extrapolate past the control range.
    pub fn remap(&self, raw: i32) -> i32 {
        let out_span = CONTROL_MAX as i64 - CONTROL_MIN as i64;
        let value = (raw as i64 - self.input.minimum as i64) * out_span / self.input.span()
            + CONTROL_MIN as i64;

        value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Remap `raw` and clamp it to the scaled control limits.
    pub fn condition(&self, raw: i32) -> i16 {
        // control limits never exceed CONTROL_MIN ..= CONTROL_MAX
        self.control.clamp(self.remap(raw)) as i16
    }
}

fn scaled_limit(limit: i16, scale_factor: f32) -> i32 {
    Float::floor(limit as f32 * scale_factor) as i32
}
