//! Hardware seams used by the drivers.
//!
//! Digital outputs and inputs come straight from `embedded-hal`. PWM output and
//! pulse measurement go through [`AnalogOutput`] and [`PulseInput`], with
//! [`PwmOutput`] and [`PulseReader`] adapting `embedded-hal` and
//! `embedded-time` types to them.

use embedded_time::duration::Microseconds;

mod pulse;
pub use pulse::PulseReader;

mod pwm;
pub use pwm::PwmOutput;

/// Logic level of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// A PWM capable output.
pub trait AnalogOutput {
    /// Output a duty cycle in `0 ..= 255`.
    ///
    /// Drivers may hand over negative values, it is up to the implementor to
    /// decide what they mean.
    fn write_analog(&mut self, value: i16);
}

impl<T: AnalogOutput + ?Sized> AnalogOutput for &mut T {
    fn write_analog(&mut self, value: i16) {
        (&mut **self).write_analog(value)
    }
}

/// An input able to measure the width of a single pulse.
pub trait PulseInput {
    type Error;

    /// Block until a pulse at `level` has been seen and return its width in
    /// microseconds, or `0` if none completed within `timeout`.
    fn pulse_width(&mut self, level: Level, timeout: Microseconds<u32>)
        -> Result<u32, Self::Error>;
}

impl<T: PulseInput + ?Sized> PulseInput for &mut T {
    type Error = T::Error;

    fn pulse_width(
        &mut self,
        level: Level,
        timeout: Microseconds<u32>,
    ) -> Result<u32, Self::Error> {
        (&mut **self).pulse_width(level, timeout)
    }
}
