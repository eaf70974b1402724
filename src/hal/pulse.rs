use embedded_hal::digital::v2::InputPin;
use embedded_time::{duration::Microseconds, Clock};

use super::{Level, PulseInput};
use crate::error::PulseError;

/// Measures pulses by polling an `embedded-hal` [`InputPin`] against a
/// microsecond [`Clock`].
pub struct PulseReader<P, C> {
    pin: P,
    clock: C,
}

impl<P, C> PulseReader<P, C>
where
    P: InputPin,
    C: Clock<T = u32>,
{
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    pub fn into_parts(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn micros_since_epoch(&self) -> Result<u32, PulseError<P::Error>> {
        let instant = self.clock.try_now()?;
        Ok(Microseconds::<u32>::try_from(instant.duration_since_epoch())?.0)
    }

    fn is_at(&self, level: Level) -> Result<bool, PulseError<P::Error>> {
        match level {
            Level::High => self.pin.is_high(),
            Level::Low => self.pin.is_low(),
        }
        .map_err(PulseError::Pin)
    }

    /// Spin while the pin's state at `level` equals `state`.
    /// Returns `false` once `timeout` has passed since `start`.
    fn wait_while(
        &self,
        level: Level,
        state: bool,
        start: u32,
        timeout: u32,
    ) -> Result<bool, PulseError<P::Error>> {
        while self.is_at(level)? == state {
            if self.micros_since_epoch()?.wrapping_sub(start) >= timeout {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<P, C> PulseInput for PulseReader<P, C>
where
    P: InputPin,
    C: Clock<T = u32>,
{
    type Error = PulseError<P::Error>;

    fn pulse_width(
        &mut self,
        level: Level,
        timeout: Microseconds<u32>,
    ) -> Result<u32, Self::Error> {
        let timeout = timeout.0;
        let start = self.micros_since_epoch()?;

        // Skip a pulse that was already in progress, then wait for the next one
        if !self.wait_while(level, true, start, timeout)?
            || !self.wait_while(level, false, start, timeout)?
        {
            log::debug!("no {:?} pulse within {}us", level, timeout);
            return Ok(0);
        }

        let pulse_start = self.micros_since_epoch()?;
        if !self.wait_while(level, true, start, timeout)? {
            log::debug!("{:?} pulse outlasted {}us", level, timeout);
            return Ok(0);
        }

        let width = self.micros_since_epoch()?.wrapping_sub(pulse_start);
        log::trace!("{:?} pulse of {}us", level, width);
        Ok(width)
    }
}
