use embedded_hal::PwmPin;
use num_traits::{NumCast, ToPrimitive};

use super::AnalogOutput;

/// Drives an `embedded-hal` [`PwmPin`] with 8-bit duty cycles.
///
/// `0 ..= 255` is spread over `0 ..= get_max_duty()`. Values outside that
/// range are truncated to their low 8 bits, so `-50` outputs `206`.
pub struct PwmOutput<T> {
    pin: T,
}

impl<T> PwmOutput<T>
where
    T: PwmPin,
    T::Duty: NumCast + ToPrimitive + Copy,
{
    /// Enable `pin` and wrap it.
    pub fn new(mut pin: T) -> Self {
        pin.enable();
        Self { pin }
    }

    pub fn into_inner(self) -> T {
        self.pin
    }

    fn duty(&self, value: i16) -> T::Duty {
        let max = self.pin.get_max_duty();
        let level = value as u8 as u64;
        let duty = max.to_u64().map(|max| max * level / 255);

        duty.and_then(<T::Duty as NumCast>::from).unwrap_or(max)
    }
}

impl<T> AnalogOutput for PwmOutput<T>
where
    T: PwmPin,
    T::Duty: NumCast + ToPrimitive + Copy,
{
    fn write_analog(&mut self, value: i16) {
        let duty = self.duty(value);
        self.pin.set_duty(duty);
    }
}
