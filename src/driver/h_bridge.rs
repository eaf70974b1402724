use embedded_hal::digital::v2::OutputPin;

use super::{Bridge, Command};
use crate::hal::AnalogOutput;

/// A full H-bridge with two direction pins and one PWM pin.
///
/// | command    | `pos` | `neg` | `pwm`             |
/// |------------|-------|-------|-------------------|
/// | forward    | high  | low   | control value     |
/// | reverse    | low   | high  | control value     |
/// | stop       | low   | high  | 0                 |
///
/// The PWM pin receives the signed control value, so reverse writes a
/// negative value. See [`AnalogOutput`] for how that reaches the hardware.
pub struct HBridge<POS, NEG, PWM> {
    pos: POS,
    neg: NEG,
    pwm: PWM,
}

impl<POS, NEG, PWM> HBridge<POS, NEG, PWM>
where
    POS: OutputPin,
    NEG: OutputPin<Error = POS::Error>,
    PWM: AnalogOutput,
{
    pub fn new(pos: POS, neg: NEG, pwm: PWM) -> Self {
        Self { pos, neg, pwm }
    }

    pub fn into_parts(self) -> (POS, NEG, PWM) {
        (self.pos, self.neg, self.pwm)
    }

    fn set_polarity(&mut self, forward: bool) -> Result<(), POS::Error> {
        if forward {
            self.pos.set_high()?;
            self.neg.set_low()
        } else {
            self.pos.set_low()?;
            self.neg.set_high()
        }
    }
}

impl<POS, NEG, PWM> Bridge for HBridge<POS, NEG, PWM>
where
    POS: OutputPin,
    NEG: OutputPin<Error = POS::Error>,
    PWM: AnalogOutput,
{
    type Error = POS::Error;

    fn output(&mut self, command: Command) -> Result<(), Self::Error> {
        let (forward, duty) = match command {
            Command::Reverse(control) => (false, control),
            Command::Forward(control) => (true, control),
            Command::Stop => (false, 0),
        };

        self.set_polarity(forward)?;
        self.pwm.write_analog(duty);
        Ok(())
    }
}
