use embedded_hal::digital::v2::OutputPin;

use super::{Bridge, Command};
use crate::hal::AnalogOutput;

/// Two half-bridges sharing a motor: each has an enable pin and its own PWM
/// channel, one per direction.
///
/// | command    | enables | `pwm_a`   | `pwm_b`   |
/// |------------|---------|-----------|-----------|
/// | forward    | high    | \|value\| | 0         |
/// | reverse    | high    | 0         | \|value\| |
/// | stop       | low     | 0         | 0         |
///
/// Unlike [`HBridge`](super::HBridge) the PWM channels get the magnitude of
/// the control value.
pub struct HalfBridge<ENA, ENB, PWMA, PWMB> {
    enable_a: ENA,
    enable_b: ENB,
    pwm_a: PWMA,
    pwm_b: PWMB,
}

impl<ENA, ENB, PWMA, PWMB> HalfBridge<ENA, ENB, PWMA, PWMB>
where
    ENA: OutputPin,
    ENB: OutputPin<Error = ENA::Error>,
    PWMA: AnalogOutput,
    PWMB: AnalogOutput,
{
    pub fn new(enable_a: ENA, enable_b: ENB, pwm_a: PWMA, pwm_b: PWMB) -> Self {
        Self {
            enable_a,
            enable_b,
            pwm_a,
            pwm_b,
        }
    }

    pub fn into_parts(self) -> (ENA, ENB, PWMA, PWMB) {
        (self.enable_a, self.enable_b, self.pwm_a, self.pwm_b)
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), ENA::Error> {
        if enabled {
            self.enable_a.set_high()?;
            self.enable_b.set_high()
        } else {
            self.enable_a.set_low()?;
            self.enable_b.set_low()
        }
    }
}

impl<ENA, ENB, PWMA, PWMB> Bridge for HalfBridge<ENA, ENB, PWMA, PWMB>
where
    ENA: OutputPin,
    ENB: OutputPin<Error = ENA::Error>,
    PWMA: AnalogOutput,
    PWMB: AnalogOutput,
{
    type Error = ENA::Error;

    fn output(&mut self, command: Command) -> Result<(), Self::Error> {
        let (enabled, a, b) = match command {
            Command::Reverse(control) => (true, 0, control.saturating_abs()),
            Command::Forward(control) => (true, control.saturating_abs(), 0),
            Command::Stop => (false, 0, 0),
        };

        self.set_enabled(enabled)?;
        self.pwm_a.write_analog(a);
        self.pwm_b.write_analog(b);
        Ok(())
    }
}
