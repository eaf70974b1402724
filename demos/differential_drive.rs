use std::convert::Infallible;

use embedded_hal::digital::v2::OutputPin;
use embedded_motor::{AnalogOutput, Driver, DriverConfig, DriverPair, HBridge, MotorDriver};

struct ExamplePin(&'static str);

impl OutputPin for ExamplePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        dbg!((self.0, "low"));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        dbg!((self.0, "high"));
        Ok(())
    }
}

struct ExamplePwm(&'static str);

impl AnalogOutput for ExamplePwm {
    fn write_analog(&mut self, value: i16) {
        dbg!((self.0, value));
    }
}

fn motor(
    side: &'static str,
    pos: &'static str,
    neg: &'static str,
) -> Driver<HBridge<ExamplePin, ExamplePin, ExamplePwm>> {
    let bridge = HBridge::new(ExamplePin(pos), ExamplePin(neg), ExamplePwm(side));
    Driver::direct(bridge, DriverConfig::direct().dead_zone(-5, 5)).unwrap()
}

fn main() {
    let mut left = motor("left", "left+", "left-");
    left.set_scale_factor(0.5);

    let mut wheels = DriverPair::new(left, motor("right", "right+", "right-"));

    // spin in place
    wheels.drive(100, -100).unwrap();

    wheels.a().drive(3).unwrap();
}
