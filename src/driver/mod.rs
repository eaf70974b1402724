use core::convert::Infallible;

use embedded_time::duration::Microseconds;

use crate::error::{ConfigError, Error};
use crate::hal::{Level, PulseInput};
use crate::{DriverConfig, MotorDriver, RangeLimits, SignalConditioner};

mod h_bridge;
pub use h_bridge::HBridge;

mod half_bridge;
pub use half_bridge::HalfBridge;

mod pair;
pub use pair::{DriverPair, HBridgePair};

/// Default time to wait for a receiver pulse.
pub const DEFAULT_PULSE_TIMEOUT: Microseconds<u32> = Microseconds(1_000_000);

/// What a bridge should do with the motor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn backwards. Holds the control value as given, normally negative.
    Reverse(i16),
    /// Turn forwards.
    Forward(i16),
    /// Inside the dead zone.
    Stop,
}

impl Command {
    /// Classify `control` against an inclusive dead zone.
    pub fn from_control(control: i16, dead_zone: RangeLimits) -> Self {
        let control_wide = control as i32;
        if control_wide < dead_zone.minimum {
            Command::Reverse(control)
        } else if control_wide > dead_zone.maximum {
            Command::Forward(control)
        } else {
            Command::Stop
        }
    }
}

/// Pin outputs of a motor bridge.
pub trait Bridge {
    type Error;

    fn output(&mut self, command: Command) -> Result<(), Self::Error>;
}

/// Where a driver's input signal comes from.
pub trait SignalSource {
    type Error;

    /// Read one raw input sample, or `None` if there is nothing to read.
    fn sample(&mut self) -> Result<Option<i32>, Self::Error>;
}

/// No input pin: values are only supplied through [`MotorDriver::drive`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Direct;

impl SignalSource for Direct {
    type Error = Infallible;

    fn sample(&mut self) -> Result<Option<i32>, Self::Error> {
        Ok(None)
    }
}

/// Pulse width input from a radio-control receiver channel.
pub struct RcInput<P> {
    input: P,
    timeout: Microseconds<u32>,
}

impl<P: PulseInput> RcInput<P> {
    pub fn new(input: P) -> Self {
        Self::with_timeout(input, DEFAULT_PULSE_TIMEOUT)
    }

    pub fn with_timeout(input: P, timeout: Microseconds<u32>) -> Self {
        Self { input, timeout }
    }

    pub fn timeout(&self) -> Microseconds<u32> {
        self.timeout
    }

    pub fn into_inner(self) -> P {
        self.input
    }
}

impl<P: PulseInput> SignalSource for RcInput<P> {
    type Error = P::Error;

    fn sample(&mut self) -> Result<Option<i32>, Self::Error> {
        let width = self.input.pulse_width(Level::High, self.timeout)?;
        Ok(Some(i32::try_from(width).unwrap_or(i32::MAX)))
    }
}

/// A motor driver: a [`Bridge`] fed from a [`SignalSource`] through a
/// [`SignalConditioner`] and a dead zone.
///
/// ```
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::v2::OutputPin;
/// # use embedded_motor::AnalogOutput;
/// # struct Pin;
/// # impl OutputPin for Pin {
/// #     type Error = Infallible;
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// # struct Pwm;
/// # impl AnalogOutput for Pwm {
/// #     fn write_analog(&mut self, _value: i16) {}
/// # }
/// use embedded_motor::{Driver, DriverConfig, HBridge, MotorDriver};
///
/// let mut motor = Driver::direct(HBridge::new(Pin, Pin, Pwm), DriverConfig::direct()).unwrap();
/// motor.drive(100).unwrap();
/// ```
pub struct Driver<B, S = Direct> {
    bridge: B,
    source: S,
    config: DriverConfig,
    conditioner: SignalConditioner,
}

impl<B: Bridge> Driver<B, Direct> {
    /// A driver commanded only through [`MotorDriver::drive`].
    pub fn direct(bridge: B, config: DriverConfig) -> Result<Self, ConfigError> {
        Self::new(bridge, Direct, config)
    }
}

impl<B, P> Driver<B, RcInput<P>>
where
    B: Bridge,
    P: PulseInput,
{
    /// A driver that reads receiver pulses from `input` on [`MotorDriver::update`].
    pub fn pulse(bridge: B, input: P, config: DriverConfig) -> Result<Self, ConfigError> {
        Self::new(bridge, RcInput::new(input), config)
    }
}

impl<B, S> Driver<B, S>
where
    B: Bridge,
    S: SignalSource,
{
    pub fn new(bridge: B, source: S, config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut conditioner = SignalConditioner::new(config.input);
        conditioner.set_scale_factor(config.scale_factor);
        log::debug!(
            "motor driver: input {:?}, dead zone {:?}, control {:?}",
            config.input,
            config.dead_zone,
            conditioner.control_limits()
        );

        Ok(Self {
            bridge,
            source,
            config,
            conditioner,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn scale_factor(&self) -> f32 {
        self.conditioner.scale_factor()
    }

    /// Set the scale factor, clamped into `[0, 1]`, returning the previous one.
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> f32 {
        self.conditioner.set_scale_factor(scale_factor)
    }

    pub fn control_limits(&self) -> RangeLimits {
        self.conditioner.control_limits()
    }

    pub fn conditioner(&self) -> &SignalConditioner {
        &self.conditioner
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    pub fn into_parts(self) -> (B, S) {
        (self.bridge, self.source)
    }

    /// Remap and clamp `raw` before driving the bridge with it.
    pub fn drive_conditioned(&mut self, raw: i32) -> Result<(), Error<B::Error, S::Error>> {
        let control = self.conditioner.condition(raw);
        self.output(control)
    }

    /// Put the bridge in its dead zone state.
    pub fn stop(&mut self) -> Result<(), Error<B::Error, S::Error>> {
        self.bridge.output(Command::Stop).map_err(Error::Output)
    }

    fn output(&mut self, control: i16) -> Result<(), Error<B::Error, S::Error>> {
        let command = Command::from_control(control, self.config.dead_zone);
        log::trace!("control {} -> {:?}", control, command);
        self.bridge.output(command).map_err(Error::Output)
    }
}

impl<B, S> MotorDriver for Driver<B, S>
where
    B: Bridge,
    S: SignalSource,
{
    type Error = Error<B::Error, S::Error>;

    fn update(&mut self) -> Result<(), Self::Error> {
        match self.source.sample().map_err(Error::Input)? {
            Some(raw) => self.drive_conditioned(raw),
            None => Ok(()),
        }
    }

    fn drive(&mut self, value: i16) -> Result<(), Self::Error> {
        self.output(value)
    }
}
