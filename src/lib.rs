//! # embedded-motor
//! A `#![no_std]` DC motor driver library for embedded rust
//!
//! A [`Driver`] turns a control signal into bridge pin outputs. The signal is
//! either supplied by the program ([`MotorDriver::drive`]) or read as a pulse
//! width from a radio-control receiver ([`MotorDriver::update`]).
//!
//! # Components
//! [`SignalConditioner`] remaps raw input onto the control range `-255 ..= 255`
//! and limits it with a scale factor.
//!
//! [`HBridge`] and [`HalfBridge`] are the two supported bridge topologies
//! (see [`Bridge`]).
//!
//! [`DriverPair`] commands two motors together.
//!
//! [`hal`] contains the hardware seams and `embedded-hal` adapters.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub use config::DriverConfig;

pub mod driver;
pub use driver::{
    Bridge, Command, Direct, Driver, DriverPair, HBridge, HBridgePair, HalfBridge, RcInput,
};

pub mod error;
pub use error::{ConfigError, Error, PulseError};

pub mod hal;
pub use hal::{AnalogOutput, PulseInput};

mod range;
pub use range::RangeLimits;

pub mod signal;
pub use signal::SignalConditioner;

#[cfg(test)]
mod mock;

/// Lowest control value.
pub const CONTROL_MIN: i16 = -255;

/// Highest control value.
pub const CONTROL_MAX: i16 = 255;

/// A motor that can be commanded from its input signal or directly.
pub trait MotorDriver {
    type Error;

    /// Read the input signal and drive the motor with it.
    ///
    /// Does nothing for drivers without an input pin.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Drive the motor with `value`.
    ///
    /// `value` skips signal conditioning and goes straight to the dead zone
    /// check, so it should already be in the control range.
    fn drive(&mut self, value: i16) -> Result<(), Self::Error>;
}

impl<T: MotorDriver + ?Sized> MotorDriver for &mut T {
    type Error = T::Error;

    fn update(&mut self) -> Result<(), Self::Error> {
        (&mut **self).update()
    }

    fn drive(&mut self, value: i16) -> Result<(), Self::Error> {
        (&mut **self).drive(value)
    }
}
