use embedded_time::{clock, ConversionError};

/// Which range of a [`DriverConfig`](crate::DriverConfig) is at fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    Input,
    DeadZone,
}

/// A driver configuration that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `minimum` is greater than `maximum`.
    InvertedRange(Range),
    /// The input range has zero width, so it cannot be remapped.
    DegenerateInputRange,
}

/// A driver error caused by the hardware underneath it.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<O, I> {
    /// Writing a digital output pin failed.
    Output(O),
    /// Reading the input signal failed.
    Input(I),
}

/// A pulse measurement error.
#[derive(Debug)]
pub enum PulseError<E> {
    /// The input pin could not be read.
    Pin(E),
    /// The clock timing the pulse could not be read.
    Clock(clock::Error),
    /// A clock reading did not fit in microseconds.
    Time(ConversionError),
}

impl<E> From<clock::Error> for PulseError<E> {
    fn from(clock_error: clock::Error) -> Self {
        PulseError::Clock(clock_error)
    }
}

impl<E> From<ConversionError> for PulseError<E> {
    fn from(time_error: ConversionError) -> Self {
        PulseError::Time(time_error)
    }
}
