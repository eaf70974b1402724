use super::{Direct, Driver, HBridge};
use crate::MotorDriver;

/// Two motors driven together, such as the wheels of a differential drive.
///
/// Every call goes to `a` first, then `b`. Both are always called; if either
/// fails, the first error is returned afterwards.
pub struct DriverPair<A, B> {
    a: A,
    b: B,
}

/// Two H-bridge drivers fed from the same kind of signal source.
pub type HBridgePair<PA, NA, WA, PB, NB, WB, S = Direct> =
    DriverPair<Driver<HBridge<PA, NA, WA>, S>, Driver<HBridge<PB, NB, WB>, S>>;

impl<A, B> DriverPair<A, B>
where
    A: MotorDriver,
    B: MotorDriver<Error = A::Error>,
{
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    pub fn a(&mut self) -> &mut A {
        &mut self.a
    }

    pub fn b(&mut self) -> &mut B {
        &mut self.b
    }

    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }

    /// Update both drivers from their input signals.
    pub fn update(&mut self) -> Result<(), A::Error> {
        let a = self.a.update();
        let b = self.b.update();
        a.and(b)
    }

    /// Drive both motors with explicit values.
    pub fn drive(&mut self, value_a: i16, value_b: i16) -> Result<(), A::Error> {
        let a = self.a.drive(value_a);
        let b = self.b.drive(value_b);
        a.and(b)
    }
}
