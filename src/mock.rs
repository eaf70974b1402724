//! Recording pins and a manual clock for tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_time::{clock, duration::Microseconds, fraction::Fraction, Clock, Instant};

use crate::hal::{AnalogOutput, Level, PulseInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digital(&'static str, Level),
    Analog(&'static str, i16),
    Pulse(Level, u32),
    Failed(&'static str),
}

/// Shared, ordered record of every pin write.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Take everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn output(&self, name: &'static str) -> MockOutput {
        MockOutput {
            name,
            log: self.clone(),
        }
    }

    pub fn analog(&self, name: &'static str) -> MockAnalog {
        MockAnalog {
            name,
            log: self.clone(),
        }
    }

    pub fn broken(&self, name: &'static str) -> BrokenOutput {
        BrokenOutput {
            name,
            log: self.clone(),
        }
    }

    pub fn pulses(&self, widths: &[u32]) -> MockPulse {
        MockPulse {
            widths: widths.iter().copied().collect(),
            log: self.clone(),
        }
    }
}

pub struct MockOutput {
    name: &'static str,
    log: Log,
}

impl OutputPin for MockOutput {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Digital(self.name, Level::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Digital(self.name, Level::High));
        Ok(())
    }
}

pub struct MockAnalog {
    name: &'static str,
    log: Log,
}

impl AnalogOutput for MockAnalog {
    fn write_analog(&mut self, value: i16) {
        self.log.push(Event::Analog(self.name, value));
    }
}

/// Replays pulse widths, then times out with zero.
pub struct MockPulse {
    widths: VecDeque<u32>,
    log: Log,
}

impl PulseInput for MockPulse {
    type Error = Infallible;

    fn pulse_width(
        &mut self,
        level: Level,
        _timeout: Microseconds<u32>,
    ) -> Result<u32, Self::Error> {
        let width = self.widths.pop_front().unwrap_or(0);
        self.log.push(Event::Pulse(level, width));
        Ok(width)
    }
}

/// An output pin that records the attempt and then fails.
pub struct BrokenOutput {
    name: &'static str,
    log: Log,
}

impl BrokenOutput {
    fn fail(&self) -> Result<(), &'static str> {
        self.log.push(Event::Failed(self.name));
        Err("broken")
    }
}

impl OutputPin for BrokenOutput {
    type Error = &'static str;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.fail()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.fail()
    }
}

/// Microsecond clock that advances by one tick every time it is read.
pub struct ManualClock {
    now: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
        }
    }

    pub fn handle(&self) -> Rc<Cell<u32>> {
        self.now.clone()
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }
}

impl Clock for ManualClock {
    type T = u32;

    const SCALING_FACTOR: Fraction = Fraction::new(1, 1_000_000);

    fn try_now(&self) -> Result<Instant<Self>, clock::Error> {
        let now = self.now.get();
        self.now.set(now + 1);
        Ok(Instant::new(now))
    }
}

/// Input pin that is high during the given `[start, end)` windows of a clock.
pub struct ScriptedPin {
    now: Rc<Cell<u32>>,
    high: Vec<(u32, u32)>,
}

impl ScriptedPin {
    pub fn new(now: Rc<Cell<u32>>, high: &[(u32, u32)]) -> Self {
        Self {
            now,
            high: high.to_vec(),
        }
    }
}

impl InputPin for ScriptedPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let now = self.now.get();
        Ok(self
            .high
            .iter()
            .any(|&(start, end)| start <= now && now < end))
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
