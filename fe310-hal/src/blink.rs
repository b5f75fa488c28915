//! Busy-wait LED blinker
//!
//! ```no_run
//! use fe310_hal::{
//!     gpio::{Disabled, Gpio0, Pin},
//!     Blinker, SpinDelay,
//! };
//!
//! let gpio = Gpio0::take().unwrap();
//! let led: Pin<'_, _, 19, Disabled> = Pin::new(gpio.registers());
//! Blinker::new(led.into_output(), SpinDelay::default()).run();
//! ```

use embedded_hal::digital::StatefulOutputPin;

use crate::SpinDelay;

/// Toggles an output pin forever, spinning between toggles.
pub struct Blinker<P> {
    pin: P,
    delay: SpinDelay,
}

impl<P> Blinker<P>
where
    P: StatefulOutputPin,
{
    /// Take an already configured output pin.
    pub fn new(pin: P, delay: SpinDelay) -> Self {
        Self { pin, delay }
    }

    /// One blink iteration: spin, then flip the pin.
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.delay.wait();
        self.pin.toggle()
    }

    /// Blink until power-off.
    ///
    /// A pin error ends the blinking and halts the hart.
    pub fn run(mut self) -> ! {
        while self.step().is_ok() {}
        crate::halt()
    }

    /// The blinking pin.
    pub fn pin(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Give the pin back.
    pub fn free(self) -> P {
        self.pin
    }
}
