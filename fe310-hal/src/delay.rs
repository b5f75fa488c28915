//! Busy-wait delay
//!
//! The FE310 boots from the 16 MHz internal oscillator trimmed by the boot
//! ROM, and this HAL never touches the clock tree. So there is no reliable
//! notion of time here. [`SpinDelay`] simply burns a fixed number of loop
//! iterations, and its wall-clock duration depends on whatever the core clock
//! happens to be.

use fugit::{HertzU32, MillisDurationU32};

use crate::arch;

/// A fixed-count busy-wait.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpinDelay {
    count: u32,
}

impl SpinDelay {
    /// Spin count used by the blink firmware. Roughly a quarter of a second
    /// at the 16 MHz boot clock.
    pub const DEFAULT_COUNT: u32 = 0x0010_0000;

    /// Nominal core cycles spent per loop iteration (`nop`, decrement,
    /// branch, plus fetch from the instruction cache).
    pub const CYCLES_PER_SPIN: u32 = 4;

    /// Create a delay spinning `count` times.
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Guess a spin count for `period` at a nominal core `clock`.
    ///
    /// Saturates at `u32::MAX` spins.
    pub fn approximately(clock: HertzU32, period: MillisDurationU32) -> Self {
        let cycles = u64::from(clock.to_Hz()) * u64::from(period.to_millis()) / 1_000;
        let spins = cycles / u64::from(Self::CYCLES_PER_SPIN);
        Self::new(u32::try_from(spins).unwrap_or(u32::MAX))
    }

    /// The configured spin count.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Spin until the counter reaches zero.
    ///
    /// Returns the number of decrements performed, which is always
    /// [`SpinDelay::count`].
    #[inline(never)]
    pub fn wait(&self) -> u32 {
        let mut remaining = self.count;
        let mut spins = 0;
        while remaining != 0 {
            arch::nop();
            remaining -= 1;
            spins += 1;
        }
        spins
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT)
    }
}
