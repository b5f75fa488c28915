//! General Purpose Input and Output (GPIO)
//!
//! ## Basic usage
//! ```no_run
//! use embedded_hal::digital::{OutputPin, StatefulOutputPin};
//! use fe310_hal::gpio::{Disabled, Gpio0, Pin};
//!
//! let gpio = Gpio0::take().unwrap();
//! // Green LED on the HiFive1 Rev B
//! let led: Pin<'_, _, 19, Disabled> = Pin::new(gpio.registers());
//! let mut led = led.into_output();
//! led.set_high().unwrap();
//! led.toggle().unwrap();
//! ```

// Design Notes:
//
// - A pin's number is a const generic, so its mask is a constant and an out of range pin is a
//   build error rather than a runtime check.
// - Pins only borrow the register file. The FE310 has one GPIO controller shared by all 32
//   pins, and each pin only ever modifies its own bit.

pub use embedded_hal::digital::PinState;

use core::{
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::typelevel::Sealed;

mod reg;

pub use reg::{GpioRegisters, Register, RegisterBlock, GPIO0_BASE};

#[cfg(test)]
pub(crate) use reg::sim;

/// GPIO error type.
pub type Error = core::convert::Infallible;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Ownership token for the GPIO controller.
pub struct Gpio0 {
    _private: (),
}

impl Gpio0 {
    /// Pointer to the register block
    pub const PTR: *const RegisterBlock = GPIO0_BASE as *const _;

    /// Return the pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const RegisterBlock {
        Self::PTR
    }

    /// Take the GPIO controller.
    ///
    /// Returns `None` if it has already been taken.
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            if TAKEN.load(Ordering::Relaxed) {
                None
            } else {
                TAKEN.store(true, Ordering::Relaxed);
                Some(unsafe { Self::steal() })
            }
        })
    }

    /// Unchecked version of [`Gpio0::take`].
    ///
    /// # Safety
    ///
    /// No other `Gpio0` may be alive. Note that neither this nor [`Gpio0::take`]
    /// tracks individual pins, see [`Pin::new`].
    #[inline]
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }

    /// The memory-mapped register block.
    #[inline(always)]
    pub fn registers(&self) -> &'static RegisterBlock {
        unsafe { &*Self::PTR }
    }
}

/// Type-level `enum` for the pin mode.
pub trait PinMode: Sealed {}

/// Type-level `variant` of `PinMode`: the reset state, no output driver.
pub struct Disabled;
impl Sealed for Disabled {}
impl PinMode for Disabled {}

/// Type-level `variant` of `PinMode`: plain GPIO output.
pub struct Output;
impl Sealed for Output {}
impl PinMode for Output {}

/// A GPIO pin `N` in mode `M`.
pub struct Pin<'r, R, const N: u8, M>
where
    R: GpioRegisters,
    M: PinMode,
{
    regs: &'r R,
    mode: PhantomData<M>,
}

impl<'r, R, const N: u8, M> Pin<'r, R, N, M>
where
    R: GpioRegisters,
    M: PinMode,
{
    /// The pin's 32-bit bit mask.
    ///
    /// The controller has 32 pins, so pin 31 is the last valid one:
    ///
    /// ```no_run
    /// use fe310_hal::gpio::{Disabled, Gpio0, Pin, RegisterBlock};
    ///
    /// const LAST: u32 = Pin::<'static, RegisterBlock, 31, Disabled>::MASK;
    /// assert_eq!(LAST, 0x8000_0000);
    ///
    /// let gpio = Gpio0::take().unwrap();
    /// let _pin = Pin::<'_, _, 31, Disabled>::new(gpio.registers()).into_output();
    /// ```
    ///
    /// Naming a pin past that is a build error:
    ///
    /// ```compile_fail,E0080
    /// use fe310_hal::gpio::{Disabled, Gpio0, Pin, RegisterBlock};
    ///
    /// const PAST_END: u32 = Pin::<'static, RegisterBlock, 32, Disabled>::MASK;
    ///
    /// let gpio = Gpio0::take().unwrap();
    /// let _pin = Pin::<'_, _, 32, Disabled>::new(gpio.registers()).into_output();
    /// ```
    pub const MASK: u32 = 1 << N;

    #[inline]
    fn retype<M2: PinMode>(self) -> Pin<'r, R, N, M2> {
        Pin {
            regs: self.regs,
            mode: PhantomData,
        }
    }
}

impl<'r, R, const N: u8> Pin<'r, R, N, Disabled>
where
    R: GpioRegisters,
{
    /// Create a handle for pin `N`. The hardware is not touched.
    ///
    /// Handles are not tracked per pin. Creating a second handle for the same
    /// `N` is allowed and both then drive the same bit, so keep one handle per
    /// pin. Handles for different pins never touch each other's bits.
    pub fn new(regs: &'r R) -> Self {
        Pin {
            regs,
            mode: PhantomData,
        }
    }

    /// Configure the pin as a plain GPIO output.
    ///
    /// Enables the output driver, disables the input buffer and routes the pin
    /// away from its IOF peripheral. Only bit `N` of each register changes.
    pub fn into_output(self) -> Pin<'r, R, N, Output> {
        let mask = Self::MASK;
        self.regs.modify(Register::OutputEnable, |v| v | mask);
        self.regs.modify(Register::InputEnable, |v| v & !mask);
        self.regs.modify(Register::IofEnable, |v| v & !mask);
        self.retype()
    }

    /// Configure the pin as an output, starting at the given level.
    pub fn into_output_in_state(self, state: PinState) -> Pin<'r, R, N, Output> {
        let mask = Self::MASK;
        match state {
            PinState::High => self.regs.modify(Register::OutputValue, |v| v | mask),
            PinState::Low => self.regs.modify(Register::OutputValue, |v| v & !mask),
        }
        self.into_output()
    }
}

impl<'r, R, const N: u8> Pin<'r, R, N, Output>
where
    R: GpioRegisters,
{
    /// Turn the output driver off again.
    pub fn into_disabled(self) -> Pin<'r, R, N, Disabled> {
        let mask = Self::MASK;
        self.regs.modify(Register::OutputEnable, |v| v & !mask);
        self.retype()
    }

    #[inline]
    pub(crate) fn _set_low(&mut self) {
        let mask = Self::MASK;
        self.regs.modify(Register::OutputValue, |v| v & !mask);
    }

    #[inline]
    pub(crate) fn _set_high(&mut self) {
        let mask = Self::MASK;
        self.regs.modify(Register::OutputValue, |v| v | mask);
    }

    #[inline]
    pub(crate) fn _toggle(&mut self) {
        let mask = Self::MASK;
        self.regs.modify(Register::OutputValue, |v| v ^ mask);
    }

    #[inline]
    pub(crate) fn _is_set_low(&self) -> bool {
        self.regs.read(Register::OutputValue) & Self::MASK == 0
    }

    #[inline]
    pub(crate) fn _is_set_high(&self) -> bool {
        !self._is_set_low()
    }
}

mod eh1 {
    use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

    use super::{Error, GpioRegisters, Output, Pin, PinMode};

    impl<R, const N: u8, M> ErrorType for Pin<'_, R, N, M>
    where
        R: GpioRegisters,
        M: PinMode,
    {
        type Error = Error;
    }

    impl<R, const N: u8> OutputPin for Pin<'_, R, N, Output>
    where
        R: GpioRegisters,
    {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self._set_low();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self._set_high();
            Ok(())
        }
    }

    impl<R, const N: u8> StatefulOutputPin for Pin<'_, R, N, Output>
    where
        R: GpioRegisters,
    {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self._is_set_high())
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self._is_set_low())
        }

        fn toggle(&mut self) -> Result<(), Self::Error> {
            self._toggle();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sim::{Access, TracingRegisters};
    use super::*;
    use embedded_hal::digital::{OutputPin, StatefulOutputPin};

    const SEEDS: [u32; 4] = [0x0000_0000, 0xffff_ffff, 0xa5a5_a5a5, 0x0008_0001];

    #[test]
    fn mask_is_single_bit() {
        assert_eq!(Pin::<'static, TracingRegisters, 0, Disabled>::MASK, 0x0000_0001);
        assert_eq!(Pin::<'static, TracingRegisters, 19, Disabled>::MASK, 0x0008_0000);
        assert_eq!(Pin::<'static, TracingRegisters, 31, Output>::MASK, 0x8000_0000);
    }

    #[test]
    fn new_does_not_touch_hardware() {
        let regs = TracingRegisters::default();
        let _pin: Pin<'_, _, 5, Disabled> = Pin::new(&regs);
        assert!(regs.trace().is_empty());
    }

    #[test]
    fn into_output_changes_only_the_target_bit() {
        for seed in SEEDS {
            let regs = TracingRegisters::with(seed, seed, seed, seed);
            let _pin = Pin::<'_, _, 19, Disabled>::new(&regs).into_output();

            let mask = 1 << 19;
            assert_eq!(regs.peek(Register::OutputEnable), seed | mask);
            assert_eq!(regs.peek(Register::InputEnable), seed & !mask);
            assert_eq!(regs.peek(Register::IofEnable), seed & !mask);
            assert_eq!(regs.peek(Register::OutputValue), seed);
        }
    }

    #[test]
    fn into_output_access_order() {
        let regs = TracingRegisters::with(0xff, 0x00, 0x00, 0xff);
        let _pin = Pin::<'_, _, 3, Disabled>::new(&regs).into_output();

        assert_eq!(
            regs.trace(),
            [
                Access::Read(Register::OutputEnable),
                Access::Write(Register::OutputEnable, 0x08),
                Access::Read(Register::InputEnable),
                Access::Write(Register::InputEnable, 0xf7),
                Access::Read(Register::IofEnable),
                Access::Write(Register::IofEnable, 0xf7),
            ]
        );
    }

    #[test]
    fn into_output_in_state_sets_level_first() {
        let regs = TracingRegisters::default();
        let mut pin = Pin::<'_, _, 7, Disabled>::new(&regs).into_output_in_state(PinState::High);
        assert!(pin.is_set_high().unwrap());
        assert_eq!(
            regs.trace()[..2],
            [
                Access::Read(Register::OutputValue),
                Access::Write(Register::OutputValue, 0x80),
            ]
        );
    }

    #[test]
    fn into_output_in_state_low_clears_only_the_target_bit() {
        let regs = TracingRegisters::with(0, 0, 0xffff_ffff, 0);
        let mut pin = Pin::<'_, _, 7, Disabled>::new(&regs).into_output_in_state(PinState::Low);
        assert!(pin.is_set_low().unwrap());
        assert_eq!(regs.peek(Register::OutputValue), !0x80);
        assert_eq!(
            regs.trace()[..3],
            [
                Access::Read(Register::OutputValue),
                Access::Write(Register::OutputValue, !0x80),
                Access::Read(Register::OutputEnable),
            ]
        );
    }

    #[test]
    fn pins_on_one_controller_keep_to_their_own_bits() {
        let regs = TracingRegisters::default();
        let mut red = Pin::<'_, _, 22, Disabled>::new(&regs).into_output();
        let mut green = Pin::<'_, _, 19, Disabled>::new(&regs).into_output();
        assert_eq!(regs.peek(Register::OutputEnable), 1 << 22 | 1 << 19);

        red.set_high().unwrap();
        green.toggle().unwrap();
        green.toggle().unwrap();
        assert_eq!(regs.peek(Register::OutputValue), 1 << 22);
        assert!(green.is_set_low().unwrap());

        let _red = red.into_disabled();
        assert_eq!(regs.peek(Register::OutputEnable), 1 << 19);
    }

    #[test]
    fn set_and_toggle_touch_only_the_target_bit() {
        let regs = TracingRegisters::with(0, 0, 0xf0f0_f0f0, 0);
        let mut pin = Pin::<'_, _, 0, Disabled>::new(&regs).into_output();

        pin.set_high().unwrap();
        assert_eq!(regs.peek(Register::OutputValue), 0xf0f0_f0f1);
        assert!(pin.is_set_high().unwrap());

        pin.set_low().unwrap();
        assert_eq!(regs.peek(Register::OutputValue), 0xf0f0_f0f0);
        assert!(pin.is_set_low().unwrap());

        pin.toggle().unwrap();
        assert_eq!(regs.peek(Register::OutputValue), 0xf0f0_f0f1);
        pin.toggle().unwrap();
        assert_eq!(regs.peek(Register::OutputValue), 0xf0f0_f0f0);
    }

    #[test]
    fn into_disabled_clears_output_enable() {
        let regs = TracingRegisters::with(0, 0x0000_0101, 0, 0);
        let pin = Pin::<'_, _, 0, Disabled>::new(&regs).into_output();
        let _pin = pin.into_disabled();
        assert_eq!(regs.peek(Register::OutputEnable), 0x0000_0100);
    }

    #[test]
    fn gpio0_can_only_be_taken_once() {
        assert_eq!(Gpio0::ptr() as usize, 0x1001_2000);
        assert!(Gpio0::take().is_some());
        assert!(Gpio0::take().is_none());
    }
}
