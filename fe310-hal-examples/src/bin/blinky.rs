//! # Blinky Example
//!
//! Blinks the green LED on a HiFive1 Rev B board.
//!
//! The LED sits on GPIO 19. The pin is switched to a plain output once, then
//! toggled forever with a fixed busy-wait in between. The blink rate depends
//! on the core clock, which is left at whatever the boot ROM configured.
//!
//! Build with `cargo build --release`, flash and run with `cargo flash-blinky`,
//! remove the image with `cargo clean`.
//!
//! See the `Cargo.toml` file for Copyright and license details.

#![no_std]
#![no_main]

// Ensure we halt the program on panic (if we don't mention this crate it won't
// be linked)
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// Alias for our HAL crate
use fe310_hal as hal;

use hal::gpio::{Disabled, Gpio0, Pin};
use hal::{Blinker, SpinDelay};

/// GPIO driving the green LED on the HiFive1 Rev B.
const LED_PIN: u8 = 19;

/// Entry point to our bare-metal application.
///
/// The `#[hal::entry]` macro ensures the riscv-rt start-up code calls this
/// function once the stack and statics are set up. riscv-rt's `_start` is the
/// first thing in flash, at the origin given in `memory.x`.
#[hal::entry]
fn main() -> ! {
    hal::arch::interrupt_disable();
    debug_assert!(!hal::arch::interrupts_enabled());

    // Grab our singleton objects
    let gpio = Gpio0::take().unwrap();

    // Configure the LED pin as an output
    let led: Pin<'_, _, LED_PIN, Disabled> = Pin::new(gpio.registers());
    let led = led.into_output();

    #[cfg(feature = "defmt")]
    defmt::info!(
        "gpio{=u8} is an output, blinking every {=u32} spins",
        LED_PIN,
        SpinDelay::DEFAULT_COUNT
    );

    Blinker::new(led, SpinDelay::new(SpinDelay::DEFAULT_COUNT)).run()
}

// End of file
