//! HAL for the SiFive FE310 microcontrollers
//!
//! This is an implementation of the [`embedded-hal`](https://crates.io/crates/embedded-hal)
//! digital output traits for the GPIO controller of the FE310, plus the
//! busy-wait blink driver used by the HiFive1 boards.
//!
//! NOTE This HAL only covers plain GPIO output. Clocks, the PLIC and the
//! alternate-function peripherals are left in their reset state.
//!
//! # Crate features
//!
//! * **critical-section-impl** -
//!   critical section implementation for the single FE310 hart
//! * **defmt** -
//!   Implement `defmt::Format` for several types.
//! * **rt** -
//!   Minimal startup / runtime for RISC-V microcontrollers, re-exporting
//!   the `#[entry]` attribute

#![warn(missing_docs)]
#![no_std]

pub mod arch;
pub mod blink;
pub mod delay;
pub mod gpio;
pub(crate) mod typelevel;

pub use blink::Blinker;
pub use delay::SpinDelay;
pub use gpio::Gpio0;

// Re-export crates used in fe310-hal's public API
pub extern crate fugit;

/// Attribute to declare the entry point of the program
///
/// This is the [entry attribute from
/// riscv-rt](https://docs.rs/riscv-rt/latest/riscv_rt/attr.entry.html).
/// The runtime places `_start` at the beginning of `REGION_TEXT`, so the
/// linker script decides which address the boot ROM jumps to.
#[cfg(all(feature = "rt", target_arch = "riscv32", target_os = "none"))]
pub use riscv_rt::entry;

/// Halt the FE310.
///
/// Disables interrupts and parks the hart in an infinite loop.
pub fn halt() -> ! {
    arch::interrupt_disable();
    loop {
        arch::nop();
    }
}
