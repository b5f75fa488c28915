//! Portable in-line assembly
//!
//! Wraps `riscv::asm` so the rest of the HAL also builds (and its tests
//! run) on the host.

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
mod inner {
    #[doc(inline)]
    pub use riscv::asm::nop;

    #[doc(inline)]
    pub use riscv::interrupt::machine::disable as interrupt_disable;

    /// Are interrupts currently enabled?
    #[inline(always)]
    pub fn interrupts_enabled() -> bool {
        riscv::register::mstatus::read().mie()
    }
}

#[cfg(not(all(target_arch = "riscv32", target_os = "none")))]
mod inner {
    /// Placeholder function to disable interrupts
    pub fn interrupt_disable() {}

    /// Placeholder function to check if interrupts are enabled
    pub fn interrupts_enabled() -> bool {
        false
    }

    /// Placeholder function to do nothing
    pub fn nop() {
        core::hint::spin_loop();
    }
}

#[doc(inline)]
pub use inner::{interrupt_disable, interrupts_enabled, nop};
