//! Memory-mapped GPIO controller registers
//!
//! See chapter 17 ("General Purpose Input/Output Controller") of the FE310-G002
//! manual for the register map.
//!
//! The pin driver never names a raw address. It goes through
//! [`GpioRegisters`], which only accepts the four [`Register`]s a plain
//! output pin needs. Anything else in the block stays untouched.

use vcell::VolatileCell;

/// Base address of the GPIO controller.
pub const GPIO0_BASE: usize = 0x1001_2000;

/// Register layout of the GPIO controller.
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Pin value
    pub input_val: VolatileCell<u32>,
    /// 0x04 - Pin input enable
    pub input_en: VolatileCell<u32>,
    /// 0x08 - Pin output enable
    pub output_en: VolatileCell<u32>,
    /// 0x0c - Output value
    pub output_val: VolatileCell<u32>,
    /// 0x10 - Internal pull-up enable
    pub pue: VolatileCell<u32>,
    /// 0x14 - Pin drive strength
    pub ds: VolatileCell<u32>,
    /// 0x18 - Rise interrupt enable
    pub rise_ie: VolatileCell<u32>,
    /// 0x1c - Rise interrupt pending
    pub rise_ip: VolatileCell<u32>,
    /// 0x20 - Fall interrupt enable
    pub fall_ie: VolatileCell<u32>,
    /// 0x24 - Fall interrupt pending
    pub fall_ip: VolatileCell<u32>,
    /// 0x28 - High interrupt enable
    pub high_ie: VolatileCell<u32>,
    /// 0x2c - High interrupt pending
    pub high_ip: VolatileCell<u32>,
    /// 0x30 - Low interrupt enable
    pub low_ie: VolatileCell<u32>,
    /// 0x34 - Low interrupt pending
    pub low_ip: VolatileCell<u32>,
    /// 0x38 - HW I/O function enable
    pub iof_en: VolatileCell<u32>,
    /// 0x3c - HW I/O function select
    pub iof_sel: VolatileCell<u32>,
    /// 0x40 - Output XOR (invert)
    pub out_xor: VolatileCell<u32>,
}

/// The registers a plain GPIO output touches.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    /// Bit N enables pin N as an input.
    InputEnable,
    /// Bit N enables pin N as an output.
    OutputEnable,
    /// Bit N drives the output level of pin N.
    OutputValue,
    /// Bit N routes pin N to its alternate (IOF) peripheral.
    IofEnable,
}

impl Register {
    /// Byte offset of this register from [`GPIO0_BASE`].
    pub const fn offset(self) -> usize {
        match self {
            Register::InputEnable => 0x04,
            Register::OutputEnable => 0x08,
            Register::OutputValue => 0x0c,
            Register::IofEnable => 0x38,
        }
    }
}

/// Word access to the GPIO registers.
///
/// Implemented by [`RegisterBlock`] for the real hardware. Writes have side
/// effects on the pins; there is no validation of any kind.
pub trait GpioRegisters {
    /// Read the current value of `reg`.
    fn read(&self, reg: Register) -> u32;

    /// Overwrite `reg` with `value`.
    fn write(&self, reg: Register, value: u32);

    /// Read `reg`, pass the value through `f` and write the result back.
    #[inline]
    fn modify<F>(&self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl RegisterBlock {
    #[inline(always)]
    fn cell(&self, reg: Register) -> &VolatileCell<u32> {
        match reg {
            Register::InputEnable => &self.input_en,
            Register::OutputEnable => &self.output_en,
            Register::OutputValue => &self.output_val,
            Register::IofEnable => &self.iof_en,
        }
    }
}

impl GpioRegisters for RegisterBlock {
    #[inline(always)]
    fn read(&self, reg: Register) -> u32 {
        self.cell(reg).get()
    }

    #[inline(always)]
    fn write(&self, reg: Register, value: u32) {
        self.cell(reg).set(value)
    }
}
