//! CPU register file and stack unit.

use crate::flags::Status;
use emu_core::Bus;

/// The stack lives in page one; S is an offset into it.
pub const STACK_BASE: u16 = 0x0100;

/// Complete register state: accumulator, index registers, stack pointer,
/// program counter, and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub s: u8,
    pub pc: u16,
    pub p: Status,
}

impl Registers {
    /// Power-on state. PC is loaded separately from the reset vector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFD,
            pc: 0,
            p: Status::new(),
        }
    }

    /// Push a byte. S wraps within page one; nothing else is touched.
    pub fn push8(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write(STACK_BASE | u16::from(self.s), value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Pop a byte.
    pub fn pop8(&mut self, bus: &mut impl Bus) -> u8 {
        self.s = self.s.wrapping_add(1);
        bus.read(STACK_BASE | u16::from(self.s))
    }

    /// Push a 16-bit value, high byte first, so it reads back
    /// little-endian in memory.
    pub fn push16(&mut self, bus: &mut impl Bus, value: u16) {
        self.push8(bus, (value >> 8) as u8);
        self.push8(bus, value as u8);
    }

    /// Pop a 16-bit value, low byte first.
    pub fn pop16(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.pop8(bus);
        let high = self.pop8(bus);
        u16::from_le_bytes([low, high])
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
