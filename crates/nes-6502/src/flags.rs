//! Status register (P).
//!
//! Bit layout:
//! - Bit 0: C (Carry)
//! - Bit 1: Z (Zero)
//! - Bit 2: I (Interrupt disable)
//! - Bit 3: D (Decimal — storable but inert on the NES)
//! - Bit 4: B (Break — only exists in bytes pushed to the stack)
//! - Bit 5: U (Unused — always reads as 1)
//! - Bit 6: V (Overflow)
//! - Bit 7: N (Negative)

/// Processor status flags, packed into a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    pub const C: u8 = 0x01;
    pub const Z: u8 = 0x02;
    pub const I: u8 = 0x04;
    pub const D: u8 = 0x08;
    pub const B: u8 = 0x10;
    pub const U: u8 = 0x20;
    pub const V: u8 = 0x40;
    pub const N: u8 = 0x80;

    /// Power-on value: interrupts disabled, unused bit set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Self::I | Self::U)
    }

    /// Build from a raw byte, forcing the unused bit on and the break
    /// bit off. Used by PLP and RTI.
    #[must_use]
    pub const fn from_pulled(value: u8) -> Self {
        Self((value | Self::U) & !Self::B)
    }

    /// The byte pushed to the stack: U is always set, B only for
    /// BRK and PHP (not for hardware interrupt entry).
    #[must_use]
    pub const fn to_pushed(self, brk: bool) -> u8 {
        if brk {
            self.0 | Self::U | Self::B
        } else {
            (self.0 | Self::U) & !Self::B
        }
    }

    #[must_use]
    pub const fn is_set(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    pub fn set(&mut self, mask: u8) {
        self.0 |= mask;
    }

    pub fn clear(&mut self, mask: u8) {
        self.0 &= !mask;
    }

    pub fn set_if(&mut self, mask: u8, condition: bool) {
        if condition {
            self.set(mask);
        } else {
            self.clear(mask);
        }
    }

    /// Update N and Z from a result byte.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(Self::Z, value == 0);
        self.set_if(Self::N, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}
