//! Addressing mode resolution.
//!
//! The 6502 has 13 addressing modes:
//! - Implied: no operand (CLC, RTS)
//! - Accumulator: operates on A (ASL A)
//! - Immediate: #$nn
//! - Zero Page: $nn
//! - Zero Page,X / Zero Page,Y: $nn,X — the sum wraps within page zero
//! - Absolute: $nnnn
//! - Absolute,X / Absolute,Y: $nnnn,X — may cross a page
//! - Indirect: ($nnnn), JMP only, with the page boundary bug
//! - Indexed Indirect: ($nn,X) — pointer in zero page, indexed by X
//! - Indirect Indexed: ($nn),Y — zero page pointer, then + Y
//! - Relative: signed branch offset

use crate::cpu::Mos6502;
use emu_core::Bus;

/// Addressing mode of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl Mode {
    /// Number of operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndexedIndirect
            | Self::IndirectIndexed
            | Self::Relative => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 2,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy)]
pub struct Operand {
    /// Effective address. `None` for register-only modes (Implied,
    /// Accumulator, Immediate, Relative).
    pub addr: Option<u16>,
    /// The byte fetched: memory at the effective address, the immediate
    /// operand, the branch offset, or A for Accumulator mode.
    pub value: u8,
    /// Whether indexing stepped past a page boundary.
    pub page_crossed: bool,
}

impl Operand {
    const fn register(value: u8) -> Self {
        Self {
            addr: None,
            value,
            page_crossed: false,
        }
    }

    const fn memory(addr: u16, value: u8, page_crossed: bool) -> Self {
        Self {
            addr: Some(addr),
            value,
            page_crossed,
        }
    }
}

impl Mos6502 {
    /// Resolve `mode` for the instruction at PC. Reads operand bytes from
    /// PC+1 onward; never modifies register state.
    pub(crate) fn resolve(&self, bus: &mut impl Bus, mode: Mode) -> Operand {
        let base = self.regs.pc.wrapping_add(1);
        match mode {
            Mode::Implied => Operand::register(0),
            Mode::Accumulator => Operand::register(self.regs.a),
            Mode::Immediate | Mode::Relative => Operand::register(bus.read(base)),
            Mode::ZeroPage => {
                let addr = u16::from(bus.read(base));
                let value = bus.read(addr);
                Operand::memory(addr, value, false)
            }
            Mode::ZeroPageX => {
                let addr = u16::from(bus.read(base).wrapping_add(self.regs.x));
                let value = bus.read(addr);
                Operand::memory(addr, value, false)
            }
            Mode::ZeroPageY => {
                let addr = u16::from(bus.read(base).wrapping_add(self.regs.y));
                let value = bus.read(addr);
                Operand::memory(addr, value, false)
            }
            Mode::Absolute => {
                let addr = bus.read_word(base);
                let value = bus.read(addr);
                Operand::memory(addr, value, false)
            }
            Mode::AbsoluteX => indexed_absolute(bus, base, self.regs.x),
            Mode::AbsoluteY => indexed_absolute(bus, base, self.regs.y),
            Mode::Indirect => {
                let ptr = bus.read_word(base);
                let addr = read_word_page_bug(bus, ptr);
                Operand::memory(addr, 0, false)
            }
            Mode::IndexedIndirect => {
                let ptr = bus.read(base).wrapping_add(self.regs.x);
                let addr = zero_page_word(bus, ptr);
                let value = bus.read(addr);
                Operand::memory(addr, value, false)
            }
            Mode::IndirectIndexed => {
                let ptr = bus.read(base);
                let pointee = zero_page_word(bus, ptr);
                let addr = pointee.wrapping_add(u16::from(self.regs.y));
                let value = bus.read(addr);
                Operand::memory(addr, value, crossed(pointee, addr))
            }
        }
    }

}

fn indexed_absolute(bus: &mut impl Bus, base: u16, index: u8) -> Operand {
    let pointee = bus.read_word(base);
    let addr = pointee.wrapping_add(u16::from(index));
    let value = bus.read(addr);
    Operand::memory(addr, value, crossed(pointee, addr))
}

const fn crossed(base: u16, addr: u16) -> bool {
    base & 0xFF00 != addr & 0xFF00
}

/// Read a 16-bit pointer from zero page; the second byte wraps within
/// page zero.
fn zero_page_word(bus: &mut impl Bus, ptr: u8) -> u16 {
    let low = bus.read(u16::from(ptr));
    let high = bus.read(u16::from(ptr.wrapping_add(1)));
    u16::from_le_bytes([low, high])
}

/// Read a 16-bit word reproducing the indirect JMP hardware bug: a pointer
/// at $xxFF takes its high byte from $xx00, not the next page.
fn read_word_page_bug(bus: &mut impl Bus, addr: u16) -> u16 {
    let low = bus.read(addr);
    let high_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let high = bus.read(high_addr);
    u16::from_le_bytes([low, high])
}
