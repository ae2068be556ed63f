//! Cycle-accurate NES 6502 (RP2A03) CPU core.
//!
//! Instruction-stepped: each call to [`Mos6502::step`] executes one whole
//! instruction and accounts its exact cycle cost, including page-crossing
//! and branch penalties. All 256 opcodes are implemented, the undocumented
//! ones included. Decimal mode is storable but inert, as on the real chip.
//!
//! Memory is external: the core talks to an [`emu_core::Bus`] and holds no
//! RAM of its own.

mod addressing;
mod cpu;
mod flags;
mod registers;
mod table;

pub use addressing::{Mode, Operand};
pub use cpu::{IRQ_VECTOR, Mos6502, NMI_VECTOR, RESET_VECTOR};
pub use flags::Status;
pub use registers::{Registers, STACK_BASE};
pub use table::{Descriptor, OPCODES, Op};
