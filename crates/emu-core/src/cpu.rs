//! CPU core trait.

use crate::Bus;

/// A CPU core stepped one instruction at a time.
///
/// The bus is passed in, not owned, so it can be shared with other
/// components between instructions.
pub trait Cpu<B: Bus> {
    /// Execute one instruction (or one interrupt entry) and account its
    /// cycles.
    fn step(&mut self, bus: &mut B);

    /// Reset the CPU, loading PC from the reset vector.
    fn reset(&mut self, bus: &mut B);

    /// Request a maskable interrupt. Latched until sampled at the next
    /// instruction boundary.
    fn interrupt(&mut self);

    /// Request a non-maskable interrupt.
    fn nmi(&mut self);

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns the total number of cycles elapsed since construction.
    fn cycles(&self) -> u64;
}
