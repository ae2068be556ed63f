//! Core traits and types shared by CPU cores and machines.

mod bus;
mod cpu;

pub use bus::{Bus, SimpleBus};
pub use cpu::Cpu;
