//! Instruction dispatch and interrupt handling.

use crate::addressing::Operand;
use crate::flags::Status;
use crate::registers::Registers;
use crate::table::{OPCODES, Op};
use emu_core::{Bus, Cpu};

/// NMI handler address lives here.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// PC is loaded from here on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Shared by BRK and hardware IRQ.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The NES CPU core (the 6502 inside the RP2A03: no decimal mode,
/// undocumented opcodes included).
///
/// One [`Mos6502::step`] executes one instruction, or one interrupt entry
/// when a latched interrupt is serviced, and accounts its exact cycle cost
/// including page-crossing and branch penalties.
pub struct Mos6502 {
    pub regs: Registers,
    cycles: u64,
    irq_pending: bool,
    nmi_pending: bool,
}

impl Mos6502 {
    /// Power-on state with PC at zero. Call [`Mos6502::reset`] to load PC
    /// from the reset vector.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_registers(Registers::new())
    }

    /// Start from an explicit register snapshot.
    #[must_use]
    pub const fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
        }
    }

    /// Total cycles elapsed since construction.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Reset: registers return to their power-on values and PC is loaded
    /// from the reset vector. Costs 7 cycles.
    pub fn reset(&mut self, bus: &mut impl Bus) {
        let pc = bus.read_word(RESET_VECTOR);
        self.regs = Registers::new();
        self.regs.pc = pc;
        self.irq_pending = false;
        self.nmi_pending = false;
        self.cycles += 7;
    }

    /// Latch a maskable interrupt request. Serviced at the next step if
    /// the I flag is clear; a pending request survives until then.
    pub fn interrupt(&mut self) {
        self.irq_pending = true;
    }

    /// Latch a non-maskable interrupt request.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Execute one instruction.
    ///
    /// Pending interrupts are sampled first: NMI wins over IRQ, and IRQ is
    /// only taken with the I flag clear. Interrupt entry counts as a step
    /// of its own.
    pub fn step(&mut self, bus: &mut impl Bus) {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.enter_interrupt(bus, NMI_VECTOR);
            return;
        }
        if self.irq_pending && !self.regs.p.is_set(Status::I) {
            self.irq_pending = false;
            self.enter_interrupt(bus, IRQ_VECTOR);
            return;
        }

        let opcode = bus.read(self.regs.pc);
        let desc = OPCODES[usize::from(opcode)];
        let operand = self.resolve(bus, desc.mode);

        let mut cycles = desc.cycles;
        if desc.page_penalty && operand.page_crossed {
            cycles += 1;
        }
        let mut next_pc = self.regs.pc.wrapping_add(1 + desc.mode.operand_len());

        match desc.op {
            Op::Lda => {
                self.regs.a = operand.value;
                self.regs.p.update_nz(operand.value);
            }
            Op::Ldx => {
                self.regs.x = operand.value;
                self.regs.p.update_nz(operand.value);
            }
            Op::Ldy => {
                self.regs.y = operand.value;
                self.regs.p.update_nz(operand.value);
            }
            Op::Sta => bus.write(target(&operand), self.regs.a),
            Op::Stx => bus.write(target(&operand), self.regs.x),
            Op::Sty => bus.write(target(&operand), self.regs.y),

            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Tsx => {
                self.regs.x = self.regs.s;
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
            }
            // TXS is the one transfer that sets no flags.
            Op::Txs => self.regs.s = self.regs.x,
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
            }

            Op::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Inc => {
                let result = operand.value.wrapping_add(1);
                bus.write(target(&operand), result);
                self.regs.p.update_nz(result);
            }
            Op::Dec => {
                let result = operand.value.wrapping_sub(1);
                bus.write(target(&operand), result);
                self.regs.p.update_nz(result);
            }

            Op::Adc => self.adc(operand.value),
            Op::Sbc => self.sbc(operand.value),
            Op::And => {
                self.regs.a &= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Ora => {
                self.regs.a |= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Eor => {
                self.regs.a ^= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Cmp => self.compare(self.regs.a, operand.value),
            Op::Cpx => self.compare(self.regs.x, operand.value),
            Op::Cpy => self.compare(self.regs.y, operand.value),
            Op::Bit => {
                let value = operand.value;
                self.regs.p.set_if(Status::Z, self.regs.a & value == 0);
                self.regs.p.set_if(Status::N, value & 0x80 != 0);
                self.regs.p.set_if(Status::V, value & 0x40 != 0);
            }

            Op::Asl => {
                let result = self.asl(operand.value);
                self.write_back(bus, &operand, result);
            }
            Op::Lsr => {
                let result = self.lsr(operand.value);
                self.write_back(bus, &operand, result);
            }
            Op::Rol => {
                let result = self.rol(operand.value);
                self.write_back(bus, &operand, result);
            }
            Op::Ror => {
                let result = self.ror(operand.value);
                self.write_back(bus, &operand, result);
            }

            Op::Clc => self.regs.p.clear(Status::C),
            Op::Cld => self.regs.p.clear(Status::D),
            Op::Cli => self.regs.p.clear(Status::I),
            Op::Clv => self.regs.p.clear(Status::V),
            Op::Sec => self.regs.p.set(Status::C),
            Op::Sed => self.regs.p.set(Status::D),
            Op::Sei => self.regs.p.set(Status::I),

            Op::Pha => {
                let a = self.regs.a;
                self.regs.push8(bus, a);
            }
            Op::Php => {
                let pushed = self.regs.p.to_pushed(true);
                self.regs.push8(bus, pushed);
            }
            Op::Pla => {
                self.regs.a = self.regs.pop8(bus);
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Plp => {
                self.regs.p = Status::from_pulled(self.regs.pop8(bus));
            }

            Op::Jmp => next_pc = target(&operand),
            Op::Jsr => {
                // The pushed return address is the last byte of this
                // instruction; RTS adds one.
                let ret = self.regs.pc.wrapping_add(2);
                self.regs.push16(bus, ret);
                next_pc = target(&operand);
            }
            Op::Rts => next_pc = self.regs.pop16(bus).wrapping_add(1),
            Op::Rti => {
                self.regs.p = Status::from_pulled(self.regs.pop8(bus));
                next_pc = self.regs.pop16(bus);
            }
            Op::Brk => {
                self.regs.push16(bus, self.regs.pc.wrapping_add(2));
                let pushed = self.regs.p.to_pushed(true);
                self.regs.push8(bus, pushed);
                self.regs.p.set(Status::I);
                next_pc = bus.read_word(IRQ_VECTOR);
            }

            Op::Bcc => branch(
                &operand,
                !self.regs.p.is_set(Status::C),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bcs => branch(
                &operand,
                self.regs.p.is_set(Status::C),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bne => branch(
                &operand,
                !self.regs.p.is_set(Status::Z),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Beq => branch(
                &operand,
                self.regs.p.is_set(Status::Z),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bpl => branch(
                &operand,
                !self.regs.p.is_set(Status::N),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bmi => branch(
                &operand,
                self.regs.p.is_set(Status::N),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bvc => branch(
                &operand,
                !self.regs.p.is_set(Status::V),
                &mut next_pc,
                &mut cycles,
            ),
            Op::Bvs => branch(
                &operand,
                self.regs.p.is_set(Status::V),
                &mut next_pc,
                &mut cycles,
            ),

            Op::Nop => {}
            // Officially a halt; treated as "PC does not advance" so a
            // caller can detect the spin without a dead loop inside step.
            Op::Jam => next_pc = self.regs.pc,

            Op::Slo => {
                let result = self.asl(operand.value);
                bus.write(target(&operand), result);
                self.regs.a |= result;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Rla => {
                let result = self.rol(operand.value);
                bus.write(target(&operand), result);
                self.regs.a &= result;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Sre => {
                let result = self.lsr(operand.value);
                bus.write(target(&operand), result);
                self.regs.a ^= result;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Rra => {
                // ADC consumes the carry the rotate just produced.
                let result = self.ror(operand.value);
                bus.write(target(&operand), result);
                self.adc(result);
            }
            Op::Dcp => {
                let result = operand.value.wrapping_sub(1);
                bus.write(target(&operand), result);
                self.compare(self.regs.a, result);
            }
            Op::Isc => {
                let result = operand.value.wrapping_add(1);
                bus.write(target(&operand), result);
                self.sbc(result);
            }
            Op::Sax => bus.write(target(&operand), self.regs.a & self.regs.x),
            Op::Lax => {
                self.regs.a = operand.value;
                self.regs.x = operand.value;
                self.regs.p.update_nz(operand.value);
            }
            Op::Anc => {
                self.regs.a &= operand.value;
                self.regs.p.update_nz(self.regs.a);
                self.regs.p.set_if(Status::C, self.regs.a & 0x80 != 0);
            }
            Op::Alr => {
                let masked = self.regs.a & operand.value;
                self.regs.a = self.lsr(masked);
            }
            Op::Arr => {
                let carry_in = u8::from(self.regs.p.is_set(Status::C)) << 7;
                let result = ((self.regs.a & operand.value) >> 1) | carry_in;
                self.regs.a = result;
                self.regs.p.update_nz(result);
                self.regs.p.set_if(Status::C, result & 0x40 != 0);
                self.regs
                    .p
                    .set_if(Status::V, ((result >> 6) ^ (result >> 5)) & 1 != 0);
            }
            Op::Xaa => {
                // The $EE magic constant models the unstable bus value.
                self.regs.a = (self.regs.a | 0xEE) & self.regs.x & operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Lxa => {
                let result = (self.regs.a | 0xEE) & operand.value;
                self.regs.a = result;
                self.regs.x = result;
                self.regs.p.update_nz(result);
            }
            Op::Axs => {
                let masked = self.regs.a & self.regs.x;
                self.regs.p.set_if(Status::C, masked >= operand.value);
                self.regs.x = masked.wrapping_sub(operand.value);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Las => {
                let result = self.regs.s & operand.value;
                self.regs.a = result;
                self.regs.x = result;
                self.regs.s = result;
                self.regs.p.update_nz(result);
            }
            Op::Ahx => store_high_and(bus, &operand, self.regs.a & self.regs.x),
            Op::Shx => store_high_and(bus, &operand, self.regs.x),
            Op::Shy => store_high_and(bus, &operand, self.regs.y),
            Op::Tas => {
                self.regs.s = self.regs.a & self.regs.x;
                store_high_and(bus, &operand, self.regs.s);
            }
        }

        self.regs.pc = next_pc;
        self.cycles += cycles;
    }

    /// Interrupt entry shares the BRK sequence, but the pushed PC is the
    /// interrupted instruction's address and B is clear in the pushed P.
    fn enter_interrupt(&mut self, bus: &mut impl Bus, vector: u16) {
        let pc = self.regs.pc;
        self.regs.push16(bus, pc);
        let pushed = self.regs.p.to_pushed(false);
        self.regs.push8(bus, pushed);
        self.regs.p.set(Status::I);
        self.regs.pc = bus.read_word(vector);
        self.cycles += 7;
    }

    fn write_back(&mut self, bus: &mut impl Bus, operand: &Operand, result: u8) {
        match operand.addr {
            Some(addr) => bus.write(addr, result),
            None => self.regs.a = result,
        }
    }

    /// Binary add with carry. The decimal flag is storable but inert:
    /// the RP2A03 has the BCD circuitry disconnected.
    fn adc(&mut self, value: u8) {
        let a = self.regs.a;
        let carry = u16::from(self.regs.p.is_set(Status::C));
        let sum = u16::from(a) + u16::from(value) + carry;
        let result = sum as u8;
        self.regs.p.set_if(Status::C, sum > 0xFF);
        self.regs
            .p
            .set_if(Status::V, (a ^ result) & (value ^ result) & 0x80 != 0);
        self.regs.a = result;
        self.regs.p.update_nz(result);
    }

    // SBC is ADC of the complement; the borrow is the inverted carry.
    fn sbc(&mut self, value: u8) {
        self.adc(!value);
    }

    fn compare(&mut self, register: u8, value: u8) {
        self.regs.p.set_if(Status::C, register >= value);
        self.regs.p.update_nz(register.wrapping_sub(value));
    }

    fn asl(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.regs.p.set_if(Status::C, value & 0x80 != 0);
        self.regs.p.update_nz(result);
        result
    }

    fn lsr(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.regs.p.set_if(Status::C, value & 0x01 != 0);
        self.regs.p.update_nz(result);
        result
    }

    fn rol(&mut self, value: u8) -> u8 {
        let result = (value << 1) | u8::from(self.regs.p.is_set(Status::C));
        self.regs.p.set_if(Status::C, value & 0x80 != 0);
        self.regs.p.update_nz(result);
        result
    }

    fn ror(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (u8::from(self.regs.p.is_set(Status::C)) << 7);
        self.regs.p.set_if(Status::C, value & 0x01 != 0);
        self.regs.p.update_nz(result);
        result
    }
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Cpu<B> for Mos6502 {
    fn step(&mut self, bus: &mut B) {
        Self::step(self, bus);
    }

    fn reset(&mut self, bus: &mut B) {
        Self::reset(self, bus);
    }

    fn interrupt(&mut self) {
        Self::interrupt(self);
    }

    fn nmi(&mut self) {
        Self::nmi(self);
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }
}

fn target(operand: &Operand) -> u16 {
    match operand.addr {
        Some(addr) => addr,
        None => unreachable!("memory operation without an effective address"),
    }
}

/// Branch timing: 2 cycles not taken, 3 taken, 4 taken across a page.
/// The page comparison is against the address of the next instruction.
fn branch(operand: &Operand, condition: bool, next_pc: &mut u16, cycles: &mut u64) {
    if condition {
        let offset = i16::from(operand.value as i8) as u16;
        let after = *next_pc;
        let dest = after.wrapping_add(offset);
        *cycles += if after & 0xFF00 == dest & 0xFF00 { 1 } else { 2 };
        *next_pc = dest;
    }
}

/// The SHA/SHX/SHY/TAS family stores `reg & (target high byte + 1)`.
/// When indexing crossed a page the corrupted high byte also replaces
/// the target's high byte.
fn store_high_and(bus: &mut impl Bus, operand: &Operand, reg: u8) {
    let addr = target(operand);
    let high = (addr >> 8) as u8;
    if operand.page_crossed {
        let value = reg & high;
        bus.write(u16::from_le_bytes([addr as u8, value]), value);
    } else {
        let value = reg & high.wrapping_add(1);
        bus.write(addr, value);
    }
}
