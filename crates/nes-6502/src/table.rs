//! Opcode descriptor table.
//!
//! Every one of the 256 opcodes is described by a [`Descriptor`]: which
//! operation it performs, its addressing mode, its base cycle cost, and
//! whether a page crossing adds a cycle. Dispatch is a table lookup, so
//! there is no undefined-opcode path; the undocumented opcodes get real
//! descriptors like everything else.

use crate::addressing::Mode;

/// Every operation the core executes, documented and undocumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Documented
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented
    Ahx,
    Alr,
    Anc,
    Arr,
    Axs,
    Dcp,
    Isc,
    Jam,
    Las,
    Lax,
    Lxa,
    Rla,
    Rra,
    Sax,
    Shx,
    Shy,
    Slo,
    Sre,
    Tas,
    Xaa,
}

/// Static description of one opcode.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub op: Op,
    pub mode: Mode,
    /// Base cycle cost. Branches and page-crossing reads add to this.
    pub cycles: u64,
    /// Read-class opcodes pay one extra cycle when indexing crosses a page.
    pub page_penalty: bool,
}

const fn op(op: Op, mode: Mode, cycles: u64) -> Descriptor {
    Descriptor {
        op,
        mode,
        cycles,
        page_penalty: false,
    }
}

/// Read-class descriptor: pays the page-crossing penalty.
const fn rd(op: Op, mode: Mode, cycles: u64) -> Descriptor {
    Descriptor {
        op,
        mode,
        cycles,
        page_penalty: true,
    }
}

use Mode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirect, Indirect,
    IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use Op::{
    Adc, Ahx, Alr, Anc, And, Arr, Asl, Axs, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dcp, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Isc, Jam, Jmp, Jsr, Las,
    Lax, Lda, Ldx, Ldy, Lsr, Lxa, Nop, Ora, Pha, Php, Pla, Plp, Rla, Rol, Ror, Rra, Rti, Rts, Sax,
    Sbc, Sec, Sed, Sei, Shx, Shy, Slo, Sre, Sta, Stx, Sty, Tas, Tax, Tay, Tsx, Txa, Txs, Tya, Xaa,
};

/// The full opcode map, indexed by opcode byte.
#[rustfmt::skip]
pub static OPCODES: [Descriptor; 256] = [
    // $00
    op(Brk, Implied, 7),         op(Ora, IndexedIndirect, 6), op(Jam, Implied, 3),         op(Slo, IndexedIndirect, 8),
    op(Nop, ZeroPage, 3),        op(Ora, ZeroPage, 3),        op(Asl, ZeroPage, 5),        op(Slo, ZeroPage, 5),
    op(Php, Implied, 3),         op(Ora, Immediate, 2),       op(Asl, Accumulator, 2),     op(Anc, Immediate, 2),
    op(Nop, Absolute, 4),        op(Ora, Absolute, 4),        op(Asl, Absolute, 6),        op(Slo, Absolute, 6),
    // $10
    op(Bpl, Relative, 2),        rd(Ora, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Slo, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(Ora, ZeroPageX, 4),       op(Asl, ZeroPageX, 6),       op(Slo, ZeroPageX, 6),
    op(Clc, Implied, 2),         rd(Ora, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Slo, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(Ora, AbsoluteX, 4),       op(Asl, AbsoluteX, 7),       op(Slo, AbsoluteX, 7),
    // $20
    op(Jsr, Absolute, 6),        op(And, IndexedIndirect, 6), op(Jam, Implied, 3),         op(Rla, IndexedIndirect, 8),
    op(Bit, ZeroPage, 3),        op(And, ZeroPage, 3),        op(Rol, ZeroPage, 5),        op(Rla, ZeroPage, 5),
    op(Plp, Implied, 4),         op(And, Immediate, 2),       op(Rol, Accumulator, 2),     op(Anc, Immediate, 2),
    op(Bit, Absolute, 4),        op(And, Absolute, 4),        op(Rol, Absolute, 6),        op(Rla, Absolute, 6),
    // $30
    op(Bmi, Relative, 2),        rd(And, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Rla, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(And, ZeroPageX, 4),       op(Rol, ZeroPageX, 6),       op(Rla, ZeroPageX, 6),
    op(Sec, Implied, 2),         rd(And, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Rla, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(And, AbsoluteX, 4),       op(Rol, AbsoluteX, 7),       op(Rla, AbsoluteX, 7),
    // $40
    op(Rti, Implied, 6),         op(Eor, IndexedIndirect, 6), op(Jam, Implied, 3),         op(Sre, IndexedIndirect, 8),
    op(Nop, ZeroPage, 3),        op(Eor, ZeroPage, 3),        op(Lsr, ZeroPage, 5),        op(Sre, ZeroPage, 5),
    op(Pha, Implied, 3),         op(Eor, Immediate, 2),       op(Lsr, Accumulator, 2),     op(Alr, Immediate, 2),
    op(Jmp, Absolute, 3),        op(Eor, Absolute, 4),        op(Lsr, Absolute, 6),        op(Sre, Absolute, 6),
    // $50
    op(Bvc, Relative, 2),        rd(Eor, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Sre, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(Eor, ZeroPageX, 4),       op(Lsr, ZeroPageX, 6),       op(Sre, ZeroPageX, 6),
    op(Cli, Implied, 2),         rd(Eor, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Sre, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(Eor, AbsoluteX, 4),       op(Lsr, AbsoluteX, 7),       op(Sre, AbsoluteX, 7),
    // $60
    op(Rts, Implied, 6),         op(Adc, IndexedIndirect, 6), op(Jam, Implied, 3),         op(Rra, IndexedIndirect, 8),
    op(Nop, ZeroPage, 3),        op(Adc, ZeroPage, 3),        op(Ror, ZeroPage, 5),        op(Rra, ZeroPage, 5),
    op(Pla, Implied, 4),         op(Adc, Immediate, 2),       op(Ror, Accumulator, 2),     op(Arr, Immediate, 2),
    op(Jmp, Indirect, 5),        op(Adc, Absolute, 4),        op(Ror, Absolute, 6),        op(Rra, Absolute, 6),
    // $70
    op(Bvs, Relative, 2),        rd(Adc, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Rra, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(Adc, ZeroPageX, 4),       op(Ror, ZeroPageX, 6),       op(Rra, ZeroPageX, 6),
    op(Sei, Implied, 2),         rd(Adc, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Rra, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(Adc, AbsoluteX, 4),       op(Ror, AbsoluteX, 7),       op(Rra, AbsoluteX, 7),
    // $80
    op(Nop, Immediate, 2),       op(Sta, IndexedIndirect, 6), op(Nop, Immediate, 2),       op(Sax, IndexedIndirect, 6),
    op(Sty, ZeroPage, 3),        op(Sta, ZeroPage, 3),        op(Stx, ZeroPage, 3),        op(Sax, ZeroPage, 3),
    op(Dey, Implied, 2),         op(Nop, Immediate, 2),       op(Txa, Implied, 2),         op(Xaa, Immediate, 2),
    op(Sty, Absolute, 4),        op(Sta, Absolute, 4),        op(Stx, Absolute, 4),        op(Sax, Absolute, 4),
    // $90
    op(Bcc, Relative, 2),        op(Sta, IndirectIndexed, 6), op(Jam, Implied, 3),         op(Ahx, IndirectIndexed, 6),
    op(Sty, ZeroPageX, 4),       op(Sta, ZeroPageX, 4),       op(Stx, ZeroPageY, 4),       op(Sax, ZeroPageY, 4),
    op(Tya, Implied, 2),         op(Sta, AbsoluteY, 5),       op(Txs, Implied, 2),         op(Tas, AbsoluteY, 5),
    op(Shy, AbsoluteX, 5),       op(Sta, AbsoluteX, 5),       op(Shx, AbsoluteY, 5),       op(Ahx, AbsoluteY, 5),
    // $A0
    op(Ldy, Immediate, 2),       op(Lda, IndexedIndirect, 6), op(Ldx, Immediate, 2),       op(Lax, IndexedIndirect, 6),
    op(Ldy, ZeroPage, 3),        op(Lda, ZeroPage, 3),        op(Ldx, ZeroPage, 3),        op(Lax, ZeroPage, 3),
    op(Tay, Implied, 2),         op(Lda, Immediate, 2),       op(Tax, Implied, 2),         op(Lxa, Immediate, 2),
    op(Ldy, Absolute, 4),        op(Lda, Absolute, 4),        op(Ldx, Absolute, 4),        op(Lax, Absolute, 4),
    // $B0
    op(Bcs, Relative, 2),        rd(Lda, IndirectIndexed, 5), op(Jam, Implied, 3),         rd(Lax, IndirectIndexed, 5),
    op(Ldy, ZeroPageX, 4),       op(Lda, ZeroPageX, 4),       op(Ldx, ZeroPageY, 4),       op(Lax, ZeroPageY, 4),
    op(Clv, Implied, 2),         rd(Lda, AbsoluteY, 4),       op(Tsx, Implied, 2),         rd(Las, AbsoluteY, 4),
    rd(Ldy, AbsoluteX, 4),       rd(Lda, AbsoluteX, 4),       rd(Ldx, AbsoluteY, 4),       rd(Lax, AbsoluteY, 4),
    // $C0
    op(Cpy, Immediate, 2),       op(Cmp, IndexedIndirect, 6), op(Nop, Immediate, 2),       op(Dcp, IndexedIndirect, 8),
    op(Cpy, ZeroPage, 3),        op(Cmp, ZeroPage, 3),        op(Dec, ZeroPage, 5),        op(Dcp, ZeroPage, 5),
    op(Iny, Implied, 2),         op(Cmp, Immediate, 2),       op(Dex, Implied, 2),         op(Axs, Immediate, 2),
    op(Cpy, Absolute, 4),        op(Cmp, Absolute, 4),        op(Dec, Absolute, 6),        op(Dcp, Absolute, 6),
    // $D0
    op(Bne, Relative, 2),        rd(Cmp, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Dcp, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(Cmp, ZeroPageX, 4),       op(Dec, ZeroPageX, 6),       op(Dcp, ZeroPageX, 6),
    op(Cld, Implied, 2),         rd(Cmp, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Dcp, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(Cmp, AbsoluteX, 4),       op(Dec, AbsoluteX, 7),       op(Dcp, AbsoluteX, 7),
    // $E0
    op(Cpx, Immediate, 2),       op(Sbc, IndexedIndirect, 6), op(Nop, Immediate, 2),       op(Isc, IndexedIndirect, 8),
    op(Cpx, ZeroPage, 3),        op(Sbc, ZeroPage, 3),        op(Inc, ZeroPage, 5),        op(Isc, ZeroPage, 5),
    op(Inx, Implied, 2),         op(Sbc, Immediate, 2),       op(Nop, Implied, 2),         op(Sbc, Immediate, 2),
    op(Cpx, Absolute, 4),        op(Sbc, Absolute, 4),        op(Inc, Absolute, 6),        op(Isc, Absolute, 6),
    // $F0
    op(Beq, Relative, 2),        rd(Sbc, IndirectIndexed, 5), op(Jam, Implied, 3),         op(Isc, IndirectIndexed, 8),
    op(Nop, ZeroPageX, 4),       op(Sbc, ZeroPageX, 4),       op(Inc, ZeroPageX, 6),       op(Isc, ZeroPageX, 6),
    op(Sed, Implied, 2),         rd(Sbc, AbsoluteY, 4),       op(Nop, Implied, 2),         op(Isc, AbsoluteY, 7),
    rd(Nop, AbsoluteX, 4),       rd(Sbc, AbsoluteX, 4),       op(Inc, AbsoluteX, 7),       op(Isc, AbsoluteX, 7),
];
