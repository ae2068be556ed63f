//! Behavioral tests: programs run through the public API against a flat
//! RAM bus, checking registers, memory, flags, and cycle counts.

use emu_core::{Bus, SimpleBus};
use nes_6502::{IRQ_VECTOR, Mos6502, Status};

fn cpu_with_program(origin: u16, program: &[u8]) -> (Mos6502, SimpleBus) {
    let mut bus = SimpleBus::new();
    bus.load(origin, program);
    let mut cpu = Mos6502::new();
    cpu.regs.pc = origin;
    (cpu, bus)
}

#[test]
fn ora_immediate_sets_negative() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x09, 0x80]);
    cpu.regs.a = 0x01;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x81);
    assert!(cpu.regs.p.is_set(Status::N));
    assert!(!cpu.regs.p.is_set(Status::Z));
    assert_eq!(cpu.regs.pc, 0x0202);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn brk_pushes_state_and_jumps_through_vector() {
    let (mut cpu, mut bus) = cpu_with_program(0x0300, &[0x00]);
    bus.load(IRQ_VECTOR, &[0x00, 0x90]);
    cpu.regs.p = Status(Status::U | Status::C);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.pc, 0x9000);
    assert!(cpu.regs.p.is_set(Status::I));
    assert_eq!(cpu.cycles(), 7);
    // Return address is BRK + 2, pushed high byte first.
    assert_eq!(bus.peek(0x01FD), 0x03);
    assert_eq!(bus.peek(0x01FC), 0x02);
    // Pushed status has B and U set.
    assert_eq!(bus.peek(0x01FB), Status::U | Status::B | Status::C);
    assert_eq!(cpu.regs.s, 0xFA);
}

#[test]
fn slo_indexed_indirect_shifts_and_ors() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x03, 0x40]);
    cpu.regs.x = 0x04;
    cpu.regs.a = 0x01;
    bus.load(0x0044, &[0x00, 0x06]);
    bus.write(0x0600, 0x81);
    cpu.step(&mut bus);

    assert_eq!(bus.peek(0x0600), 0x02);
    assert_eq!(cpu.regs.a, 0x03);
    assert!(cpu.regs.p.is_set(Status::C));
    assert_eq!(cpu.cycles(), 8);
}

#[test]
fn lda_absolute_x_pays_page_cross_penalty() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xBD, 0xFF, 0x20]);
    cpu.regs.x = 0x01;
    bus.write(0x2100, 0x42);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn lda_absolute_x_same_page_is_four_cycles() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xBD, 0x00, 0x20]);
    cpu.regs.x = 0x01;
    bus.write(0x2001, 0x42);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn sta_absolute_x_always_pays_the_fixed_cost() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x9D, 0x00, 0x20]);
    cpu.regs.x = 0x01;
    cpu.regs.a = 0x55;
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x2001), 0x55);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn branch_not_taken_costs_two_cycles() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x10, 0x10]);
    cpu.regs.p.set(Status::N);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0202);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn branch_taken_same_page_costs_three_cycles() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x10, 0x10]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0212);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn branch_taken_across_page_costs_four_cycles() {
    let (mut cpu, mut bus) = cpu_with_program(0x00F0, &[0x10, 0x20]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0112);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn branch_backwards_uses_signed_offset() {
    let (mut cpu, mut bus) = cpu_with_program(0x0210, &[0xD0, 0xFC]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x020E);
}

#[test]
fn jsr_and_rts_round_trip() {
    let (mut cpu, mut bus) = cpu_with_program(0x0240, &[0x20, 0x00, 0x80]);
    bus.load(0x8000, &[0x60]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x8000);
    assert_eq!(cpu.cycles(), 6);
    // JSR pushes the address of its own last byte.
    assert_eq!(bus.peek(0x01FD), 0x02);
    assert_eq!(bus.peek(0x01FC), 0x42);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0243);
    assert_eq!(cpu.cycles(), 12);
    assert_eq!(cpu.regs.s, 0xFD);
}

#[test]
fn jmp_indirect_reproduces_page_boundary_bug() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x6C, 0xFF, 0x30]);
    bus.write(0x30FF, 0x80);
    bus.write(0x3000, 0x40);
    bus.write(0x3100, 0xFF);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x4080);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn php_sets_break_in_pushed_byte_only() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x08]);
    cpu.regs.p = Status(Status::U | Status::Z);
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x01FD), Status::U | Status::B | Status::Z);
    assert!(!cpu.regs.p.is_set(Status::B));
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn plp_forces_unused_and_clears_break() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x28]);
    bus.write(0x01FE, 0xFF);
    cpu.regs.s = 0xFD;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.p.0, 0xFF & !Status::B);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn rti_restores_status_and_pc() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x40]);
    cpu.regs.s = 0xFA;
    bus.write(0x01FB, Status::B | Status::C); // B must not survive the pull
    bus.load(0x01FC, &[0x34, 0x12]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.p.0, Status::U | Status::C);
    assert_eq!(cpu.regs.s, 0xFD);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn stack_pointer_wraps_during_push() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x48]);
    cpu.regs.s = 0x00;
    cpu.regs.a = 0x7A;
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x0100), 0x7A);
    assert_eq!(cpu.regs.s, 0xFF);
}

#[test]
fn decimal_flag_is_inert_for_adc() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xF8, 0x69, 0x01]);
    cpu.regs.a = 0x09;
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    // BCD would give $10; the NES core adds in binary.
    assert_eq!(cpu.regs.a, 0x0A);
    assert!(cpu.regs.p.is_set(Status::D));
}

#[test]
fn sbc_borrows_through_inverted_carry() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x38, 0xE9, 0x01]);
    cpu.regs.a = 0x00;
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(!cpu.regs.p.is_set(Status::C));
    assert!(cpu.regs.p.is_set(Status::N));
}

#[test]
fn cmp_sets_carry_and_zero_on_equal() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xC9, 0x40]);
    cpu.regs.a = 0x40;
    cpu.step(&mut bus);
    assert!(cpu.regs.p.is_set(Status::C));
    assert!(cpu.regs.p.is_set(Status::Z));
}

#[test]
fn bit_copies_operand_high_bits() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x24, 0x10]);
    bus.write(0x0010, 0xC0);
    cpu.regs.a = 0x00;
    cpu.step(&mut bus);
    assert!(cpu.regs.p.is_set(Status::N));
    assert!(cpu.regs.p.is_set(Status::V));
    assert!(cpu.regs.p.is_set(Status::Z));
}

#[test]
fn asl_accumulator_shifts_into_carry() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x0A]);
    cpu.regs.a = 0x81;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x02);
    assert!(cpu.regs.p.is_set(Status::C));
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn ror_memory_rotates_carry_in() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x38, 0x66, 0x10]);
    bus.write(0x0010, 0x02);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x0010), 0x81);
    assert!(!cpu.regs.p.is_set(Status::C));
    assert_eq!(cpu.cycles(), 2 + 5);
}

#[test]
fn inc_absolute_x_is_seven_cycles() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xFE, 0x00, 0x20]);
    cpu.regs.x = 0x01;
    bus.write(0x2001, 0xFF);
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x2001), 0x00);
    assert!(cpu.regs.p.is_set(Status::Z));
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn lax_loads_both_registers() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xA7, 0x10]);
    bus.write(0x0010, 0x8F);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x8F);
    assert_eq!(cpu.regs.x, 0x8F);
    assert!(cpu.regs.p.is_set(Status::N));
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn sax_stores_a_and_x_without_flags() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x87, 0x10]);
    cpu.regs.a = 0xF0;
    cpu.regs.x = 0x3C;
    let before = cpu.regs.p;
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x0010), 0x30);
    assert_eq!(cpu.regs.p, before);
}

#[test]
fn dcp_decrements_then_compares() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xC7, 0x10]);
    bus.write(0x0010, 0x41);
    cpu.regs.a = 0x40;
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x0010), 0x40);
    assert!(cpu.regs.p.is_set(Status::Z));
    assert!(cpu.regs.p.is_set(Status::C));
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn isc_increments_then_subtracts() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x38, 0xE7, 0x10]);
    bus.write(0x0010, 0x0F);
    cpu.regs.a = 0x20;
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x0010), 0x10);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.regs.p.is_set(Status::C));
}

#[test]
fn anc_copies_negative_into_carry() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x0B, 0xFF]);
    cpu.regs.a = 0x80;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.regs.p.is_set(Status::C));
    assert!(cpu.regs.p.is_set(Status::N));
}

#[test]
fn alr_ands_then_shifts_right() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x4B, 0xFF]);
    cpu.regs.a = 0x03;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.regs.p.is_set(Status::C));
}

#[test]
fn arr_sets_carry_and_overflow_from_result_bits() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x6B, 0xFF]);
    cpu.regs.a = 0x80;
    cpu.step(&mut bus);
    // Result $40: C from bit 6, V from bit 6 xor bit 5.
    assert_eq!(cpu.regs.a, 0x40);
    assert!(cpu.regs.p.is_set(Status::C));
    assert!(cpu.regs.p.is_set(Status::V));
}

#[test]
fn axs_subtracts_from_a_and_x() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xCB, 0x05]);
    cpu.regs.a = 0xFF;
    cpu.regs.x = 0x0F;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.x, 0x0A);
    assert!(cpu.regs.p.is_set(Status::C));
}

#[test]
fn lxa_uses_the_magic_constant() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xAB, 0x55]);
    cpu.regs.a = 0x00;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x44);
    assert_eq!(cpu.regs.x, 0x44);
}

#[test]
fn las_ands_stack_pointer_into_three_registers() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xBB, 0x00, 0x30]);
    bus.write(0x3000, 0x0F);
    cpu.regs.s = 0xF3;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x03);
    assert_eq!(cpu.regs.x, 0x03);
    assert_eq!(cpu.regs.s, 0x03);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn shx_stores_x_and_high_byte_plus_one() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x9E, 0x00, 0x10]);
    cpu.regs.x = 0xFF;
    cpu.regs.y = 0x05;
    cpu.step(&mut bus);
    assert_eq!(bus.peek(0x1005), 0x11);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn sha_page_cross_corrupts_the_address_high_byte() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x9F, 0xFF, 0x10]);
    cpu.regs.a = 0xFF;
    cpu.regs.x = 0xFF;
    cpu.regs.y = 0x01;
    cpu.step(&mut bus);
    // Target $1100 crossed a page: stored value A&X&$11 lands at $1100
    // with the high byte replaced by the value itself.
    assert_eq!(bus.peek(0x1100), 0x11);
}

#[test]
fn nop_variants_have_documented_widths_and_costs() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x1A, 0x80, 0x00, 0x04, 0x10, 0x0C, 0x00, 0x30]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0201);
    assert_eq!(cpu.cycles(), 2);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0203);
    assert_eq!(cpu.cycles(), 4);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0205);
    assert_eq!(cpu.cycles(), 7);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0208);
    assert_eq!(cpu.cycles(), 11);
}

#[test]
fn jam_leaves_pc_in_place() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x02]);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.cycles(), 3);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn irq_is_masked_by_the_interrupt_flag() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0xEA, 0x58, 0xEA]);
    bus.load(IRQ_VECTOR, &[0x00, 0xA0]);
    cpu.regs.p.set(Status::I);
    cpu.interrupt();
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0201);

    // CLI lets the still-pending request through on the next step.
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0xA000);
    assert!(cpu.regs.p.is_set(Status::I));
    // Pushed status has B clear.
    assert_eq!(bus.peek(0x01FB) & Status::B, 0);
}

#[test]
fn undocumented_sbc_matches_the_documented_one() {
    let (mut cpu, mut bus) = cpu_with_program(0x0200, &[0x38, 0xEB, 0x01]);
    cpu.regs.a = 0x10;
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.regs.p.is_set(Status::C));
    assert_eq!(cpu.cycles(), 4);
}
