use super::*;

/*
 * HALT leaves the program counter on its own opcode, the execution loop
 * stops as soon as the halted latch is set.
 */
pub fn halt(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    registers.halted = true;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:04X}][HALTED]", registers.program_counter),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_halt() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x76, "HALT", AddressingMode::Implied, halt);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x76]);
        let log_line = cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!("HALT".to_owned(), log_line.mnemonic);
        assert!(registers.halted);
        assert_eq!(0x1000, registers.program_counter);
    }
}
