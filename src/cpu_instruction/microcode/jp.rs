use super::*;

pub fn jp(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    registers.program_counter = word_operand(cpu_instruction)?;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:04X}]", registers.program_counter),
    ))
}

/*
 * JP cc,nn
 * the condition is encoded on bits 4-3 of the opcode.
 */
pub fn jp_cc(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let target_address = word_operand(cpu_instruction)?;

    if Condition::from_code(cpu_instruction.opcode >> 3).is_met(registers) {
        registers.program_counter = target_address;
    } else {
        registers.program_counter = cpu_instruction.next_address()?;
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:04X}]", registers.program_counter),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_jp() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xc3, "JP nn", AddressingMode::Extended([0x0a, 0x02]), jp);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc3, 0x0a, 0x02]);
        let log_line = cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!("JP $020a".to_owned(), log_line.mnemonic);
        assert_eq!(0x020a, registers.program_counter);
    }

    #[test]
    fn test_jp_z_branch() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xca, "JP Z,nn", AddressingMode::Extended([0x0a, 0x02]), jp_cc);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xca, 0x0a, 0x02]);
        registers.set_z_flag(true);
        cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x020a, registers.program_counter);
    }

    #[test]
    fn test_jp_z_no_branch() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xca, "JP Z,nn", AddressingMode::Extended([0x0a, 0x02]), jp_cc);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xca, 0x0a, 0x02]);
        registers.set_z_flag(false);
        cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x1003, registers.program_counter);
    }

    #[test]
    fn test_jp_nz() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xc2, "JP NZ,nn", AddressingMode::Extended([0x00, 0x20]), jp_cc);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc2, 0x00, 0x20]);
        cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x2000, registers.program_counter);
        registers.program_counter = 0x1000;
        registers.set_z_flag(true);
        cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x1003, registers.program_counter);
    }

    #[test]
    fn test_jp_carry_conditions() {
        let jp_c = CPUInstruction::new(0x1000, 0xda, "JP C,nn", AddressingMode::Extended([0x00, 0x20]), jp_cc);
        let jp_nc = CPUInstruction::new(0x1000, 0xd2, "JP NC,nn", AddressingMode::Extended([0x00, 0x30]), jp_cc);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xda, 0x00, 0x20]);
        registers.set_c_flag(true);
        jp_c.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x2000, registers.program_counter);
        registers.program_counter = 0x1000;
        jp_nc.execute(&mut memory, &mut registers).unwrap();
        assert_eq!(0x1003, registers.program_counter);
    }
}
