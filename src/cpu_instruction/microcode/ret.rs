use super::*;

pub fn ret(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    registers.program_counter = registers.stack_pull(memory)?;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04X}][PC=0x{:04X}]", registers.stack_pointer, registers.program_counter),
    ))
}

/*
 * RET cc
 * the condition is encoded on bits 4-3 of the opcode.
 */
pub fn ret_cc(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);

    if Condition::from_code(cpu_instruction.opcode >> 3).is_met(registers) {
        registers.program_counter = registers.stack_pull(memory)?;
    } else {
        registers.program_counter = cpu_instruction.next_address()?;
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04X}][PC=0x{:04X}]", registers.stack_pointer, registers.program_counter),
    ))
}
