use super::*;

fn do_call(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction, target_address: u16) -> Result<()> {
    registers.stack_push(memory, cpu_instruction.next_address()?)?;
    registers.program_counter = target_address;

    Ok(())
}

/*
 * CALL nn
 * the address of the next instruction is pushed, RET resumes there.
 */
pub fn call(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let target_address = word_operand(cpu_instruction)?;
    do_call(memory, registers, cpu_instruction, target_address)?;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04X}][PC=0x{:04X}]", registers.stack_pointer, registers.program_counter),
    ))
}

pub fn call_cc(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let target_address = word_operand(cpu_instruction)?;

    if Condition::from_code(cpu_instruction.opcode >> 3).is_met(registers) {
        do_call(memory, registers, cpu_instruction, target_address)?;
    } else {
        registers.program_counter = cpu_instruction.next_address()?;
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04X}][PC=0x{:04X}]", registers.stack_pointer, registers.program_counter),
    ))
}
