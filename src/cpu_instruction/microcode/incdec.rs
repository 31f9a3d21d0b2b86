use super::*;

fn pair_of(cpu_instruction: &CPUInstruction) -> Result<RegisterPair> {
    RegisterPair::from_code(cpu_instruction.opcode >> 4)
        .ok_or(MicrocodeError::UnknownOpcode(cpu_instruction.address, cpu_instruction.opcode))
}

/*
 * INC rr / DEC rr
 * 16 bits, wrapping, flags are left untouched.
 */
pub fn inc_pair(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let pair = pair_of(cpu_instruction)?;

    let word = pair.get(registers).wrapping_add(1);
    pair.set(registers, word);
    registers.program_counter = next_address;

    Ok(LogLine::new(cpu_instruction, resolution, format!("[{}=0x{:04x}]", pair, word)))
}

pub fn dec_pair(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let pair = pair_of(cpu_instruction)?;

    let word = pair.get(registers).wrapping_sub(1);
    pair.set(registers, word);
    registers.program_counter = next_address;

    Ok(LogLine::new(cpu_instruction, resolution, format!("[{}=0x{:04x}]", pair, word)))
}
