use super::*;

/*
 * CP r / CP n
 * compare the accumulator with a register, (HL) or an immediate byte. The
 * difference only feeds the flags, A is left untouched.
 */
pub fn cp(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let byte = match cpu_instruction.addressing_mode {
        AddressingMode::Immediate(_) => byte_operand(cpu_instruction)?,
        _ => Location::from_code(cpu_instruction.opcode).read(registers, memory)?,
    };

    let a = registers.accumulator;
    registers.status_register = flags::derive_sub(a, byte, a.wrapping_sub(byte));
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[F={}]", registers.format_status()),
    ))
}
