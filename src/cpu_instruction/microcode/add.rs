use super::*;

/*
 * ADD A,r
 * the source is encoded on bits 2-0 of the opcode, (HL) included.
 */
pub fn add(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let source = Location::from_code(cpu_instruction.opcode);

    let a = registers.accumulator;
    let byte = source.read(registers, memory)?;
    let result = a.wrapping_add(byte);
    registers.status_register = flags::derive_add(a, byte, result);
    registers.accumulator = result;
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[A=0x{:02x}][F={}]", registers.accumulator, registers.format_status()),
    ))
}
