use super::*;

pub fn nop(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    registers.program_counter = next_address;

    Ok(LogLine::new(cpu_instruction, resolution, String::new()))
}
