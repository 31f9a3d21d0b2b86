use super::*;

fn format_store(location: &Location, registers: &Registers, value: u8) -> String {
    match location {
        Location::IndirectHL => format!("[(0x{:04X})=0x{:02x}]", registers.get_hl(), value),
        Location::Register(register) => format!("[{}=0x{:02x}]", register, value),
    }
}

/*
 * LD r,r'
 * destination on bits 5-3, source on bits 2-0. Either may be (HL) but not
 * both, that encoding is HALT.
 */
pub fn ld(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let destination = Location::from_code(cpu_instruction.opcode >> 3);
    let source = Location::from_code(cpu_instruction.opcode);

    let byte = source.read(registers, memory)?;
    destination.write(registers, memory, byte)?;
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_store(&destination, registers, byte),
    ))
}

/*
 * LD r,n
 * destination on bits 5-3, the byte follows the opcode.
 */
pub fn ld_immediate(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let destination = Location::from_code(cpu_instruction.opcode >> 3);

    let byte = byte_operand(cpu_instruction)?;
    destination.write(registers, memory, byte)?;
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_store(&destination, registers, byte),
    ))
}

/*
 * LD rr,nn
 * pair on bits 5-4, the word follows the opcode low byte first.
 */
pub fn ld_pair(_memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;
    let pair = RegisterPair::from_code(cpu_instruction.opcode >> 4)
        .ok_or(MicrocodeError::UnknownOpcode(cpu_instruction.address, cpu_instruction.opcode))?;

    let word = word_operand(cpu_instruction)?;
    pair.set(registers, word);
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[{}=0x{:04x}]", pair, word),
    ))
}

pub fn ld_a_de(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;

    registers.accumulator = memory.read_byte(registers.get_de())?;
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[A=0x{:02x}]", registers.accumulator),
    ))
}

pub fn ld_de_a(memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let resolution = cpu_instruction.addressing_mode.solve(cpu_instruction.address);
    let next_address = cpu_instruction.next_address()?;

    memory.write_byte(registers.get_de(), registers.accumulator)?;
    registers.program_counter = next_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[(0x{:04X})=0x{:02x}]", registers.get_de(), registers.accumulator),
    ))
}
