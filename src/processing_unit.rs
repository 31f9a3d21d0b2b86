use super::addressing_mode::OperandSize;
use super::cpu_instruction::microcode::{self, MicrocodeError, Result};
use super::cpu_instruction::{CPUInstruction, LogLine, Microcode};
use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use super::registers::Registers;
use std::sync::OnceLock;

pub const OPCODE_HALT: u8 = 0x76;

/// Static description of an opcode: how to print it, how many operand bytes
/// follow it and the microcode implementing it.
#[derive(Clone, Copy)]
pub struct OpcodeDefinition {
    pub mnemonic: &'static str,
    pub operand_size: OperandSize,
    pub microcode: Microcode,
}

impl OpcodeDefinition {
    const fn new(mnemonic: &'static str, operand_size: OperandSize, microcode: Microcode) -> Self {
        OpcodeDefinition {
            mnemonic,
            operand_size,
            microcode,
        }
    }
}

pub type OpcodeTable = [Option<OpcodeDefinition>; 256];

const REGISTER_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];

fn build_opcode_table() -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];
    let mut set = |opcode: u8, mnemonic: &'static str, operand_size, microcode: Microcode| {
        table[opcode as usize] = Some(OpcodeDefinition::new(mnemonic, operand_size, microcode));
    };

    set(0x00, "NOP", OperandSize::None, microcode::nop);
    set(0x76, "HALT", OperandSize::None, microcode::halt);

    // LD r,n
    for (opcode, mnemonic) in [
        (0x06, "LD B,n"),
        (0x0e, "LD C,n"),
        (0x16, "LD D,n"),
        (0x1e, "LD E,n"),
        (0x26, "LD H,n"),
        (0x2e, "LD L,n"),
        (0x36, "LD (HL),n"),
        (0x3e, "LD A,n"),
    ] {
        set(opcode, mnemonic, OperandSize::Byte, microcode::ld_immediate);
    }

    // 16 bits pairs
    for (opcode, mnemonic) in [(0x11, "LD DE,nn"), (0x21, "LD HL,nn"), (0x31, "LD SP,nn")] {
        set(opcode, mnemonic, OperandSize::Word, microcode::ld_pair);
    }
    for (opcode, mnemonic) in [(0x13, "INC DE"), (0x23, "INC HL"), (0x33, "INC SP")] {
        set(opcode, mnemonic, OperandSize::None, microcode::inc_pair);
    }
    for (opcode, mnemonic) in [(0x1b, "DEC DE"), (0x2b, "DEC HL"), (0x3b, "DEC SP")] {
        set(opcode, mnemonic, OperandSize::None, microcode::dec_pair);
    }
    set(0x12, "LD (DE),A", OperandSize::None, microcode::ld_de_a);
    set(0x1a, "LD A,(DE)", OperandSize::None, microcode::ld_a_de);

    // LD r,r' occupies 0x40-0x7f, 0x76 being HALT
    for opcode in 0x40..=0x7fu8 {
        if opcode == OPCODE_HALT {
            continue;
        }
        let mnemonic = leak_mnemonic(format!(
            "LD {},{}",
            REGISTER_NAMES[(opcode >> 3 & 0b111) as usize],
            REGISTER_NAMES[(opcode & 0b111) as usize]
        ));
        set(opcode, mnemonic, OperandSize::None, microcode::ld);
    }

    for opcode in 0x80..=0x87u8 {
        let mnemonic = leak_mnemonic(format!("ADD A,{}", REGISTER_NAMES[(opcode & 0b111) as usize]));
        set(opcode, mnemonic, OperandSize::None, microcode::add);
    }
    for opcode in 0xb8..=0xbfu8 {
        let mnemonic = leak_mnemonic(format!("CP {}", REGISTER_NAMES[(opcode & 0b111) as usize]));
        set(opcode, mnemonic, OperandSize::None, microcode::cp);
    }
    set(0xfe, "CP n", OperandSize::Byte, microcode::cp);

    // control transfer
    set(0xc3, "JP nn", OperandSize::Word, microcode::jp);
    set(0xcd, "CALL nn", OperandSize::Word, microcode::call);
    set(0xc9, "RET", OperandSize::None, microcode::ret);
    for (opcode, mnemonic) in [(0xc2, "JP NZ,nn"), (0xca, "JP Z,nn"), (0xd2, "JP NC,nn"), (0xda, "JP C,nn")] {
        set(opcode, mnemonic, OperandSize::Word, microcode::jp_cc);
    }
    for (opcode, mnemonic) in [(0xc4, "CALL NZ,nn"), (0xcc, "CALL Z,nn"), (0xd4, "CALL NC,nn"), (0xdc, "CALL C,nn")] {
        set(opcode, mnemonic, OperandSize::Word, microcode::call_cc);
    }
    for (opcode, mnemonic) in [(0xc0, "RET NZ"), (0xc8, "RET Z"), (0xd0, "RET NC"), (0xd8, "RET C")] {
        set(opcode, mnemonic, OperandSize::None, microcode::ret_cc);
    }

    table
}

// The table is built once per process, generated mnemonics live as long.
fn leak_mnemonic(mnemonic: String) -> &'static str {
    Box::leak(mnemonic.into_boxed_str())
}

pub fn opcode_table() -> &'static OpcodeTable {
    static TABLE: OnceLock<OpcodeTable> = OnceLock::new();
    TABLE.get_or_init(build_opcode_table)
}

/*
 * resolve_opcode
 * Decode the opcode at the given address and fetch its operands.
 */
pub fn resolve_opcode(address: u16, opcode: u8, memory: &Memory) -> Result<CPUInstruction> {
    let definition = opcode_table()[opcode as usize]
        .ok_or(MicrocodeError::UnknownOpcode(address, opcode))?;
    let addressing_mode = definition.operand_size.fetch(address, memory)?;

    Ok(CPUInstruction::new(
        address,
        opcode,
        definition.mnemonic,
        addressing_mode,
        definition.microcode,
    ))
}

pub fn fetch_opcode(registers: &Registers, memory: &Memory) -> std::result::Result<u8, MemoryError> {
    memory.read_byte(registers.program_counter)
}

/// Run the instruction at the program counter. Unknown opcodes are reported
/// as `MicrocodeError::UnknownOpcode` and leave the registers untouched.
pub fn execute_step(registers: &mut Registers, memory: &mut Memory) -> Result<LogLine> {
    let opcode = fetch_opcode(registers, memory)?;
    let cpu_instruction = resolve_opcode(registers.program_counter, opcode, memory)?;

    cpu_instruction.execute(memory, registers)
}

/*
 * disassemble
 * Decode memory from start up to end (excluded, 0x10000 reaches the last
 * byte) without executing anything.
 * Bytes that are not opcodes show up as data.
 */
pub fn disassemble(start: u16, end: usize, memory: &Memory) -> std::result::Result<Vec<String>, MemoryError> {
    let mut output: Vec<String> = vec![];
    let mut address = start as usize;
    let end = end.min(memory.get_size());

    while address < end {
        let opcode = memory.read(address, 1)?[0];
        match resolve_opcode(address as u16, opcode, memory) {
            Ok(cpu_instruction) => {
                output.push(cpu_instruction.to_string());
                address += cpu_instruction.addressing_mode.instruction_len() as usize;
            }
            Err(_) => {
                output.push(format!("#0x{:04X}: ({:02x})          DB   ${:02x}", address, opcode, opcode));
                address += 1;
            }
        }
    }

    Ok(output)
}
