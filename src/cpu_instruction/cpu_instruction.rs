use super::microcode::Result as MicrocodeResult;
use crate::addressing_mode::*;
use crate::memory::RAM as Memory;
use crate::memory::{MemoryError, MEMMAX};
use crate::registers::Registers;
use std::fmt;

pub type Microcode = fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

pub struct CPUInstruction {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: u16,
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic,
            addressing_mode,
            microcode,
        }
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    /*
     * Address of the instruction following this one. The program counter
     * never wraps: an instruction ending on the last byte of a full 64K
     * memory has no successor.
     */
    pub fn next_address(&self) -> Result<u16, MemoryError> {
        self.address
            .checked_add(self.addressing_mode.instruction_len())
            .ok_or(MemoryError::ReadOverflow(1, MEMMAX, MEMMAX))
    }

    /*
     * Mnemonics are templates where `n` stands for an immediate byte and `nn`
     * for an immediate word, registers and conditions are upper case.
     */
    pub fn syntax(&self) -> String {
        match self.addressing_mode {
            AddressingMode::Implied => self.mnemonic.to_owned(),
            AddressingMode::Immediate(_) => self
                .mnemonic
                .replacen('n', &self.addressing_mode.to_string(), 1),
            AddressingMode::Extended(_) => self
                .mnemonic
                .replacen("nn", &self.addressing_mode.to_string(), 1),
        }
    }

    pub fn byte_sequence(&self) -> String {
        let mut bytes = vec![self.opcode];
        bytes.extend(self.addressing_mode.get_operands());

        format_bytes(&bytes)
    }
}

fn format_bytes(bytes: &[u8]) -> String {
    format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{}",
            self.address,
            self.byte_sequence(),
            self.syntax()
        )
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPUInstruction [#0x{:04X} opcode:0x{:02x} {} {:?}]",
            self.address, self.opcode, self.mnemonic, self.addressing_mode
        )
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub resolution: AddressingModeResolution,
    pub outcome: String,
}

impl LogLine {
    pub fn new(
        cpu_instruction: &CPUInstruction,
        resolution: AddressingModeResolution,
        outcome: String,
    ) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.syntax(),
            resolution,
            outcome,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        bytes.extend(self.resolution.operands.iter());

        write!(
            f,
            "#0x{:04X}: {: <14}{: <14} {}  {}",
            self.address,
            format_bytes(&bytes),
            self.mnemonic,
            self.resolution,
            self.outcome
        )
    }
}
