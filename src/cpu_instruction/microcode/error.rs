use crate::memory::MemoryError;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, MicrocodeError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MicrocodeError {
    Memory(MemoryError),
    UnknownOpcode(u16, u8),   // address, opcode
    MissingOperand(u16, u8),  // address, opcode
}

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MicrocodeError::Memory(e) => write!(f, "memory error: {}", e),
            MicrocodeError::UnknownOpcode(address, opcode) => {
                write!(f, "unknown opcode {:02X} at {:04X}", opcode, address)
            }
            MicrocodeError::MissingOperand(address, opcode) => write!(
                f,
                "opcode {:02X} at {:04X} was decoded without its operand",
                opcode, address
            ),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MicrocodeError::Memory(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MemoryError> for MicrocodeError {
    fn from(err: MemoryError) -> MicrocodeError {
        MicrocodeError::Memory(err)
    }
}
