use crate::addressing_mode::*;
use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::flags;
use crate::memory::{AddressableIO, RAM as Memory};
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod add;
mod call;
mod cp;
mod halt;
mod incdec;
mod jp;
mod ld;
mod nop;
mod ret;

pub use add::add;
pub use call::{call, call_cc};
pub use cp::cp;
pub use halt::halt;
pub use incdec::{dec_pair, inc_pair};
pub use jp::{jp, jp_cc};
pub use ld::{ld, ld_a_de, ld_de_a, ld_immediate, ld_pair};
pub use nop::nop;
pub use ret::{ret, ret_cc};

fn byte_operand(cpu_instruction: &CPUInstruction) -> Result<u8> {
    cpu_instruction
        .addressing_mode
        .byte()
        .ok_or(MicrocodeError::MissingOperand(cpu_instruction.address, cpu_instruction.opcode))
}

fn word_operand(cpu_instruction: &CPUInstruction) -> Result<u16> {
    cpu_instruction
        .addressing_mode
        .word()
        .ok_or(MicrocodeError::MissingOperand(cpu_instruction.address, cpu_instruction.opcode))
}
