mod cpu_instruction;
pub mod microcode;

pub use self::cpu_instruction::{CPUInstruction, LogLine, Microcode};
pub use microcode::MicrocodeError;
