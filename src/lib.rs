mod addressing_mode;
mod config;
mod cpu_instruction;
mod emulator;
mod flags;
mod loader;
pub mod memory;
mod processing_unit;
mod registers;
mod video;

pub const VERSION: &str = "0.1.0";

pub type AppResult<T> = anyhow::Result<T>;

pub use addressing_mode::{AddressingMode, AddressingModeResolution, Condition, Location, RegisterPair};
pub use config::Config;
pub use cpu_instruction::{CPUInstruction, LogLine, MicrocodeError};
pub use emulator::{initial_stack_pointer, Emulator, EmulatorError, ExecutionState, RunReport, Step, RENDER_INTERVAL};
pub use flags::{derive_add, derive_sub, CF, HF, NF, PF, SF, ZF};
pub use loader::{load_image, read_image};
pub use memory::RAM as Memory;
pub use memory::{AddressableIO, MemoryError};
pub use processing_unit::*;
pub use registers::{Register, Registers};
pub use video::{NullRenderer, Renderer, TerminalRenderer, VideoFrame, VideoRegion};
