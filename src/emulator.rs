use super::config::Config;
use super::cpu_instruction::{LogLine, MicrocodeError};
use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use super::processing_unit::execute_step;
use super::registers::{Registers, TOP_OF_STACK};
use super::video::{Renderer, VideoFrame, VideoRegion};
use std::error;
use std::fmt;
use std::io;

/// The screen is refreshed once every this many instructions.
pub const RENDER_INTERVAL: u64 = 20;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ExecutionState {
    Running,
    Halted,
}

/// Outcome of a single step of the execution loop.
#[derive(Debug)]
pub enum Step {
    Executed(LogLine),
    Skipped { address: u16, opcode: u8 },
}

#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub struct RunReport {
    pub executed: u64,
    pub skipped: u64,
    pub renders: u64,
}

#[derive(Debug)]
pub enum EmulatorError {
    Memory(MemoryError),
    VideoOutOfBounds { region: VideoRegion, memory_size: usize },
    Fault { address: u16, opcode: Option<u8>, error: MicrocodeError },
    Render(io::Error),
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::Memory(e) => write!(f, "memory error: {}", e),
            EmulatorError::VideoOutOfBounds { region, memory_size } => write!(
                f,
                "video region {} does not fit in {} bytes of memory",
                region, memory_size
            ),
            EmulatorError::Fault { address, opcode: Some(opcode), error } => write!(
                f,
                "fault executing opcode {:02X} at #0x{:04X}: {}",
                opcode, address, error
            ),
            EmulatorError::Fault { address, opcode: None, error } => {
                write!(f, "fault fetching opcode at #0x{:04X}: {}", address, error)
            }
            EmulatorError::Render(e) => write!(f, "render error: {}", e),
        }
    }
}

impl error::Error for EmulatorError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EmulatorError::Memory(e) => Some(e),
            EmulatorError::Fault { error, .. } => Some(error),
            EmulatorError::Render(e) => Some(e),
            EmulatorError::VideoOutOfBounds { .. } => None,
        }
    }
}

impl From<MemoryError> for EmulatorError {
    fn from(err: MemoryError) -> EmulatorError {
        EmulatorError::Memory(err)
    }
}

impl From<io::Error> for EmulatorError {
    fn from(err: io::Error) -> EmulatorError {
        EmulatorError::Render(err)
    }
}

/*
 * Emulator
 * Owns the registers and the memory of one machine. The video region is
 * checked against the memory size once, at creation.
 */
pub struct Emulator {
    pub registers: Registers,
    pub memory: Memory,
    video: VideoRegion,
    tick: u64,
}

impl Emulator {
    pub fn new(config: &Config) -> Result<Emulator, EmulatorError> {
        let memory = Memory::new(config.ram_size)?;
        Emulator::with_memory(memory, config.video_region())
    }

    pub fn with_memory(memory: Memory, video: VideoRegion) -> Result<Emulator, EmulatorError> {
        if !video.fits_in(memory.get_size()) {
            return Err(EmulatorError::VideoOutOfBounds {
                region: video,
                memory_size: memory.get_size(),
            });
        }
        let registers = Registers::with_stack_pointer(0x0000, initial_stack_pointer(memory.get_size()));

        Ok(Emulator {
            registers,
            memory,
            video,
            tick: 0,
        })
    }

    /// Copy a program image at address 0, returns how many bytes fit.
    pub fn load(&mut self, image: &[u8]) -> usize {
        self.memory.load(image)
    }

    pub fn state(&self) -> ExecutionState {
        if self.registers.halted {
            ExecutionState::Halted
        } else {
            ExecutionState::Running
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn video_region(&self) -> VideoRegion {
        self.video
    }

    pub fn video(&self) -> Result<VideoFrame<'_>, EmulatorError> {
        let bytes = self.memory.view(self.video.address_range())?;

        Ok(VideoFrame::new(self.video, bytes))
    }

    /*
     * step
     * Execute the instruction at PC. An unknown opcode is not fatal: it is
     * reported as skipped and the program counter moves past it.
     */
    pub fn step(&mut self) -> Result<Step, EmulatorError> {
        let address = self.registers.program_counter;
        self.tick += 1;

        match execute_step(&mut self.registers, &mut self.memory) {
            Ok(log_line) => Ok(Step::Executed(log_line)),
            Err(MicrocodeError::UnknownOpcode(address, opcode)) => {
                let size = self.memory.get_size();
                let next_address = address.checked_add(1).ok_or(EmulatorError::Fault {
                    address,
                    opcode: Some(opcode),
                    error: MicrocodeError::Memory(MemoryError::ReadOverflow(1, size, size)),
                })?;
                self.registers.program_counter = next_address;
                Ok(Step::Skipped { address, opcode })
            }
            Err(error) => Err(EmulatorError::Fault {
                address,
                opcode: self.memory.read_byte(address).ok(),
                error,
            }),
        }
    }

    /*
     * run
     * Step until the program halts. The renderer is called every
     * RENDER_INTERVAL instructions starting with the first one, and once
     * more when the program halts. `on_step` sees every step.
     */
    pub fn run<R, F>(&mut self, renderer: &mut R, mut on_step: F) -> Result<RunReport, EmulatorError>
    where
        R: Renderer + ?Sized,
        F: FnMut(&Step),
    {
        let mut report = RunReport::default();

        while self.state() == ExecutionState::Running {
            let render_due = self.tick % RENDER_INTERVAL == 0;
            let step = self.step()?;
            match step {
                Step::Executed(_) => report.executed += 1,
                Step::Skipped { .. } => report.skipped += 1,
            }
            on_step(&step);

            if render_due && self.state() == ExecutionState::Running {
                renderer.render(&self.video()?)?;
                report.renders += 1;
            }
        }
        renderer.render(&self.video()?)?;
        report.renders += 1;

        Ok(report)
    }
}

impl fmt::Debug for Emulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Emulator [{:?} | {:?} | video {} | tick {}]",
            self.registers, self.memory, self.video, self.tick
        )
    }
}

/// The stack starts at the top of memory, on an even address.
pub fn initial_stack_pointer(memory_size: usize) -> u16 {
    (memory_size.min(TOP_OF_STACK as usize) & !1) as u16
}
