use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize, usize),  // read len, address, memory size
    WriteOverflow(usize, usize, usize), // write len, address, memory size
    StackOverflow(u16),                 // stack pointer
    StackUnderflow(u16),                // stack pointer
    Allocation(usize),                  // requested size
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr, size) => write!(
                f,
                "could not READ {} bytes at address #0x{:04X}, memory size is 0x{:04X}",
                read_len, addr, size
            ),
            MemoryError::WriteOverflow(write_len, addr, size) => write!(
                f,
                "could not WRITE {} bytes at address #0x{:04X}, memory size is 0x{:04X}",
                write_len, addr, size
            ),
            MemoryError::StackOverflow(sp) => write!(
                f,
                "stack overflow, cannot push below #0x{:04X}",
                sp
            ),
            MemoryError::StackUnderflow(sp) => write!(
                f,
                "stack underflow, cannot pull above #0x{:04X}",
                sp
            ),
            MemoryError::Allocation(size) => {
                write!(f, "unable to allocate {} bytes of virtual RAM", size)
            }
        }
    }
}

impl error::Error for MemoryError {}
