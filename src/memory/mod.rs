mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

/// Largest memory the 16 bits address bus can reach.
pub const MEMMAX: usize = 0x10000;
pub const DEFAULT_RAM_SIZE: usize = MEMMAX;

/// Rebuild a 16 bits word from its bytes, least significant byte first.
pub fn little_endian(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .rev()
        .fold(0, |word, byte| word << 8 | *byte as u16)
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;

    fn read_byte(&self, addr: u16) -> Result<u8, MemoryError> {
        Ok(self.read(addr as usize, 1)?[0])
    }

    fn write_byte(&mut self, addr: u16, byte: u8) -> Result<(), MemoryError> {
        self.write(addr as usize, &[byte])
    }
}
