use super::*;
use std::fmt;
use std::ops::Range;

/// Zero filled, fixed size memory. The size is chosen once at startup and
/// never changes afterwards.
pub struct RAM {
    ram: Box<[u8]>,
}

impl RAM {
    pub fn new(size: usize) -> Result<RAM, MemoryError> {
        if size == 0 || size > MEMMAX {
            return Err(MemoryError::Allocation(size));
        }
        let mut ram: Vec<u8> = Vec::new();
        ram.try_reserve_exact(size)
            .map_err(|_| MemoryError::Allocation(size))?;
        ram.resize(size, 0x00);

        Ok(RAM {
            ram: ram.into_boxed_slice(),
        })
    }

    /// Borrow a contiguous region without copying it, the renderer polls
    /// the video plane this way.
    pub fn view(&self, region: Range<usize>) -> Result<&[u8], MemoryError> {
        self.ram
            .get(region.clone())
            .ok_or(MemoryError::ReadOverflow(
                region.len(),
                region.start,
                self.ram.len(),
            ))
    }

    /// Copy an image at address 0, whatever does not fit is dropped.
    /// Returns the number of bytes actually stored.
    pub fn load(&mut self, image: &[u8]) -> usize {
        let len = image.len().min(self.ram.len());
        self.ram[..len].copy_from_slice(&image[..len]);

        len
    }
}

impl Default for RAM {
    fn default() -> Self {
        Self {
            ram: vec![0x00; DEFAULT_RAM_SIZE].into_boxed_slice(),
        }
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if self.ram.len() >= addr + len {
            Ok(self.ram[addr..addr + len].to_vec())
        } else {
            Err(MemoryError::ReadOverflow(len, addr, self.ram.len()))
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.ram.len() {
            Err(MemoryError::WriteOverflow(data.len(), location, self.ram.len()))
        } else {
            self.ram[location..location + data.len()].copy_from_slice(data);

            Ok(())
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RAM [{} bytes]", self.ram.len())
    }
}
