use std::fs;
use std::path::Path;

use anyhow::Context;

use super::memory::RAM as Memory;
use super::AppResult;

/// Read a raw binary image. Nothing is interpreted, the bytes are meant to
/// be copied at address 0.
pub fn read_image<P: AsRef<Path>>(path: P) -> AppResult<Vec<u8>> {
    let path = path.as_ref();

    fs::read(path).with_context(|| format!("could not read binary file '{}'", path.display()))
}

/// Load a binary file at address 0 of the memory. Bytes past the end of the
/// memory are dropped, the number of bytes actually loaded is returned.
pub fn load_image<P: AsRef<Path>>(path: P, memory: &mut Memory) -> AppResult<usize> {
    let image = read_image(path)?;

    Ok(memory.load(&image))
}
