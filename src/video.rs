use std::fmt;
use std::io::{self, Write};
use std::ops::Range;

pub const DEFAULT_VIDEO_START: u16 = 0x8000;
pub const DEFAULT_SCREEN_WIDTH: usize = 16;
pub const DEFAULT_SCREEN_HEIGHT: usize = 16;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/*
 * VideoRegion
 * Rectangle of characters mapped in memory, one byte per character, row
 * after row, starting at `start`.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct VideoRegion {
    pub start: u16,
    pub width: usize,
    pub height: usize,
}

impl Default for VideoRegion {
    fn default() -> Self {
        VideoRegion {
            start: DEFAULT_VIDEO_START,
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl VideoRegion {
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn address_range(&self) -> Range<usize> {
        let start = self.start as usize;
        start..start + self.len()
    }

    pub fn fits_in(&self, memory_size: usize) -> bool {
        self.address_range().end <= memory_size
    }
}

impl fmt::Display for VideoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.address_range();
        write!(
            f,
            "{}x{} characters at #0x{:04X} - #0x{:04X}",
            self.width,
            self.height,
            range.start,
            range.end.saturating_sub(1)
        )
    }
}

/// Read only snapshot of the video plane handed to renderers.
#[derive(Debug, Copy, Clone)]
pub struct VideoFrame<'a> {
    pub region: VideoRegion,
    pub bytes: &'a [u8],
}

impl<'a> VideoFrame<'a> {
    pub fn new(region: VideoRegion, bytes: &'a [u8]) -> Self {
        VideoFrame { region, bytes }
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.bytes.chunks(self.region.width.max(1)).take(self.region.height)
    }

    /// Rows as displayed, 0x00 bytes are blanks. Other bytes are sent
    /// untouched to the output.
    pub fn display_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&byte| if byte == 0x00 { b' ' } else { byte }).collect())
            .collect()
    }

    /// One line of text per row, 0x00 bytes are blanks and bytes above 0x7f
    /// read as Latin-1.
    pub fn text_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&byte| if byte == 0x00 { ' ' } else { byte as char })
                    .collect()
            })
            .collect()
    }
}

/*
 * Renderer
 * Anything able to display the video plane. The execution loop calls it
 * periodically and once more when the program halts.
 */
pub trait Renderer {
    fn render(&mut self, frame: &VideoFrame<'_>) -> io::Result<()>;
}

/// Renders nothing, used when the screen output is not wanted.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &VideoFrame<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// Clears a terminal and prints the video plane as text.
pub struct TerminalRenderer<W: Write> {
    output: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(output: W) -> Self {
        TerminalRenderer { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &VideoFrame<'_>) -> io::Result<()> {
        self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        for row in frame.display_rows() {
            self.output.write_all(&row)?;
            self.output.write_all(b"\n")?;
        }
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let region = VideoRegion::default();
        assert_eq!(256, region.len());
        assert_eq!(0x8000..0x8100, region.address_range());
        assert!(region.fits_in(0x10000));
        assert!(!region.fits_in(0x8000));
    }

    #[test]
    fn test_region_at_end_of_memory() {
        let region = VideoRegion { start: 0xff00, width: 16, height: 16 };
        assert!(region.fits_in(0x10000));
        let region = VideoRegion { start: 0xff01, width: 16, height: 16 };
        assert!(!region.fits_in(0x10000));
    }

    #[test]
    fn test_text_rows() {
        let region = VideoRegion { start: 0, width: 3, height: 2 };
        let bytes = [0x41, 0x00, 0x42, 0x00, 0x00, 0x43];
        let frame = VideoFrame::new(region, &bytes);
        assert_eq!(vec!["A B".to_owned(), "  C".to_owned()], frame.text_rows());
    }

    #[test]
    fn test_terminal_renderer() {
        let region = VideoRegion { start: 0, width: 2, height: 2 };
        let bytes = [0x48, 0x69, 0x00, 0x21];
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&VideoFrame::new(region, &bytes)).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!("\x1b[H\x1b[JHi\n !\n", output);
    }

    #[test]
    fn test_terminal_renderer_writes_raw_bytes() {
        let region = VideoRegion { start: 0, width: 3, height: 1 };
        let bytes = [0xdb, 0x00, 0x41];
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&VideoFrame::new(region, &bytes)).unwrap();
        let mut expected = b"\x1b[H\x1b[J".to_vec();
        expected.extend_from_slice(&[0xdb, b' ', 0x41, b'\n']);
        assert_eq!(expected, renderer.into_inner());
    }

    #[test]
    fn test_region_display() {
        let region = VideoRegion { start: 0x8000, width: 16, height: 16 };
        assert_eq!("16x16 characters at #0x8000 - #0x80FF", region.to_string());
    }
}
