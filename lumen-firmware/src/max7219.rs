//! MAX7219 LED matrix driver
//!
//! Drives a daisy chain of eight 8x8 MAX7219 modules arranged as a
//! 32x16 panel over SPI with a manually toggled chip select. The
//! modules are mounted rotated a quarter turn, so panel columns map to
//! digit rows within each block.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use lumen_display::{Color, DisplayError, DrawSurface, FrameBuffer, MatrixDisplay};

/// Panel width in pixels.
pub const WIDTH: usize = 32;

/// Panel height in pixels.
pub const HEIGHT: usize = 16;

/// Pixels per module edge.
const BLOCK: usize = 8;
const BLOCKS_X: usize = WIDTH / BLOCK;
const CHAIN_LEN: usize = (WIDTH / BLOCK) * (HEIGHT / BLOCK);

/// MAX7219 registers
#[allow(dead_code)]
mod reg {
    pub const NOOP: u8 = 0x00;
    pub const DIGIT0: u8 = 0x01;
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// MAX7219 chain driver with an in-memory frame buffer.
pub struct Max7219<SPI, CS> {
    spi: SPI,
    cs: CS,
    frame: FrameBuffer<WIDTH, HEIGHT>,
}

impl<SPI, CS> Max7219<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a driver over a bus and chip-select pin. Call
    /// [`Max7219::init`] before first use.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            frame: FrameBuffer::new(),
        }
    }

    /// Wake the chain into raw-pixel mode and blank it.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.broadcast(reg::DISPLAY_TEST, 0)?;
        self.broadcast(reg::SCAN_LIMIT, 7)?;
        self.broadcast(reg::DECODE_MODE, 0)?;
        self.broadcast(reg::SHUTDOWN, 1)?;
        self.clear()
    }

    /// Write the same register/data word to every module in the chain.
    fn broadcast(&mut self, register: u8, data: u8) -> Result<(), DisplayError> {
        let mut words = [0u8; CHAIN_LEN * 2];
        for chunk in words.chunks_exact_mut(2) {
            chunk[0] = register;
            chunk[1] = data;
        }
        self.write_chain(&words)
    }

    /// Clock one 16-bit word per module through the chain in a single
    /// chip-select window.
    fn write_chain(&mut self, words: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Io)?;
        let result = self.spi.write(words);
        self.cs.set_high().map_err(|_| DisplayError::Io)?;
        result.map_err(|_| DisplayError::Io)
    }

    /// One digit row of one module, read out of the frame buffer.
    ///
    /// The digit index selects a panel column within the block; the
    /// data bits run down it. This is the quarter-turn module mounting.
    fn module_row(&self, module: usize, digit: usize) -> u8 {
        let block_x = (module % BLOCKS_X) * BLOCK;
        let block_y = (module / BLOCKS_X) * BLOCK;
        let mut bits = 0u8;
        for offset in 0..BLOCK {
            let x = (block_x + digit) as i16;
            let y = (block_y + offset) as i16;
            if self.frame.get(x, y) {
                bits |= 1 << (7 - offset);
            }
        }
        bits
    }
}

impl<SPI, CS> DrawSurface for Max7219<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn point(&mut self, x: i16, y: i16, color: Color) {
        self.frame.point(x, y, color);
    }
}

impl<SPI, CS> MatrixDisplay for Max7219<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn width(&self) -> u16 {
        WIDTH as u16
    }

    fn height(&self) -> u16 {
        HEIGHT as u16
    }

    fn contrast(&mut self, level: u8) -> Result<(), DisplayError> {
        // The intensity register is 4 bits; fold the 0-255 level down.
        self.broadcast(reg::INTENSITY, level >> 4)
    }

    fn blank(&mut self) {
        self.frame.clear();
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        for digit in 0..BLOCK {
            let mut words = [0u8; CHAIN_LEN * 2];
            for (i, chunk) in words.chunks_exact_mut(2).enumerate() {
                // The first word shifted out lands in the farthest module.
                let module = CHAIN_LEN - 1 - i;
                chunk[0] = reg::DIGIT0 + digit as u8;
                chunk[1] = self.module_row(module, digit);
            }
            self.write_chain(&words)?;
        }
        Ok(())
    }
}
