use core::fmt::Debug;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};
use ssd1680_rs::{self, SSD1680, error::Error as DriverError};

use crate::{Canvas, CanvasResult, CanvasState, Error, ErrorType, Ink, Point, Size};

const FRAME_BUFFER_SIZE: usize = 176 * 296 / 8;

/// Partial refreshes allowed before a full one clears the ghosting
const PARTIAL_REFRESH_LIMIT: u8 = 5;

/// Monochrome surface on an SSD1680 e-paper panel.
///
/// `true` ink is black. The frame buffer packs 8 horizontal pixels per byte,
/// a set bit is white. Every row starts on a fresh byte, so a 122 pixel wide
/// panel uses 16 bytes per row.
pub struct Ssd1680Canvas<
    RST: OutputPin,
    DC: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
    SPI: SpiDevice,
> {
    // bus framing, reset and sleep are all handled by the controller driver
    driver: SSD1680<RST, DC, BUSY, DELAY, SPI>,
    // maximum possible frame buffer size for SSD1680
    frame_buffer: [u8; FRAME_BUFFER_SIZE],
    state: CanvasState,
    width: u16,
    partial_refreshes: u8,
}

impl<RST: OutputPin, DC: OutputPin, BUSY: InputPin, DELAY: DelayNs, SPI: SpiDevice>
    Ssd1680Canvas<RST, DC, BUSY, DELAY, SPI>
{
    pub fn new(
        rst: RST,
        dc: DC,
        busy: BUSY,
        delay: DELAY,
        spi: SPI,
        config: ssd1680_rs::config::DisplayConfig,
    ) -> CanvasResult<Self, DriverError<SPI::Error, RST::Error, DC::Error, BUSY::Error>> {
        let size = Size::new(i32::from(config.width), i32::from(config.height));
        if buffer_len(config.width, config.height) > FRAME_BUFFER_SIZE {
            return Err(Error::InvalidArgument("panel larger than the SSD1680 frame buffer"));
        }
        let state = CanvasState::monochrome(size)?;
        let driver = SSD1680::new(rst, dc, busy, delay, spi, config);
        Ok(Ssd1680Canvas {
            driver,
            frame_buffer: [0xff; FRAME_BUFFER_SIZE],
            state,
            width: config.width,
            // first flush is a full refresh
            partial_refreshes: PARTIAL_REFRESH_LIMIT,
        })
    }

    fn frame_len(&self) -> usize {
        let height = self.state.size().height as u16;
        buffer_len(self.width, height)
    }
}

impl<RST: OutputPin, DC: OutputPin, BUSY: InputPin, DELAY: DelayNs, SPI: SpiDevice> ErrorType
    for Ssd1680Canvas<RST, DC, BUSY, DELAY, SPI>
{
    type Error = DriverError<SPI::Error, RST::Error, DC::Error, BUSY::Error>;
}

impl<
    RST: OutputPin,
    DC: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
    SPI: SpiDevice,
    S: Debug,
    R: Debug,
    D: Debug,
    B: Debug,
> Canvas for Ssd1680Canvas<RST, DC, BUSY, DELAY, SPI>
where
    SPI: SpiDevice<Error = S>,
    RST: OutputPin<Error = R>,
    DC: OutputPin<Error = D>,
    BUSY: InputPin<Error = B>,
{
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(
        &mut self,
        location: Point,
        ink: Ink,
    ) -> CanvasResult<(), DriverError<S, R, D, B>> {
        let Ink::Bool(black) = ink else {
            return Err(Error::InvalidInk);
        };
        let address = get_address(location.x as u16, location.y as u16, self.width);
        let white = !black as u8;
        self.frame_buffer[address.buffer_position] = (self.frame_buffer
            [address.buffer_position]
            & !(1 << address.byte_offset))
            | (white << address.byte_offset);
        Ok(())
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), DriverError<S, R, D, B>> {
        let Ink::Bool(black) = ink else {
            return Err(Error::InvalidInk);
        };
        self.frame_buffer.fill(if black { 0x00 } else { 0xff });
        Ok(())
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), DriverError<S, R, D, B>> {
        let len = self.frame_len();
        self.driver.hw_init().map_err(Error::Driver)?;
        self.driver
            .write_bw_bytes(&self.frame_buffer[..len])
            .map_err(Error::Driver)?;
        if self.partial_refreshes >= PARTIAL_REFRESH_LIMIT || forced {
            log::debug!("ssd1680 full refresh");
            self.driver.full_refresh().map_err(Error::Driver)?;
            self.partial_refreshes = 0;
        } else {
            log::debug!("ssd1680 partial refresh");
            self.driver.partial_refresh().map_err(Error::Driver)?;
            self.partial_refreshes += 1;
        }
        self.driver.enter_deep_sleep().map_err(Error::Driver)
    }
}

struct Address {
    pub buffer_position: usize,
    pub byte_offset: u8,
}

/// Bytes per row, a partial byte at the end of a row is padding
fn row_stride(width: u16) -> usize {
    usize::from(width.div_ceil(8))
}

fn buffer_len(width: u16, height: u16) -> usize {
    row_stride(width) * usize::from(height)
}

fn get_address(x: u16, y: u16, width: u16) -> Address {
    let frambuffer_position = x as usize / 8 + y as usize * row_stride(width);
    let byte_offset = (x % 8) as u8;
    Address {
        buffer_position: frambuffer_position,
        byte_offset,
    }
}
