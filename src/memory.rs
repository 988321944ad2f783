//! Heap-backed surface that only records what happens to it
//!
//! Useful as a test double and as an off-screen buffer: it keeps a working
//! buffer that writes go to, and a front buffer that receives a copy on every
//! flush.

use alloc::{vec, vec::Vec};
use core::convert::Infallible;

use crate::{Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point, Size};

pub struct MemoryCanvas {
    state: CanvasState,
    pixels: Vec<Ink>,
    flushed: Vec<Ink>,
    writes: Vec<u32>,
    flushes: usize,
    forced_flushes: usize,
    clears: usize,
}

impl MemoryCanvas {
    pub fn new(size: Size, is_color: bool, background: Ink) -> CanvasResult<Self, Infallible> {
        let state = CanvasState::new(size, is_color, background)?;
        let area = size.area();
        let background = state.background();
        Ok(MemoryCanvas {
            state,
            pixels: vec![background; area],
            flushed: vec![background; area],
            writes: vec![0; area],
            flushes: 0,
            forced_flushes: 0,
            clears: 0,
        })
    }

    pub fn monochrome(size: Size) -> CanvasResult<Self, Infallible> {
        Self::new(size, false, Ink::OFF)
    }

    /// Current content of a pixel, `None` when out of bounds
    pub fn pixel(&self, location: Point) -> Option<Ink> {
        self.state
            .size()
            .index_of(location)
            .map(|index| self.pixels[index])
    }

    /// Content of a pixel as of the last flush
    pub fn flushed_pixel(&self, location: Point) -> Option<Ink> {
        self.state
            .size()
            .index_of(location)
            .map(|index| self.flushed[index])
    }

    /// Number of primitive writes to a pixel. Clears are not counted.
    pub fn writes_at(&self, location: Point) -> u32 {
        self.state
            .size()
            .index_of(location)
            .map_or(0, |index| self.writes[index])
    }

    pub fn total_writes(&self) -> u32 {
        self.writes.iter().sum()
    }

    /// Locations whose current content differs from the background
    pub fn marked(&self) -> Vec<Point> {
        let background = self.state.background();
        self.state
            .size()
            .points()
            .zip(&self.pixels)
            .filter(|(_, ink)| **ink != background)
            .map(|(location, _)| location)
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn forced_flush_count(&self) -> usize {
        self.forced_flushes
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl ErrorType for MemoryCanvas {
    type Error = Infallible;
}

impl Canvas for MemoryCanvas {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), Infallible> {
        if let Some(index) = self.state.size().index_of(location) {
            self.pixels[index] = ink;
            self.writes[index] += 1;
        }
        Ok(())
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), Infallible> {
        self.flushed.copy_from_slice(&self.pixels);
        self.flushes += 1;
        if forced {
            self.forced_flushes += 1;
        }
        Ok(())
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), Infallible> {
        self.pixels.fill(ink);
        self.clears += 1;
        Ok(())
    }
}
