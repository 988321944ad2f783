//! Drawing surfaces for small pixel displays
//!
//! A [`Canvas`] is a rectangle of monochrome or color pixels. A concrete
//! driver only has to write a pixel into its buffer and flush that buffer to
//! the hardware; every surface then gets clearing, shape drawing and a set of
//! proxies that reshape it without copying pixels:
//!
//! - [`Inverted`]: complementary inks
//! - [`Transformed`]: rotated, mirrored, xy-swapped or arbitrarily remapped
//! - [`Folded`]: a long strip addressed as rows, optionally zigzag
//! - [`Part`]: a rectangular crop
//! - [`Extended`]: two surfaces side by side
//! - [`Added`]: two surfaces showing the same thing
//!
//! ```
//! use canvas_graphics_library::{Canvas, Ink, MemoryCanvas, Point, Size};
//!
//! // a 64 pixel LED strip, snaking through an 8x8 grid
//! let mut strip = MemoryCanvas::monochrome(Size::new(64, 1))?;
//! let mut grid = strip.by_ref().folded(8, true)?.rotated(90)?;
//! grid.write_pixel(Point::new(0, 0), Some(Ink::ON))?;
//! grid.flush(false)?;
//! // top-left of the rotated grid is the end of the first row of the fold
//! assert_eq!(strip.flushed_pixel(Point::new(7, 0)), Some(Ink::ON));
//! # Ok::<(), canvas_graphics_library::Error<core::convert::Infallible>>(())
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

mod added;
mod canvas;
pub mod demo;
mod error;
mod extended;
mod folded;
#[cfg(feature = "graphics")]
pub mod graphics;
mod ink;
mod inverted;
#[cfg(any(feature = "alloc", test))]
mod memory;
mod part;
mod shape;
#[cfg(any(feature = "alloc", test))]
mod shared;
#[cfg(feature = "ssd1680")]
pub mod ssd1680;
pub mod transformed;
mod xy;

pub use added::Added;
pub use canvas::{Canvas, CanvasState};
pub use error::{CanvasResult, Error};
pub use extended::{Compass, Extended, Placement};
pub use folded::Folded;
pub use ink::{Color, Ink};
pub use inverted::Inverted;
#[cfg(any(feature = "alloc", test))]
pub use memory::MemoryCanvas;
pub use part::Part;
pub use shape::Shape;
#[cfg(any(feature = "alloc", test))]
pub use shared::Shared;
pub use transformed::{Orientation, Oriented, Transformed};
pub use xy::{Point, Size};

pub trait ErrorType {
    /// Error type of the concrete driver
    type Error: core::fmt::Debug;
}
