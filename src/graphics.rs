//! embedded-graphics support
//!
//! [`GraphicsCanvas`] wraps any surface, proxies included, and implements
//! [`DrawTarget`], so the primitives, fonts and images of the
//! embedded-graphics ecosystem can draw on it.
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//!
//! let mut target = GraphicsCanvas::<_, BinaryColor>::new(display.by_ref().rotated(90)?);
//! Circle::new(Point::new(4, 4), 20)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut target)?;
//! display.flush(false)?;
//! ```

use core::marker::PhantomData;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size as GraphicsSize},
    pixelcolor::{BinaryColor, PixelColor, Rgb888, RgbColor},
};

use crate::{Canvas, Color, Error, Ink, Point};

impl From<BinaryColor> for Ink {
    fn from(color: BinaryColor) -> Self {
        Ink::Bool(color.is_on())
    }
}

impl From<Rgb888> for Ink {
    fn from(color: Rgb888) -> Self {
        Ink::Color(Color::rgb(color.r(), color.g(), color.b()))
    }
}

/// A surface seen as an embedded-graphics draw target with pixel color `Col`
pub struct GraphicsCanvas<C, Col> {
    canvas: C,
    _color: PhantomData<Col>,
}

impl<C: Canvas, Col> GraphicsCanvas<C, Col> {
    pub fn new(canvas: C) -> Self {
        GraphicsCanvas {
            canvas,
            _color: PhantomData,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_inner(self) -> C {
        self.canvas
    }
}

impl<C: Canvas, Col> OriginDimensions for GraphicsCanvas<C, Col> {
    fn size(&self) -> GraphicsSize {
        let size = self.canvas.size();
        GraphicsSize::new(size.width as u32, size.height as u32)
    }
}

impl<C, Col> DrawTarget for GraphicsCanvas<C, Col>
where
    C: Canvas,
    Col: PixelColor + Into<Ink>,
{
    type Color = Col;
    type Error = Error<C::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.canvas
                .write_pixel(Point::new(point.x, point.y), Some(color.into()))?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.canvas.clear_with(color.into())
    }
}
