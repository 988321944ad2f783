//! What can be drawn onto a surface
//!
//! Rasterizing lines, circles or text is left to the shape implementations;
//! they only ever go through [`Canvas::write_pixel`], so they work on any
//! surface, proxies included, and may freely draw partly off-surface.

use crate::{Canvas, CanvasResult, Ink, Point};

pub trait Shape {
    /// Draw onto `canvas`, displaced by `offset`. `None` ink lets the shape
    /// pick its own.
    fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), C::Error>;
}

/// A single pixel, foreground by default
impl Shape for Point {
    fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), C::Error> {
        match offset.checked_add(*self) {
            Some(location) => canvas.write_pixel(location, Some(ink.unwrap_or(Ink::ON))),
            // beyond any surface
            None => Ok(()),
        }
    }
}

impl<T: Shape> Shape for [T] {
    fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), C::Error> {
        for shape in self {
            shape.write(&mut *canvas, offset, ink)?;
        }
        Ok(())
    }
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), C::Error> {
        self.as_slice().write(canvas, offset, ink)
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), C::Error> {
        (**self).write(canvas, offset, ink)
    }
}
