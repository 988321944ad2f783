use crate::{Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point};

/// Proxy that forwards every write, clear and flush to two surfaces, for
/// instance to show the same image on two displays.
///
/// The size is the componentwise maximum; each surface drops what falls
/// outside itself.
pub struct Added<A, B> {
    a: A,
    b: B,
    state: CanvasState,
}

impl<A, B> Added<A, B>
where
    A: Canvas,
    B: Canvas<Error = A::Error>,
{
    pub fn new(a: A, b: B) -> Self {
        let size = a.size().max(b.size());
        let is_color = a.is_color() && b.is_color();
        log::debug!("added canvas {}x{}", size.width, size.height);
        let state = CanvasState::combined(size, is_color, a.background());
        Added { a, b, state }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Canvas, B> ErrorType for Added<A, B> {
    type Error = A::Error;
}

impl<A, B> Canvas for Added<A, B>
where
    A: Canvas,
    B: Canvas<Error = A::Error>,
{
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), A::Error> {
        let a = self.a.write_pixel(location, Some(ink));
        let b = self.b.write_pixel(location, Some(ink));
        a.and(b)
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), A::Error> {
        let a = self.a.flush(forced);
        let b = self.b.flush(forced);
        a.and(b)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), A::Error> {
        let a = self.a.clear_with(ink);
        let b = self.b.clear_with(ink);
        a.and(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryCanvas, Size};

    #[test_log::test]
    fn writes_reach_both() {
        let a = MemoryCanvas::monochrome(Size::new(4, 2)).unwrap();
        let b = MemoryCanvas::monochrome(Size::new(2, 3)).unwrap();
        let mut both = a.added(b);
        assert_eq!(both.size(), Size::new(4, 3));

        both.write_pixel(Point::new(1, 1), Some(Ink::ON)).unwrap();
        both.write_pixel(Point::new(3, 0), Some(Ink::ON)).unwrap();
        both.write_pixel(Point::new(0, 2), Some(Ink::ON)).unwrap();
        both.clear().unwrap();
        both.flush(true).unwrap();

        let (a, b) = both.into_inner();
        assert_eq!(a.total_writes(), 2);
        assert_eq!(b.total_writes(), 2);
        assert_eq!((a.clear_count(), b.clear_count()), (1, 1));
        assert_eq!((a.forced_flush_count(), b.forced_flush_count()), (1, 1));
    }
}
