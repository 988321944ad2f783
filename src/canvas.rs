//! The surface contract shared by concrete drivers and proxies

use crate::{
    Added, CanvasResult, Error, ErrorType, Extended, Folded, Ink, Inverted, Oriented, Orientation,
    Part, Point, Shape, Size, Transformed,
    transformed::{InkMap, LocationMap},
};

/// Bookkeeping every surface carries: geometry, color mode, default inks and
/// the dirty flag.
///
/// Concrete drivers and proxies embed one and hand it out through
/// [`Canvas::state`] / [`Canvas::state_mut`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasState {
    size: Size,
    is_color: bool,
    background: Ink,
    foreground: Ink,
    dirty: bool,
}

impl CanvasState {
    /// A color surface given a `Bool` background gets black (`false`) or
    /// white (`true`) instead, so that it only ever sees color inks.
    pub fn new<E>(size: Size, is_color: bool, background: Ink) -> CanvasResult<Self, E> {
        if !size.is_valid() {
            return Err(Error::InvalidArgument("surface size must be positive"));
        }
        let background = match (is_color, background) {
            (false, Ink::Color(_)) => return Err(Error::InvalidInk),
            (true, Ink::Bool(white)) => Ink::Color(if white {
                crate::Color::WHITE
            } else {
                crate::Color::BLACK
            }),
            (_, ink) => ink,
        };
        Ok(Self::derived(size, is_color, background))
    }

    /// Monochrome surface with a `false` background
    pub fn monochrome<E>(size: Size) -> CanvasResult<Self, E> {
        Self::new(size, false, Ink::OFF)
    }

    /// State of a proxy whose inputs come from an already valid subject.
    pub(crate) fn derived(size: Size, is_color: bool, background: Ink) -> Self {
        CanvasState {
            size,
            is_color,
            background,
            foreground: background.complement(),
            dirty: true,
        }
    }

    /// State of a proxy over two subjects: a monochrome result keeps a
    /// monochrome background even when the first subject is color.
    pub(crate) fn combined(size: Size, is_color: bool, first_background: Ink) -> Self {
        let background = match first_background {
            Ink::Color(_) if !is_color => Ink::OFF,
            ink => ink,
        };
        Self::derived(size, is_color, background)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_color(&self) -> bool {
        self.is_color
    }

    pub fn background(&self) -> Ink {
        self.background
    }

    pub fn foreground(&self) -> Ink {
        self.foreground
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag, returning its previous value.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// The single ink validation rule shared by every surface.
    ///
    /// - `None` stays `None` (skip the write)
    /// - on a color surface `Bool` becomes the foreground or background
    /// - on a monochrome surface a `Color` is rejected
    pub fn cure_ink<E>(&self, ink: Option<Ink>) -> CanvasResult<Option<Ink>, E> {
        match ink {
            None => Ok(None),
            Some(Ink::Bool(on)) if self.is_color => Ok(Some(if on {
                self.foreground
            } else {
                self.background
            })),
            Some(Ink::Color(_)) if !self.is_color => Err(Error::InvalidInk),
            Some(ink) => Ok(Some(ink)),
        }
    }
}

/// Write every pixel of `canvas` with its primitive.
///
/// This is the default clear, also used by proxies that cannot hand a clear
/// down to their subject.
pub(crate) fn clear_by_pixels<C: Canvas + ?Sized>(
    canvas: &mut C,
    ink: Ink,
) -> CanvasResult<(), C::Error> {
    for location in canvas.size().points() {
        canvas.write_pixel_impl(location, ink)?;
    }
    Ok(())
}

/// A pixel-addressable drawing surface, monochrome or color.
///
/// A concrete driver supplies [`write_pixel_impl`](Canvas::write_pixel_impl)
/// and [`flush_impl`](Canvas::flush_impl), and may supply a faster
/// [`clear_impl`](Canvas::clear_impl). Everything else, including all the
/// proxies (inverted, rotated, folded, ...), comes for free.
///
/// Writes are buffered: nothing is guaranteed to reach the hardware before
/// [`flush`](Canvas::flush).
pub trait Canvas: ErrorType {
    fn state(&self) -> &CanvasState;

    fn state_mut(&mut self) -> &mut CanvasState;

    /// Write one pixel.
    ///
    /// Only called with an in-bounds location and an ink already cured for
    /// this surface (`Bool` when monochrome, `Color` when color).
    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), Self::Error>;

    /// Push buffered content outward. Must only return once the buffer can be
    /// written again.
    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), Self::Error>;

    /// Write `ink` to all pixels. The default loops over every pixel.
    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), Self::Error> {
        clear_by_pixels(self, ink)
    }

    fn size(&self) -> Size {
        self.state().size()
    }

    fn is_color(&self) -> bool {
        self.state().is_color()
    }

    fn background(&self) -> Ink {
        self.state().background()
    }

    fn foreground(&self) -> Ink {
        self.state().foreground()
    }

    fn is_dirty(&self) -> bool {
        self.state().is_dirty()
    }

    fn within(&self, location: Point) -> bool {
        self.size().contains(location)
    }

    fn cure_ink(&self, ink: Option<Ink>) -> CanvasResult<Option<Ink>, Self::Error> {
        self.state().cure_ink(ink)
    }

    /// Write a single pixel.
    ///
    /// Out-of-bounds locations and `None` ink are silently ignored.
    fn write_pixel(&mut self, location: Point, ink: Option<Ink>) -> CanvasResult<(), Self::Error> {
        if !self.within(location) {
            return Ok(());
        }
        let Some(ink) = self.cure_ink(ink)? else {
            return Ok(());
        };
        self.state_mut().mark_dirty();
        self.write_pixel_impl(location, ink)
    }

    /// Let `shape` draw itself at `offset`. `None` ink leaves the choice to
    /// the shape.
    fn write<S: Shape + ?Sized>(
        &mut self,
        shape: &S,
        offset: Point,
        ink: Option<Ink>,
    ) -> CanvasResult<(), Self::Error>
    where
        Self: Sized,
    {
        shape.write(self, offset, ink)
    }

    /// Clear to the background
    fn clear(&mut self) -> CanvasResult<(), Self::Error> {
        let background = self.background();
        self.clear_with(background)
    }

    fn clear_with(&mut self, ink: Ink) -> CanvasResult<(), Self::Error> {
        let Some(ink) = self.cure_ink(Some(ink))? else {
            return Ok(());
        };
        self.state_mut().mark_dirty();
        self.clear_impl(ink)
    }

    /// Effectuate what was written. A no-op when nothing changed since the
    /// previous flush, unless `forced`.
    fn flush(&mut self, forced: bool) -> CanvasResult<(), Self::Error> {
        let dirty = self.state_mut().take_dirty();
        if dirty || forced {
            log::trace!("flush (dirty: {dirty}, forced: {forced})");
            self.flush_impl(forced)
        } else {
            Ok(())
        }
    }

    /// Borrow this surface so proxies can be stacked on it without giving it
    /// away.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// A surface on which every write has the complementary ink
    fn inverted(self) -> Inverted<Self>
    where
        Self: Sized,
    {
        Inverted::new(self)
    }

    /// Rotated clockwise by 0, 90, 180 or 270 degrees
    fn rotated(self, degrees: i32) -> CanvasResult<Oriented<Self>, Self::Error>
    where
        Self: Sized,
    {
        let orientation = Orientation::from_degrees(degrees)
            .ok_or(Error::InvalidArgument("rotation must be 0, 90, 180 or 270"))?;
        Ok(Transformed::oriented(self, orientation))
    }

    fn xy_swapped(self) -> Oriented<Self>
    where
        Self: Sized,
    {
        Transformed::oriented(self, Orientation::SwapXy)
    }

    fn mirrored_x(self) -> Oriented<Self>
    where
        Self: Sized,
    {
        Transformed::oriented(self, Orientation::MirrorX)
    }

    fn mirrored_y(self) -> Oriented<Self>
    where
        Self: Sized,
    {
        Transformed::oriented(self, Orientation::MirrorY)
    }

    /// A surface of `size` whose locations are remapped by `location_map`
    /// before reaching this one
    fn transformed<L: LocationMap>(
        self,
        size: Size,
        location_map: L,
    ) -> CanvasResult<Transformed<Self, L>, Self::Error>
    where
        Self: Sized,
    {
        Transformed::new(self, size, location_map)
    }

    /// Same geometry, every ink passed through `ink_map`
    fn ink_transformed<K: InkMap>(self, ink_map: K) -> CanvasResult<Oriented<Self, K>, Self::Error>
    where
        Self: Sized,
    {
        Transformed::oriented_with_ink(self, Orientation::Rotate0, ink_map)
    }

    /// The surface folded `n` times, see [`Folded`]
    fn folded(self, n: i32, zigzag: bool) -> CanvasResult<Folded<Self>, Self::Error>
    where
        Self: Sized,
    {
        Folded::new(self, n, zigzag)
    }

    /// The rectangle of `size` starting at `start`
    fn part(self, start: Point, size: Size) -> CanvasResult<Part<Self>, Self::Error>
    where
        Self: Sized,
    {
        Part::new(self, start, size)
    }

    /// This surface and `other` side by side, see [`Extended`]
    fn extended<B>(self, other: B, placement: &str) -> CanvasResult<Extended<Self, B>, Self::Error>
    where
        Self: Sized,
        B: Canvas<Error = Self::Error>,
    {
        Extended::new(self, other, placement)
    }

    /// A surface that forwards everything to both this surface and `other`
    fn added<B>(self, other: B) -> Added<Self, B>
    where
        Self: Sized,
        B: Canvas<Error = Self::Error>,
    {
        Added::new(self, other)
    }

    /// A cloneable handle, so several proxies can hold this surface
    #[cfg(any(feature = "alloc", test))]
    fn shared(self) -> crate::Shared<Self>
    where
        Self: Sized,
    {
        crate::Shared::new(self)
    }
}

impl<C: Canvas + ?Sized> ErrorType for &mut C {
    type Error = C::Error;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn state(&self) -> &CanvasState {
        (**self).state()
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        (**self).state_mut()
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), Self::Error> {
        (**self).write_pixel_impl(location, ink)
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), Self::Error> {
        (**self).flush_impl(forced)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), Self::Error> {
        (**self).clear_impl(ink)
    }

    fn write_pixel(&mut self, location: Point, ink: Option<Ink>) -> CanvasResult<(), Self::Error> {
        (**self).write_pixel(location, ink)
    }

    fn clear_with(&mut self, ink: Ink) -> CanvasResult<(), Self::Error> {
        (**self).clear_with(ink)
    }

    fn flush(&mut self, forced: bool) -> CanvasResult<(), Self::Error> {
        (**self).flush(forced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, MemoryCanvas};
    use core::convert::Infallible;

    fn mono(width: i32, height: i32) -> MemoryCanvas {
        MemoryCanvas::monochrome(Size::new(width, height)).unwrap()
    }

    #[test]
    fn state_rejects_empty_size() {
        let state = CanvasState::new::<Infallible>(Size::new(0, 3), false, Ink::OFF);
        assert!(matches!(state, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn state_rejects_color_background_on_monochrome() {
        let state = CanvasState::new::<Infallible>(Size::new(2, 2), false, Ink::Color(Color::RED));
        assert_eq!(state, Err(Error::InvalidInk));
    }

    #[test]
    fn color_state_maps_bool_background() {
        let state = CanvasState::new::<Infallible>(Size::new(2, 2), true, Ink::OFF).unwrap();
        assert_eq!(state.background(), Ink::Color(Color::BLACK));
        assert_eq!(state.foreground(), Ink::Color(Color::WHITE));
    }

    #[test]
    fn cure_ink_rules() {
        let mono = CanvasState::monochrome::<Infallible>(Size::new(2, 2)).unwrap();
        assert_eq!(mono.cure_ink::<Infallible>(None), Ok(None));
        assert_eq!(mono.cure_ink::<Infallible>(Some(Ink::OFF)), Ok(Some(Ink::OFF)));
        assert_eq!(
            mono.cure_ink::<Infallible>(Some(Ink::Color(Color::rgb(10, 20, 30)))),
            Err(Error::InvalidInk)
        );

        let color =
            CanvasState::new::<Infallible>(Size::new(2, 2), true, Ink::Color(Color::BLUE))
                .unwrap();
        assert_eq!(
            color.cure_ink::<Infallible>(Some(Ink::ON)),
            Ok(Some(Ink::Color(Color::YELLOW)))
        );
        assert_eq!(
            color.cure_ink::<Infallible>(Some(Ink::OFF)),
            Ok(Some(Ink::Color(Color::BLUE)))
        );
        assert_eq!(
            color.cure_ink::<Infallible>(Some(Ink::Color(Color::RED))),
            Ok(Some(Ink::Color(Color::RED)))
        );
    }

    #[test_log::test]
    fn write_pixel_marks_dirty_and_skips_out_of_bounds() {
        let mut canvas = mono(4, 4);
        canvas.flush(false).unwrap();
        assert!(!canvas.is_dirty());

        canvas.write_pixel(Point::new(4, 0), Some(Ink::ON)).unwrap();
        canvas.write_pixel(Point::new(-1, 2), Some(Ink::ON)).unwrap();
        canvas.write_pixel(Point::new(1, 1), None).unwrap();
        assert!(!canvas.is_dirty());
        assert_eq!(canvas.total_writes(), 0);

        canvas.write_pixel(Point::new(1, 1), Some(Ink::ON)).unwrap();
        assert!(canvas.is_dirty());
        assert_eq!(canvas.pixel(Point::new(1, 1)), Some(Ink::ON));
    }

    #[test]
    fn out_of_bounds_color_on_monochrome_is_dropped() {
        let mut canvas = mono(2, 2);
        let result = canvas.write_pixel(Point::new(9, 9), Some(Ink::Color(Color::RED)));
        assert_eq!(result, Ok(()));
    }

    #[test_log::test]
    fn flush_runs_only_when_dirty_or_forced() {
        let mut canvas = mono(3, 3);
        assert!(canvas.is_dirty());
        canvas.flush(false).unwrap();
        assert_eq!(canvas.flush_count(), 1);
        canvas.flush(false).unwrap();
        assert_eq!(canvas.flush_count(), 1);
        canvas.flush(true).unwrap();
        assert_eq!(canvas.flush_count(), 2);
        assert_eq!(canvas.forced_flush_count(), 1);

        canvas.clear().unwrap();
        canvas.flush(false).unwrap();
        assert_eq!(canvas.flush_count(), 3);
    }

    #[test]
    fn clear_defaults_to_background() {
        let mut canvas =
            MemoryCanvas::new(Size::new(2, 1), true, Ink::Color(Color::GREEN)).unwrap();
        canvas.write_pixel(Point::new(0, 0), Some(Ink::Color(Color::RED))).unwrap();
        canvas.clear().unwrap();
        assert_eq!(canvas.pixel(Point::new(0, 0)), Some(Ink::Color(Color::GREEN)));
        assert_eq!(canvas.clear_count(), 1);
    }

    #[test]
    fn clear_with_color_on_monochrome_fails() {
        let mut canvas = mono(2, 2);
        assert_eq!(
            canvas.clear_with(Ink::Color(Color::WHITE)),
            Err(Error::InvalidInk)
        );
        assert_eq!(canvas.clear_count(), 0);
    }

    #[test]
    fn by_ref_keeps_ownership() {
        let mut canvas = mono(2, 2);
        {
            let mut inverted = canvas.by_ref().inverted();
            inverted.write_pixel(Point::new(0, 1), Some(Ink::OFF)).unwrap();
        }
        assert_eq!(canvas.pixel(Point::new(0, 1)), Some(Ink::ON));
    }

    #[test]
    fn write_forwards_to_shape() {
        let mut canvas = mono(3, 3);
        canvas
            .write(&[Point::new(0, 0), Point::new(1, 1)], Point::new(1, 0), None)
            .unwrap();
        assert_eq!(canvas.pixel(Point::new(1, 0)), Some(Ink::ON));
        assert_eq!(canvas.pixel(Point::new(2, 1)), Some(Ink::ON));
        assert_eq!(canvas.total_writes(), 2);
    }

    #[test]
    fn rotation_must_be_a_quarter_turn() {
        let result = mono(2, 2).rotated(45);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
