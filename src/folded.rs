use crate::{Canvas, CanvasResult, CanvasState, Error, ErrorType, Ink, Point, Size};

/// Proxy that re-addresses a long surface as a shorter one with more rows.
///
/// Typical use is an LED strip (or a chain of matrices) bent back and forth:
/// the subject is cut into `n` slices of `width / n` pixels, stacked top to
/// bottom. With `zigzag` every odd row runs right to left, which matches a
/// strip that snakes through the rows.
///
/// The fold factor must divide the subject width, so the fold is a bijection
/// between the two surfaces.
pub struct Folded<S> {
    subject: S,
    n: i32,
    zigzag: bool,
    state: CanvasState,
}

impl<S: Canvas> Folded<S> {
    pub fn new(subject: S, n: i32, zigzag: bool) -> CanvasResult<Self, S::Error> {
        let subject_size = subject.size();
        if n <= 0 {
            return Err(Error::InvalidArgument("fold factor must be positive"));
        }
        if subject_size.width % n != 0 {
            return Err(Error::InvalidArgument(
                "fold factor must divide the surface width",
            ));
        }
        let height = subject_size
            .height
            .checked_mul(n)
            .ok_or(Error::InvalidArgument("folded surface too high"))?;
        let size = Size::new(subject_size.width / n, height);
        log::debug!(
            "canvas folded by {n} (zigzag: {zigzag}) to {}x{}",
            size.width,
            size.height
        );
        let state = CanvasState::derived(size, subject.is_color(), subject.background());
        Ok(Folded {
            subject,
            n,
            zigzag,
            state,
        })
    }

    pub fn fold_factor(&self) -> i32 {
        self.n
    }

    pub fn is_zigzag(&self) -> bool {
        self.zigzag
    }

    /// Location on the subject for an in-bounds location on the fold
    pub fn map(&self, location: Point) -> Point {
        let width = self.state.size().width;
        let subject_height = self.subject.size().height;
        let Point { mut x, y } = location;
        if self.zigzag && y % 2 == 1 {
            x = width - 1 - x;
        }
        Point::new(x + width * (y / subject_height), y % subject_height)
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn into_inner(self) -> S {
        self.subject
    }
}

impl<S: Canvas> ErrorType for Folded<S> {
    type Error = S::Error;
}

impl<S: Canvas> Canvas for Folded<S> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), S::Error> {
        let target = self.map(location);
        self.subject.write_pixel(target, Some(ink))
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), S::Error> {
        self.subject.flush(forced)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), S::Error> {
        self.subject.clear_with(ink)
    }
}
