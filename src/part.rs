use crate::{Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point, Size};

/// Proxy for a rectangular part of its subject.
///
/// Clearing a part is a pixel by pixel loop, which can be much slower than
/// the subject's own clear: handing the clear down would erase the whole
/// subject.
pub struct Part<S> {
    subject: S,
    start: Point,
    state: CanvasState,
}

impl<S: Canvas> Part<S> {
    pub fn new(subject: S, start: Point, size: Size) -> CanvasResult<Self, S::Error> {
        let state = CanvasState::new(size, subject.is_color(), subject.background())?;
        log::debug!(
            "canvas part {}x{} at ({}, {})",
            size.width,
            size.height,
            start.x,
            start.y
        );
        Ok(Part {
            subject,
            start,
            state,
        })
    }

    pub fn start(&self) -> Point {
        self.start
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

impl<S: Canvas> ErrorType for Part<S> {
    type Error = S::Error;
}

impl<S: Canvas> Canvas for Part<S> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), S::Error> {
        // a part may start anywhere, also where the offset overflows
        let Some(target) = self.start.checked_add(location) else {
            log::trace!("{location:?} offset by {:?} overflows", self.start);
            return Ok(());
        };
        self.subject.write_pixel(target, Some(ink))
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), S::Error> {
        self.subject.flush(forced)
    }
}
