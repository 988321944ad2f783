use crate::{Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point};

/// Proxy that writes the complement of every ink to its subject.
///
/// Its background is the complement of the subject's, so clearing an
/// inverted surface clears the subject to the subject's own background.
pub struct Inverted<S> {
    subject: S,
    state: CanvasState,
}

impl<S: Canvas> Inverted<S> {
    pub fn new(subject: S) -> Self {
        let state = CanvasState::derived(
            subject.size(),
            subject.is_color(),
            subject.background().complement(),
        );
        log::debug!("inverted canvas");
        Inverted { subject, state }
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

impl<S: Canvas> ErrorType for Inverted<S> {
    type Error = S::Error;
}

impl<S: Canvas> Canvas for Inverted<S> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), S::Error> {
        self.subject.write_pixel(location, Some(ink.complement()))
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), S::Error> {
        self.subject.flush(forced)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), S::Error> {
        self.subject.clear_with(ink.complement())
    }
}
