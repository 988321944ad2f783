use alloc::rc::Rc;
use core::cell::RefCell;

use crate::{Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point};

/// Reference-counted handle to a surface.
///
/// Clones refer to the same surface, so it can be the subject of several
/// proxies at once, e.g. two parts of one display re-joined in another
/// order. The surface lives as long as its longest-lived handle. Each handle
/// keeps its own dirty flag.
pub struct Shared<C> {
    inner: Rc<RefCell<C>>,
    state: CanvasState,
}

impl<C: Canvas> Shared<C> {
    pub fn new(canvas: C) -> Self {
        let state = CanvasState::derived(canvas.size(), canvas.is_color(), canvas.background());
        Shared {
            inner: Rc::new(RefCell::new(canvas)),
            state,
        }
    }

    /// Run `f` on the shared surface.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// The surface back, if this is the last handle
    pub fn try_unwrap(self) -> Result<C, Self> {
        let state = self.state;
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Shared { inner, state })
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Shared {
            inner: Rc::clone(&self.inner),
            state: self.state,
        }
    }
}

impl<C: Canvas> ErrorType for Shared<C> {
    type Error = C::Error;
}

impl<C: Canvas> Canvas for Shared<C> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), C::Error> {
        self.inner.borrow_mut().write_pixel(location, Some(ink))
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), C::Error> {
        self.inner.borrow_mut().flush(forced)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), C::Error> {
        self.inner.borrow_mut().clear_with(ink)
    }
}
