//! Generic coordinate and ink remapping, and the fixed orientations built on it

use crate::{
    Canvas, CanvasResult, CanvasState, ErrorType, Ink, Point, Size, canvas::clear_by_pixels,
};

/// Maps a location on the proxy to a location on its subject
pub trait LocationMap {
    fn map_location(&self, location: Point) -> Point;

    /// Whether the map is a bijection between the proxy and the whole
    /// subject, which lets a clear be handed down to the subject.
    fn is_bijection(&self) -> bool {
        false
    }
}

impl<F: Fn(Point) -> Point> LocationMap for F {
    fn map_location(&self, location: Point) -> Point {
        self(location)
    }
}

/// Maps an ink written on the proxy to the ink written on its subject
pub trait InkMap {
    fn map_ink(&self, ink: Ink) -> Ink;
}

/// The identity ink map
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SameInk;

impl InkMap for SameInk {
    fn map_ink(&self, ink: Ink) -> Ink {
        ink
    }
}

impl<F: Fn(Ink) -> Ink> InkMap for F {
    fn map_ink(&self, ink: Ink) -> Ink {
        self(ink)
    }
}

/// Fixed reorientations of a surface. Rotations are clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
    SwapXy,
    MirrorX,
    MirrorY,
}

impl Orientation {
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Rotate0),
            90 => Some(Orientation::Rotate90),
            180 => Some(Orientation::Rotate180),
            270 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// Size of the reoriented view of a `subject`-sized surface
    pub fn size(self, subject: Size) -> Size {
        match self {
            Orientation::Rotate90 | Orientation::Rotate270 | Orientation::SwapXy => {
                subject.swapped()
            }
            _ => subject,
        }
    }

    /// Location on the subject for a location on the reoriented view
    pub fn map(self, subject: Size, location: Point) -> Point {
        let Size {
            width: w,
            height: h,
        } = subject;
        let Point { x, y } = location;
        match self {
            Orientation::Rotate0 => Point::new(x, y),
            Orientation::Rotate90 => Point::new(w - 1 - y, x),
            Orientation::Rotate180 => Point::new(w - 1 - x, h - 1 - y),
            Orientation::Rotate270 => Point::new(y, h - 1 - x),
            Orientation::SwapXy => Point::new(y, x),
            Orientation::MirrorX => Point::new(w - 1 - x, y),
            Orientation::MirrorY => Point::new(x, h - 1 - y),
        }
    }
}

/// An [`Orientation`] bound to the size of the surface it applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationMap {
    orientation: Orientation,
    subject: Size,
}

impl OrientationMap {
    pub fn new(orientation: Orientation, subject: Size) -> Self {
        OrientationMap {
            orientation,
            subject,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl LocationMap for OrientationMap {
    fn map_location(&self, location: Point) -> Point {
        self.orientation.map(self.subject, location)
    }

    fn is_bijection(&self) -> bool {
        true
    }
}

/// A reoriented surface: rotated, mirrored or xy-swapped
pub type Oriented<S, K = SameInk> = Transformed<S, OrientationMap, K>;

/// Proxy that remaps locations (and optionally inks) before writing to its
/// subject.
///
/// Writes that map outside the subject are dropped.
pub struct Transformed<S, L, K = SameInk> {
    subject: S,
    location_map: L,
    ink_map: K,
    state: CanvasState,
}

impl<S: Canvas, L: LocationMap> Transformed<S, L> {
    pub fn new(subject: S, size: Size, location_map: L) -> CanvasResult<Self, S::Error> {
        Self::with_ink_map(subject, size, location_map, SameInk)
    }
}

impl<S: Canvas> Transformed<S, OrientationMap> {
    pub fn oriented(subject: S, orientation: Orientation) -> Self {
        let map = OrientationMap::new(orientation, subject.size());
        let size = orientation.size(subject.size());
        log::debug!("{orientation:?} canvas {}x{}", size.width, size.height);
        let state = CanvasState::derived(size, subject.is_color(), subject.background());
        Transformed {
            subject,
            location_map: map,
            ink_map: SameInk,
            state,
        }
    }
}

impl<S: Canvas, K: InkMap> Transformed<S, OrientationMap, K> {
    pub fn oriented_with_ink(
        subject: S,
        orientation: Orientation,
        ink_map: K,
    ) -> CanvasResult<Self, S::Error> {
        let map = OrientationMap::new(orientation, subject.size());
        let size = orientation.size(subject.size());
        Self::with_ink_map(subject, size, map, ink_map)
    }
}

impl<S: Canvas, L: LocationMap, K: InkMap> Transformed<S, L, K> {
    /// The proxy background is the subject background passed through
    /// `ink_map`.
    pub fn with_ink_map(
        subject: S,
        size: Size,
        location_map: L,
        ink_map: K,
    ) -> CanvasResult<Self, S::Error> {
        let background = ink_map.map_ink(subject.background());
        let state = CanvasState::new(size, subject.is_color(), background)?;
        log::debug!("transformed canvas {}x{}", size.width, size.height);
        Ok(Transformed {
            subject,
            location_map,
            ink_map,
            state,
        })
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn location_map(&self) -> &L {
        &self.location_map
    }

    pub fn into_inner(self) -> S {
        self.subject
    }
}

impl<S: Canvas, L, K> ErrorType for Transformed<S, L, K> {
    type Error = S::Error;
}

impl<S: Canvas, L: LocationMap, K: InkMap> Canvas for Transformed<S, L, K> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn write_pixel_impl(&mut self, location: Point, ink: Ink) -> CanvasResult<(), S::Error> {
        let target = self.location_map.map_location(location);
        if self.subject.within(target) {
            self.subject
                .write_pixel(target, Some(self.ink_map.map_ink(ink)))
        } else {
            log::trace!("{location:?} maps to {target:?}, outside the subject");
            Ok(())
        }
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), S::Error> {
        self.subject.flush(forced)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), S::Error> {
        if self.location_map.is_bijection() {
            self.subject.clear_with(self.ink_map.map_ink(ink))
        } else {
            clear_by_pixels(self, ink)
        }
    }
}
