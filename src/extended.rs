//! Two surfaces side by side, addressed as one

use crate::{Canvas, CanvasResult, CanvasState, Error, ErrorType, Ink, Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Compass::North),
            'E' => Some(Compass::East),
            'S' => Some(Compass::South),
            'W' => Some(Compass::West),
            _ => None,
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Compass::East | Compass::West)
    }
}

/// Where the second surface goes relative to the first one, and which edge
/// the two share.
///
/// Written as two characters: `"EN"` puts the second surface east of the
/// first with their north edges aligned. Only the eight codes `ES`, `EN`,
/// `WS`, `WN`, `NW`, `NE`, `SW` and `SE` exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    direction: Compass,
    alignment: Compass,
}

impl Placement {
    /// `None` unless the alignment is perpendicular to the direction
    pub fn new(direction: Compass, alignment: Compass) -> Option<Self> {
        (direction.is_horizontal() != alignment.is_horizontal()).then_some(Placement {
            direction,
            alignment,
        })
    }

    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let (Some(direction), Some(alignment), None) = (chars.next(), chars.next(), chars.next())
        else {
            return None;
        };
        Placement::new(Compass::from_char(direction)?, Compass::from_char(alignment)?)
    }

    pub fn direction(&self) -> Compass {
        self.direction
    }

    pub fn alignment(&self) -> Compass {
        self.alignment
    }

    /// Combined size, and the top-left corner of each surface in it
    pub fn layout(&self, first: Size, second: Size) -> (Size, Point, Point) {
        let horizontal = self.direction.is_horizontal();
        let size = if horizontal {
            Size::new(
                first.width + second.width,
                first.height.max(second.height),
            )
        } else {
            Size::new(
                first.width.max(second.width),
                first.height + second.height,
            )
        };
        // the leading surface starts at 0 along the placement axis, the
        // other one right after it
        let first_leads = matches!(self.direction, Compass::East | Compass::South);
        let lead = if first_leads { first } else { second };
        let trailing_offset = if horizontal { lead.width } else { lead.height };
        let corner = |own: Size, leads: bool| -> Point {
            let along = if leads { 0 } else { trailing_offset };
            let across = match self.alignment {
                Compass::North | Compass::West => 0,
                Compass::South => size.height - own.height,
                Compass::East => size.width - own.width,
            };
            if horizontal {
                Point::new(along, across)
            } else {
                Point::new(across, along)
            }
        };
        (
            size,
            corner(first, first_leads),
            corner(second, !first_leads),
        )
    }
}

impl core::str::FromStr for Placement {
    type Err = Error<core::convert::Infallible>;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Placement::parse(code).ok_or(Error::InvalidArgument(
            "placement must be one of ES, EN, WS, WN, NW, NE, SW, SE",
        ))
    }
}

/// Proxy that concatenates two surfaces without copying.
///
/// The regions of the two surfaces do not overlap; a pixel in neither (the
/// corner left over when the sizes differ) is dropped.
pub struct Extended<A, B> {
    first: A,
    second: B,
    first_corner: Point,
    second_corner: Point,
    state: CanvasState,
}

impl<A, B> Extended<A, B>
where
    A: Canvas,
    B: Canvas<Error = A::Error>,
{
    pub fn new(first: A, second: B, placement: &str) -> CanvasResult<Self, A::Error> {
        let placement = Placement::parse(placement).ok_or(Error::InvalidArgument(
            "placement must be one of ES, EN, WS, WN, NW, NE, SW, SE",
        ))?;
        Ok(Self::with_placement(first, second, placement))
    }

    pub fn with_placement(first: A, second: B, placement: Placement) -> Self {
        let (size, first_corner, second_corner) = placement.layout(first.size(), second.size());
        log::debug!(
            "extended canvas {}x{} ({:?}, aligned {:?})",
            size.width,
            size.height,
            placement.direction(),
            placement.alignment()
        );
        let is_color = first.is_color() && second.is_color();
        let state = CanvasState::combined(size, is_color, first.background());
        Extended {
            first,
            second,
            first_corner,
            second_corner,
            state,
        }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Canvas, B> ErrorType for Extended<A, B> {
    type Error = A::Error;
}

impl<A, B> Canvas for Extended<A, B>
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
        let p = location - self.first_corner;
        if self.first.within(p) {
            return self.first.write_pixel(p, Some(ink));
        }
        let p = location - self.second_corner;
        if self.second.within(p) {
            return self.second.write_pixel(p, Some(ink));
        }
        Ok(())
    }

    fn flush_impl(&mut self, forced: bool) -> CanvasResult<(), A::Error> {
        let first = self.first.flush(forced);
        let second = self.second.flush(forced);
        first.and(second)
    }

    fn clear_impl(&mut self, ink: Ink) -> CanvasResult<(), A::Error> {
        let first = self.first.clear_with(ink);
        let second = self.second.clear_with(ink);
        first.and(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, MemoryCanvas};

    fn mono(width: i32, height: i32) -> MemoryCanvas {
        MemoryCanvas::monochrome(Size::new(width, height)).unwrap()
    }

    #[test]
    fn parses_only_the_eight_codes() {
        for code in ["ES", "EN", "WS", "WN", "NW", "NE", "SW", "SE"] {
            assert!(Placement::parse(code).is_some(), "{code}");
        }
        for code in ["", "E", "EE", "NS", "EW", "XN", "ENS", "en"] {
            assert!(Placement::parse(code).is_none(), "{code}");
        }
        assert!("QQ".parse::<Placement>().is_err());
    }

    #[test]
    fn east_north() {
        let a = mono(3, 2);
        let b = mono(2, 4);
        let mut e = a.extended(b, "EN").unwrap();
        assert_eq!(e.size(), Size::new(5, 4));
        e.write_pixel(Point::new(0, 0), Some(Ink::ON)).unwrap();
        e.write_pixel(Point::new(3, 3), Some(Ink::ON)).unwrap();
        // below the shorter first surface: nobody owns it
        e.write_pixel(Point::new(0, 3), Some(Ink::ON)).unwrap();
        let (a, b) = e.into_inner();
        assert_eq!(a.pixel(Point::new(0, 0)), Some(Ink::ON));
        assert_eq!(b.pixel(Point::new(0, 3)), Some(Ink::ON));
        assert_eq!(a.total_writes(), 1);
        assert_eq!(b.total_writes(), 1);
    }

    #[test]
    fn layouts() {
        let first = Size::new(3, 2);
        let second = Size::new(2, 4);
        let cases = [
            ("EN", Size::new(5, 4), Point::new(0, 0), Point::new(3, 0)),
            ("ES", Size::new(5, 4), Point::new(0, 2), Point::new(3, 0)),
            ("WN", Size::new(5, 4), Point::new(2, 0), Point::new(0, 0)),
            ("WS", Size::new(5, 4), Point::new(2, 2), Point::new(0, 0)),
            ("SW", Size::new(3, 6), Point::new(0, 0), Point::new(0, 2)),
            ("SE", Size::new(3, 6), Point::new(0, 0), Point::new(1, 2)),
            ("NW", Size::new(3, 6), Point::new(0, 4), Point::new(0, 0)),
            ("NE", Size::new(3, 6), Point::new(0, 4), Point::new(1, 0)),
        ];
        for (code, size, first_corner, second_corner) in cases {
            let placement = Placement::parse(code).unwrap();
            assert_eq!(
                placement.layout(first, second),
                (size, first_corner, second_corner),
                "{code}"
            );
        }
    }

    #[test]
    fn west_places_second_surface_first() {
        let mut e = mono(2, 2).extended(mono(2, 2), "WN").unwrap();
        e.write_pixel(Point::new(0, 0), Some(Ink::ON)).unwrap();
        let (first, second) = e.into_inner();
        assert_eq!(first.total_writes(), 0);
        assert_eq!(second.pixel(Point::new(0, 0)), Some(Ink::ON));
    }

    #[test]
    fn invalid_code() {
        assert!(matches!(
            mono(2, 2).extended(mono(2, 2), "EE"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn flush_and_clear_reach_both() {
        let mut e = mono(2, 2).extended(mono(2, 2), "SE").unwrap();
        e.clear().unwrap();
        e.flush(false).unwrap();
        let (a, b) = e.into_inner();
        assert_eq!((a.clear_count(), b.clear_count()), (1, 1));
        assert_eq!((a.flush_count(), b.flush_count()), (1, 1));
    }

    #[test]
    fn mixed_color_modes_give_a_monochrome_surface() {
        let color = MemoryCanvas::new(Size::new(2, 2), true, Ink::Color(Color::BLACK)).unwrap();
        let mut e = color.extended(mono(2, 2), "EN").unwrap();
        assert!(!e.is_color());
        assert_eq!(e.background(), Ink::OFF);
        e.write_pixel(Point::new(0, 0), Some(Ink::ON)).unwrap();
        assert_eq!(
            e.write_pixel(Point::new(0, 1), Some(Ink::Color(Color::RED))),
            Err(Error::InvalidInk)
        );
        let (color, _) = e.into_inner();
        assert_eq!(color.pixel(Point::new(0, 0)), Some(Ink::Color(Color::WHITE)));
    }
}
