//! Integer locations and sizes

use core::ops::{Add, Div, Mul, Neg, Sub};

/// A location or displacement on the pixel grid
///
/// `(0, 0)` is the top-left pixel. Coordinates are signed so that offsets and
/// partially off-surface shapes can be expressed directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// `self + other`, `None` when a coordinate overflows
    pub fn checked_add(self, other: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Floor division, like the grid arithmetic used for folding.
impl Div<i32> for Point {
    type Output = Point;

    fn div(self, divisor: i32) -> Point {
        Point::new(self.x.div_euclid(divisor), self.y.div_euclid(divisor))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Number of pixels in the x and y direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Both dimensions strictly positive.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width and height exchanged
    pub const fn swapped(self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Componentwise maximum
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    pub const fn contains(&self, location: Point) -> bool {
        location.x >= 0 && location.x < self.width && location.y >= 0 && location.y < self.height
    }

    /// Number of pixels, zero for an invalid size
    pub fn area(&self) -> usize {
        if self.is_valid() {
            self.width as usize * self.height as usize
        } else {
            0
        }
    }

    /// Row-major offset of an in-bounds location
    pub fn index_of(&self, location: Point) -> Option<usize> {
        self.contains(location)
            .then(|| location.y as usize * self.width as usize + location.x as usize)
    }

    /// Every location inside the size, row by row
    pub fn points(self) -> impl Iterator<Item = Point> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3, -4);
        assert_eq!(p + Point::new(1, 1), Point::new(4, -3));
        assert_eq!(p - Point::new(1, 1), Point::new(2, -5));
        assert_eq!(-p, Point::new(-3, 4));
        assert_eq!(p * 2, Point::new(6, -8));
        assert_eq!(p / 2, Point::new(1, -2));
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(
            Point::new(1, 2).checked_add(Point::new(3, 4)),
            Some(Point::new(4, 6))
        );
        assert_eq!(Point::new(i32::MAX, 0).checked_add(Point::new(1, 0)), None);
        assert_eq!(Point::new(0, i32::MIN).checked_add(Point::new(0, -1)), None);
    }

    #[test]
    fn contains_is_half_open() {
        let size = Size::new(4, 3);
        assert!(size.contains(Point::new(0, 0)));
        assert!(size.contains(Point::new(3, 2)));
        assert!(!size.contains(Point::new(4, 0)));
        assert!(!size.contains(Point::new(0, 3)));
        assert!(!size.contains(Point::new(-1, 0)));
    }

    #[test]
    fn points_are_row_major() {
        let points: Vec<Point> = Size::new(2, 2).points().collect();
        assert_eq!(
            points,
            [
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(Size::new(0, 5).points().count(), 0);
    }

    #[test]
    fn index_of_out_of_bounds() {
        let size = Size::new(5, 2);
        assert_eq!(size.index_of(Point::new(4, 1)), Some(9));
        assert_eq!(size.index_of(Point::new(5, 1)), None);
    }
}
