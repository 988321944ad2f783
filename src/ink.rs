//! Pixel values
//!
//! An [`Ink`] is what gets written into a pixel: a plain on/off value for
//! monochrome surfaces, or an additive RGB [`Color`]. Both kinds have a
//! complement, which is what [`Inverted`](crate::Inverted) relies on.

use core::ops::{Add, Div, Mul, Not, Sub};

/// Additive RGB color, one byte per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0xFF, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xFF);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0);
    pub const CYAN: Color = Color::rgb(0, 0xFF, 0xFF);
    pub const MAGENTA: Color = Color::rgb(0xFF, 0, 0xFF);
    pub const VIOLET: Color = Color::rgb(0xEE, 0x82, 0xEE);
    pub const SIENNA: Color = Color::rgb(0xA0, 0x52, 0x2D);
    pub const PURPLE: Color = Color::rgb(0x80, 0x00, 0x80);
    pub const PINK: Color = Color::rgb(0xFF, 0xC8, 0xCB);
    pub const SILVER: Color = Color::rgb(0xC0, 0xC0, 0xC0);
    pub const BROWN: Color = Color::rgb(0xA5, 0x2A, 0x2A);
    pub const SALMON: Color = Color::rgb(0xFA, 0x80, 0x72);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Build a color from arbitrary channel values, clamped to 0..=255.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Color::rgb(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        )
    }

    /// `(255 - r, 255 - g, 255 - b)`
    pub const fn complement(self) -> Self {
        Color::rgb(255 - self.red, 255 - self.green, 255 - self.blue)
    }

    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::rgb(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Color {
        Color::rgb(
            self.red.saturating_sub(other.red),
            self.green.saturating_sub(other.green),
            self.blue.saturating_sub(other.blue),
        )
    }
}

impl Mul<i32> for Color {
    type Output = Color;

    fn mul(self, factor: i32) -> Color {
        Color::new(
            i32::from(self.red).saturating_mul(factor),
            i32::from(self.green).saturating_mul(factor),
            i32::from(self.blue).saturating_mul(factor),
        )
    }
}

/// # Panics
///
/// Panics when `divisor` is zero, like integer division.
impl Div<i32> for Color {
    type Output = Color;

    fn div(self, divisor: i32) -> Color {
        Color::new(
            i32::from(self.red) / divisor,
            i32::from(self.green) / divisor,
            i32::from(self.blue) / divisor,
        )
    }
}

/// Value written into a single pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Monochrome value. On a color surface `true` selects the foreground and
    /// `false` the background.
    Bool(bool),
    Color(Color),
}

impl Ink {
    pub const ON: Ink = Ink::Bool(true);
    pub const OFF: Ink = Ink::Bool(false);

    pub const fn complement(self) -> Ink {
        match self {
            Ink::Bool(b) => Ink::Bool(!b),
            Ink::Color(c) => Ink::Color(c.complement()),
        }
    }

    pub const fn is_color(&self) -> bool {
        matches!(self, Ink::Color(_))
    }
}

impl Not for Ink {
    type Output = Ink;

    fn not(self) -> Ink {
        self.complement()
    }
}

impl From<bool> for Ink {
    fn from(value: bool) -> Self {
        Ink::Bool(value)
    }
}

impl From<Color> for Ink {
    fn from(color: Color) -> Self {
        Ink::Color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_channels() {
        assert_eq!(Color::new(-5, 300, 17), Color::rgb(0, 255, 17));
    }

    #[test]
    fn complement_of_color() {
        assert_eq!(
            Color::rgb(10, 20, 30).complement(),
            Color::rgb(245, 235, 225)
        );
        assert_eq!(Color::BLACK.complement(), Color::WHITE);
    }

    #[test]
    fn complement_is_an_involution() {
        for ink in [
            Ink::ON,
            Ink::OFF,
            Ink::Color(Color::SIENNA),
            Ink::Color(Color::BLACK),
        ] {
            assert_eq!(!!ink, ink);
        }
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Color::GRAY + Color::GRAY, Color::rgb(255, 255, 255));
        assert_eq!(Color::RED - Color::WHITE, Color::BLACK);
        assert_eq!(Color::GRAY * 3, Color::WHITE);
        assert_eq!(Color::WHITE / 2, Color::rgb(127, 127, 127));
        // halving plus quartering, as the gradient demos step down a channel
        assert_eq!((Color::RED / 2) + (Color::RED / 4), Color::rgb(190, 0, 0));
    }

    #[test]
    fn huge_factors_clamp() {
        assert_eq!(Color::rgb(1, 0, 2) * i32::MAX, Color::rgb(255, 0, 255));
        assert_eq!(Color::rgb(1, 0, 2) * i32::MIN, Color::BLACK);
    }
}
