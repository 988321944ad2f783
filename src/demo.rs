//! Small demos that run on any surface
//!
//! Handy to check the wiring of a new display, or of a fold or rotation put
//! in front of it.

use embedded_hal::delay::DelayNs;

use crate::{Canvas, CanvasResult, Ink};

/// Clear the whole surface to each ink of `sequence` in turn, pausing
/// `pause_us` after every flush. `None` iterations runs forever.
pub fn blink<C, D>(
    canvas: &mut C,
    delay: &mut D,
    pause_us: u32,
    iterations: Option<u32>,
    sequence: &[Ink],
) -> CanvasResult<(), C::Error>
where
    C: Canvas + ?Sized,
    D: DelayNs,
{
    log::info!("canvas demo blink");
    let mut done = 0;
    while iterations.is_none_or(|n| done < n) {
        for &ink in sequence {
            canvas.clear_with(ink)?;
            canvas.flush(false)?;
            delay.delay_us(pause_us);
        }
        done += 1;
    }
    Ok(())
}

/// Light the pixels one at a time in row-major order, flushing after each.
///
/// On a folded LED strip this shows immediately whether the fold and zigzag
/// settings match the physical layout.
pub fn walk<C, D>(
    canvas: &mut C,
    delay: &mut D,
    pause_us: u32,
    ink: Ink,
) -> CanvasResult<(), C::Error>
where
    C: Canvas + ?Sized,
    D: DelayNs,
{
    log::info!("canvas demo walk");
    for location in canvas.size().points() {
        canvas.clear()?;
        canvas.write_pixel(location, Some(ink))?;
        canvas.flush(false)?;
        delay.delay_us(pause_us);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, MemoryCanvas, Point, Size};

    #[derive(Default)]
    struct CountingDelay {
        waited_us: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waited_us += u64::from(ns) / 1000;
        }
    }

    #[test_log::test]
    fn blink_cycles_through_the_sequence() {
        let mut c = MemoryCanvas::new(Size::new(2, 2), true, Ink::Color(Color::BLACK)).unwrap();
        let mut delay = CountingDelay::default();
        blink(
            &mut c,
            &mut delay,
            1000,
            Some(3),
            &[Ink::Color(Color::WHITE), Ink::Color(Color::BLACK)],
        )
        .unwrap();
        assert_eq!(c.clear_count(), 6);
        assert_eq!(c.flush_count(), 6);
        assert_eq!(delay.waited_us, 6000);
        assert_eq!(c.flushed_pixel(Point::new(1, 1)), Some(Ink::Color(Color::BLACK)));
    }

    #[test]
    fn walk_visits_every_pixel_of_a_fold() {
        let mut strip = MemoryCanvas::monochrome(Size::new(6, 1)).unwrap();
        let mut delay = CountingDelay::default();
        {
            let mut folded = strip.by_ref().folded(3, true).unwrap();
            walk(&mut folded, &mut delay, 10, Ink::ON).unwrap();
        }
        for x in 0..6 {
            assert_eq!(strip.writes_at(Point::new(x, 0)), 1);
        }
        assert_eq!(strip.flush_count(), 6);
        // last location (1, 2) of the fold is the end of the strip
        assert_eq!(strip.flushed_pixel(Point::new(5, 0)), Some(Ink::ON));
        assert_eq!(strip.flushed_pixel(Point::new(3, 0)), Some(Ink::OFF));
    }
}
