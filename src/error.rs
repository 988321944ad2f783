use core::fmt;

/// Errors raised by surface operations
///
/// `E` is the error type of the concrete driver at the bottom of the chain,
/// see [`ErrorType`](crate::ErrorType).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A color ink was passed to a monochrome surface
    InvalidInk,
    /// A parameter outside the supported set (rotation angle, placement code,
    /// fold factor, empty size)
    InvalidArgument(&'static str),
    /// The concrete driver failed
    Driver(E),
}

pub type CanvasResult<T, E> = core::result::Result<T, Error<E>>;

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInk => f.write_str("color ink used on a monochrome surface"),
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Error::Driver(e) => write!(f, "driver error: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[test]
    fn display_names_the_reason() {
        let e: Error<Infallible> = Error::InvalidArgument("rotation must be 0, 90, 180 or 270");
        assert_eq!(
            e.to_string(),
            "invalid argument: rotation must be 0, 90, 180 or 270"
        );
        let e: Error<u8> = Error::Driver(3);
        assert_eq!(e.to_string(), "driver error: 3");
    }
}
