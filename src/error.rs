use std::fmt;

/// Errors returned by [`IntervalMap`](crate::IntervalMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The interval being inserted overlaps an interval already in the map.
    Overlapping,
    /// The interval being inserted contains no values, such as `(2, 2)` or
    /// `[3, 1]`.
    EmptyInterval,
    /// No interval in the map contains the requested key.
    KeyNotFound,
    /// The map is read-only and cannot be modified.
    ReadOnly,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlapping => {
                write!(f, "interval exists or intersects with an existing interval")
            }
            Self::EmptyInterval => write!(f, "interval contains no values"),
            Self::KeyNotFound => write!(f, "key not found"),
            Self::ReadOnly => write!(f, "the interval map is read-only"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(
            Error::Overlapping.to_string(),
            "interval exists or intersects with an existing interval"
        );

        let err: Box<dyn std::error::Error> = Box::new(Error::ReadOnly);
        assert_eq!(err.to_string(), "the interval map is read-only");
    }
}
