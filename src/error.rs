use core::fmt;

/// The error type returned by all fallible formatting operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kinds of failure an operation can report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A checked operation received a value outside its documented domain,
    /// e.g. a negative value passed to a positive-only variant.
    IllegalValue {
        /// The offending input, widened to `i64`.
        value: i64,
        /// A description of the accepted domain.
        expected: &'static str,
    },

    /// The requested output would not fit the internal scratch buffer.
    Capacity {
        /// The number of bytes the output would have needed.
        len: usize,
        /// The number of bytes available.
        cap: usize,
    },

    /// The destination sink refused the append.
    Write,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn illegal_value(value: i64, expected: &'static str) -> Error {
        Error {
            kind: ErrorKind::IllegalValue { value, expected },
        }
    }

    pub(crate) fn capacity(len: usize, cap: usize) -> Error {
        Error {
            kind: ErrorKind::Capacity { len, cap },
        }
    }

    pub(crate) fn write() -> Error {
        Error {
            kind: ErrorKind::Write,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::IllegalValue { value, expected } => {
                write!(f, "illegal value {}: expected {}", value, expected)
            }
            ErrorKind::Capacity { len, cap } => write!(
                f,
                "output of {} bytes exceeds the buffer capacity of {} bytes",
                len, cap
            ),
            ErrorKind::Write => f.write_str("failed to write to the destination"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Error {
        Error::write()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
