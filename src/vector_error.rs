//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// what went wrong, independent of the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// malformed input, e.g. a coordinate pair without exactly two values
    InvalidArgument,
    /// an operation had to divide by a zero length
    DivisionByZero,
    /// an intermediate result left the finite `f64` range
    Overflow,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "InvalidArgument"),
            ErrorKind::DivisionByZero => write!(f, "DivisionByZero"),
            ErrorKind::Overflow => write!(f, "Overflow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorError {
    kind: ErrorKind,
    err: String,
}

impl VectorError {
    pub fn new(kind: ErrorKind, err: &str) -> VectorError {
        VectorError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError::{}]: {}", self.kind, self.err)
    }
}

impl Error for VectorError {}

/// build a `VectorError` tagged with the call site
#[macro_export]
macro_rules! vector_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vector_error::VectorError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
