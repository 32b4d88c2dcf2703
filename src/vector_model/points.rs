use super::*;
use crate::vector_error::{ErrorKind, VectorError};

/// geometry coord, unrounded
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Points {
    pub x: f64,
    pub y: f64,
}

impl Points {
    pub fn new(x: f64, y: f64) -> Self {
        Points { x, y }
    }
}

impl From<(f64, f64)> for Points {
    fn from(value: (f64, f64)) -> Self {
        Points::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Points {
    fn from(value: [f64; 2]) -> Self {
        Points::new(value[0], value[1])
    }
}

impl TryFrom<&[f64]> for Points {
    type Error = VectorError;
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [x, y] => Ok(Points::new(*x, *y)),
            _ => {
                tracing::debug!(len = value.len(), "coordinate pair with wrong arity");
                Err(vector_err!(
                    ErrorKind::InvalidArgument,
                    format!(
                        "a point must have two coordinates, got {}: {:?}",
                        value.len(),
                        value
                    )
                ))
            }
        }
    }
}

impl Display for Points {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
