use std::ops::{Add, Mul, Sub};

use float_cmp::{ApproxEq, F64Margin};

use super::*;
use crate::vector_error::{ErrorKind, VectorError};

/// mathmatic vector, components kept at `PRECISION` decimal places
///
/// Every operation producing a vector rounds its result again, so
/// chains of operations accumulate rounding on purpose.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector {
            x: round_to(x, PRECISION),
            y: round_to(y, PRECISION),
        }
    }

    /// vector pointing from `start` to `end`, both given as `[x, y]`
    pub fn from_two_points(start: &[f64], end: &[f64]) -> Result<Self, VectorError> {
        let start = Points::try_from(start)?;
        let end = Points::try_from(end)?;
        Ok(Vector::between(start, end))
    }

    pub fn between(start: Points, end: Points) -> Self {
        Vector::new(
            round_to(end.x - start.x, PRECISION),
            round_to(end.y - start.y, PRECISION),
        )
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, scalar: f64) -> Vector {
        Vector::new(
            round_to(self.x * scalar, PRECISION),
            round_to(self.y * scalar, PRECISION),
        )
    }

    /// dot product, not rounded
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// euclidean norm, not rounded
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalized(&self) -> Result<Vector, VectorError> {
        let length = self.length();
        if length == 0.0 {
            tracing::debug!(vector = %self, "normalize on zero length vector");
            return Err(vector_err!(
                ErrorKind::DivisionByZero,
                "cannot normalize a zero vector"
            ));
        }
        if !length.is_finite() {
            tracing::debug!(vector = %self, "normalize on infinite length vector");
            return Err(vector_err!(
                ErrorKind::Overflow,
                format!("cannot normalize {}, length is not finite", self)
            ));
        }
        Ok(Vector::new(
            round_to(self.x / length, PRECISION),
            round_to(self.y / length, PRECISION),
        ))
    }

    /// unsigned angle to `other` in whole degrees, 0..=180
    pub fn angle_between(&self, other: Vector) -> Result<i32, VectorError> {
        let (length, other_length) = (self.length(), other.length());
        if length == 0.0 || other_length == 0.0 {
            tracing::debug!(vector = %self, other = %other, "angle with zero length vector");
            return Err(vector_err!(
                ErrorKind::DivisionByZero,
                format!("cannot measure angle between {} and {}", self, other)
            ));
        }
        let (dot, magnitudes) = (self.dot(other), length * other_length);
        let cos_a = if dot.is_finite() && magnitudes.is_finite() {
            dot / magnitudes
        } else {
            // products overflowed, scale both sides down first
            (self.x / length) * (other.x / other_length)
                + (self.y / length) * (other.y / other_length)
        };
        if cos_a.is_nan() {
            tracing::debug!(vector = %self, other = %other, "angle with infinite vector");
            return Err(vector_err!(
                ErrorKind::Overflow,
                format!("cannot measure angle between {} and {}", self, other)
            ));
        }
        // float error may push the cosine just outside acos domain
        let cos_a = cos_a.clamp(-1.0, 1.0);
        Ok(round_to(cos_a.acos().to_degrees(), 0) as i32)
    }

    /// compass heading in degrees: 0 is up (+y), 90 is right (+x), clockwise
    ///
    /// Rounded to whole degrees, so headings just below 360 come back as 360.
    /// The zero vector has heading 90.
    pub fn heading_angle(&self) -> f64 {
        let mut angle = 90.0 - self.y.atan2(self.x).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        round_to(angle, 0)
    }

    /// rotate counterclockwise by `degrees`
    pub fn rotate(&self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(
            round_to(self.x * cos - self.y * sin, PRECISION),
            round_to(self.x * sin + self.y * cos, PRECISION),
        )
    }
}

impl From<(f64, f64)> for Vector {
    fn from(value: (f64, f64)) -> Self {
        Vector::new(value.0, value.1)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::add(self, other)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        self.subtract(other)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

/// `Vector * Vector` is the dot product
impl Mul<Vector> for Vector {
    type Output = f64;
    fn mul(self, other: Vector) -> f64 {
        self.dot(other)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;
    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
