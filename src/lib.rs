//! Planar vector toolkit
//!
//! A 2D vector value type whose components are kept at two decimal
//! places, with arithmetic, normalization, angles and rotation
//!
//! ```
//! use planar::vector_model::Vector;
//!
//! let v = Vector::from_two_points(&[1.0, 1.0], &[4.0, 5.0]).unwrap();
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.rotate(90.0), Vector::new(-4.0, 3.0));
//! ```

#[macro_use]
pub mod vector_error;
pub mod vector_model;

pub use vector_error::{ErrorKind, VectorError};
pub use vector_model::{Points, Vector};
