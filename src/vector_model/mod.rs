use std::fmt::{Display, Formatter};

mod points;
mod precision;
mod vector;

pub use self::points::*;
pub use self::precision::*;
pub use self::vector::*;
