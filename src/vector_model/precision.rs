/// decimal places kept by every vector component
pub const PRECISION: usize = 2;

/// round `value` to `places` decimal places
///
/// Rounds the exact binary value, so `2.675` (stored as 2.67499...) goes
/// down. Only exact half-way values go to the even neighbour.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value)
        .parse::<f64>()
        .unwrap_or(value)
}
