//! Numerical constants

/// Decimal places kept for the bin width, `round(1/k, WIDTH_DIGITS)`
pub const WIDTH_DIGITS: u32 = 4;
/// Decimal places kept for each cumulative bin edge
pub const EDGE_DIGITS: u32 = 3;
/// Decimal places kept for reported Χ<sup>2</sup> values
pub const REPORT_DIGITS: u32 = 2;
/// 2/9, the Wilson-Hilferty variance factor
pub const TWO_NINTHS: f64 = 0.222_222_222_222_222_2;
