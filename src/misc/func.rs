/// Round `x` to `digits` decimal places.
///
/// Rounding is done on the exact decimal expansion of `x` with ties going
/// to the even digit, so values like `0.125` round to `0.12` and
/// `0.6000000000000001` rounds to `0.6`. Multiplying by a power of ten and
/// calling `f64::round` gets both of those wrong.
///
/// # Example
///
/// ```rust
/// # use x2fit::misc::round_to;
/// assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(0.2 + 0.4, 3), 0.6);
/// ```
pub fn round_to(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let digits = digits as usize;
    format!("{x:.digits$}").parse::<f64>().unwrap_or(x)
}
