//! # Rounding
//!
//! 金額・百分率の丸め

/// 最も近い整数に丸める（0.5 は正の無限大方向）
///
/// `f64::round` と異なり、負の値の 0.5 は切り上げる（-8.5 → -8）。
///
/// ```
/// use salary_predictor::domain::rounding::round_half_up;
///
/// assert_eq!(round_half_up(320_833.33), 320_833);
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-8.5), -8);
/// assert_eq!(round_half_up(-8.333), -8);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
