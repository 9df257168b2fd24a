//! Report rendering for floating-point amounts.

/// Render an amount the way the text reports print it.
///
/// Finite integral values keep one decimal place (`1150.0`); everything else
/// uses the shortest form that round-trips back to the same value.
#[must_use]
pub fn render(value: f64) -> String {
    let mut text = format!("{value}");
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
