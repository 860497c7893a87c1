use ordered_float::OrderedFloat;

/// Rounds `value` to `decimals` decimal places, halves toward positive
/// infinity (`-2.5` becomes `-2`). Never returns `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor + 0.5).floor() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Returns a copy of `values` sorted ascending.
pub fn sorted_values(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|&value| OrderedFloat(value));
    sorted
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().map(OrderedFloat).min()?;
    let max = values.iter().copied().map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}
