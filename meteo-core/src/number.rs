/// Round to the nearest whole unit (ties to even) and render without a fractional part.
///
/// Values that round to zero print as `"0"`, never `"-0"`.
pub fn rounded_units(value: f64) -> String {
    let rounded = value.round_ties_even();
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded:.0}")
}
