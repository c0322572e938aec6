//! Axis helpers: value range, y tick labels, month names.

use chrono::Month;

use super::types::MAX_Y_TICKS;

/// Smallest and largest value over all series. Empty input gives `(0, 0)`.
pub fn y_range(series: &[Vec<u64>]) -> (u64, u64) {
    let mut values = series.iter().flatten().copied();
    let Some(first) = values.next() else {
        return (0, 0);
    };
    values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Y tick labels from `min` in steps of `(max - min + 1) / 14 + 1`, stopping before `max`.
///
/// When that leaves no tick at all (`min == max`), a single tick at `min` is returned.
pub fn y_ticks(min: u64, max: u64) -> Vec<u64> {
    let step = (max.saturating_sub(min) + 1) / MAX_Y_TICKS + 1;
    let ticks: Vec<u64> = (min..max).step_by(step as usize).collect();
    if ticks.is_empty() { vec![min] } else { ticks }
}

/// `Jan`, `Feb`, … `Dec`.
pub fn month_abbreviations() -> Vec<String> {
    std::iter::successors(Some(Month::January), |m| Some(m.succ()))
        .take(12)
        .map(|m| m.name()[..3].to_string())
        .collect()
}
