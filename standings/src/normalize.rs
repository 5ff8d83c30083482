//! Normalising metric columns against their best value.
//!
//! A metric is stored as `Option<f64>` where `None` means "not recorded" and
//! `Some(0.0)` means "recorded as zero". That distinction survives
//! normalisation: an absent value stays absent, it never becomes a 0%.

/// The largest recorded value, ignoring absent and NaN entries.
pub fn max_recorded<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| match acc {
            Some(current) if current >= v => Some(current),
            _ => Some(v),
        })
}

/// `value / max * 100`, guarded against a zero or missing maximum.
///
/// Returns `None` if the value itself was not recorded and `Some(0.0)` if
/// there is nothing sensible to divide by.
pub fn percent_of(value: Option<f64>, max: Option<f64>) -> Option<f64> {
    let value = value?;

    match max {
        Some(max) if max != 0.0 && max.is_finite() => Some(value / max * 100.0),
        _ => Some(0.0),
    }
}

/// Normalises a whole column against its own maximum.
#[tracing::instrument(level = "trace", skip(values), fields(rows = values.len()))]
pub fn percent_of_max(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let max = max_recorded(values.iter().copied());
    if max.map(|m| m == 0.0).unwrap_or(true) {
        tracing::trace!("Column has no usable maximum");
    }

    values.iter().map(|v| percent_of(*v, max)).collect()
}

/// Extracts one column from `rows` and normalises it.
pub fn column_percent_of_max<T, F>(rows: &[T], metric: F) -> Vec<Option<f64>>
where
    F: Fn(&T) -> Option<f64>,
{
    let values: Vec<Option<f64>> = rows.iter().map(metric).collect();
    percent_of_max(&values)
}
