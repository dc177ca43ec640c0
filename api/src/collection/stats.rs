// Read-only aggregates over record lists

use std::cmp::Ordering;

/// Rounds to two decimal places
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Arithmetic mean of `value` over `items`, rounded to two decimals.
/// `None` for an empty list.
pub fn mean<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    let sum: f64 = items.iter().map(value).sum();
    Some(round2(sum / items.len() as f64))
}

/// Number of records satisfying `predicate`
pub fn count_where<T, F>(items: &[T], predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}

/// Smallest record by `compare`; the earliest record wins ties
pub fn min_by<T, F>(items: &[T], compare: F) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    extreme_by(items, compare, Ordering::Less)
}

/// Largest record by `compare`; the earliest record wins ties
pub fn max_by<T, F>(items: &[T], compare: F) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    extreme_by(items, compare, Ordering::Greater)
}

// Reduce with the first element as the accumulator; only a strict win replaces it.
fn extreme_by<T, F>(items: &[T], compare: F, wins: Ordering) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut iter = items.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if compare(candidate, best) == wins {
            candidate
        } else {
            best
        }
    }))
}

/// Distinct projections of `field` in first-occurrence order
pub fn distinct<T, V, F>(items: &[T], field: F) -> Vec<V>
where
    V: PartialEq,
    F: Fn(&T) -> V,
{
    let mut values: Vec<V> = Vec::new();
    for item in items {
        let value = field(item);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

/// Total ordering for `f64` fields; NaN compares equal
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
