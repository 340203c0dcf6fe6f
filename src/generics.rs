//! Generic minimum over ordered types.

/// Return the smaller of two values.
///
/// `c` is returned only when it compares strictly less than `y`; ties and
/// incomparable pairs (a `NaN` on either side) return `y`.
pub fn g_min<T: PartialOrd>(c: T, y: T) -> T {
    if c < y {
        c
    } else {
        y
    }
}

/// Fold [`g_min`] over a sequence. Empty input has no minimum.
pub fn min_of<T, I>(values: I) -> Option<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(g_min)
}
