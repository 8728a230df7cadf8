//! Metric suffixes for the powers of one thousand up to yotta.

/// Largest exponent with a metric suffix. Anything above is written in
/// scientific notation.
pub const MAX_METRIC_EXPONENT: usize = 24;

pub const METRIC_SUFFIXES: [(usize, &str); 9] = [
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
];

pub fn get(exponent: usize) -> Option<&'static str> {
    if exponent % 3 != 0 {
        return None;
    }

    METRIC_SUFFIXES
        .get(exponent / 3)
        .map(|(_, suffix)| *suffix)
}

/// Returns the metric suffix for `exponent`.
///
/// # Panics
///
/// Panics if `exponent` is not one of 0, 3, .., 24. The resolver routes every
/// other exponent to the exponent cache, so hitting this is a logic error.
pub fn metric_suffix(exponent: usize) -> &'static str {
    get(exponent).unwrap_or_else(|| panic!("no metric suffix for exponent {exponent}"))
}

pub fn metric_suffixes() -> impl Iterator<Item = (usize, &'static str)> {
    METRIC_SUFFIXES.iter().copied()
}
