/// Narrowest terminal the chart renderer will lay out for. Anything reported
/// below this is treated as this.
pub const MIN_TERM_WIDTH: usize = 40;

/// Spaces separating adjacent layout cells: the gap between table columns,
/// and the spaces around a chart bar.
pub const BOUNDING_SPACES_COUNT: usize = 2;

/// Returns the number of decimal digits in `n`. `0` has one digit.
pub const fn count_digits(mut n: u64) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
