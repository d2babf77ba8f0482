use std::ops::Range;

/// Splits `0..n` into at most `parts` contiguous, non-empty ranges.
///
/// Range lengths differ by at most one, with the longer ranges first.
/// Returns an empty vector when `n` is zero.
#[must_use]
pub fn split(n: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, n.max(1));
    if n == 0 {
        return Vec::new();
    }

    let base = n / parts;
    let extra = n % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for k in 0..parts {
        let len = base + usize::from(k < extra);
        ranges.push(start..start + len);
        start += len;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_range_without_gaps() {
        for n in 0..40 {
            for parts in 1..9 {
                let ranges = split(n, parts);
                let mut next = 0;
                for range in &ranges {
                    assert_eq!(range.start, next);
                    assert!(!range.is_empty());
                    next = range.end;
                }
                assert_eq!(next, n);
            }
        }
    }

    #[test]
    fn balances_lengths() {
        let lengths: Vec<usize> = split(10, 4).iter().map(ExactSizeIterator::len).collect();
        assert_eq!(lengths, vec![3, 3, 2, 2]);
    }

    #[test]
    fn never_more_parts_than_items() {
        assert_eq!(split(3, 8).len(), 3);
        assert_eq!(split(5, 0), vec![0..5]);
        assert!(split(0, 4).is_empty());
    }
}
