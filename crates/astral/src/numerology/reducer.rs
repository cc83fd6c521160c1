//! Digit reduction with master-number short-circuit.

/// Master numbers are never reduced further.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to 1..=9 or a master number.
///
/// `reduce(0)` returns 0, the "indeterminate" sentinel.
pub fn reduce(n: u64) -> u64 {
    let mut current = n;
    while current > 9 && !is_master(current) {
        current = digit_sum(current);
    }
    current
}
