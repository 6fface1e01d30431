//! Numeric kernels behind the `fibonacci`, `prime`, `lcm` and `hcf` operations.
//!
//! All functions are pure. Shape validation happens when the request is
//! decoded, so these only deal with arithmetic edge cases.

/// First `n` Fibonacci terms starting at F(0) = 0.
///
/// Terms are `u64`; generation stops early at the first term that would
/// overflow, which only happens past [`MAX_FIBONACCI_TERMS`] terms.
///
/// [`MAX_FIBONACCI_TERMS`]: crate::models::MAX_FIBONACCI_TERMS
pub fn fibonacci(n: usize) -> Vec<u64> {
    match n {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut sequence: Vec<u64> = vec![0, 1];
            while sequence.len() < n {
                let len = sequence.len();
                match sequence[len - 1].checked_add(sequence[len - 2]) {
                    Some(next) => sequence.push(next),
                    None => break,
                }
            }
            sequence
        }
    }
}

/// Trial division over odd divisors up to ⌊√x⌋.
pub fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    if x == 2 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    // divisor <= x / divisor is divisor² <= x without overflow.
    while divisor <= x / divisor {
        if x % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&x| is_prime(x)).collect()
}

/// Euclid's algorithm with truncated remainder.
///
/// The sign of the result follows the operands the way the remainder
/// sequence leaves it; it is not normalised.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        // wrapping_rem only differs from % for i64::MIN % -1, where it yields 0.
        let remainder = a.wrapping_rem(b);
        a = b;
        b = remainder;
    }
    a
}

/// Left fold of [`gcd`]. Empty input yields 0.
pub fn hcf(values: &[i64]) -> i64 {
    match values {
        [] => 0,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, &x| gcd(acc, x)),
    }
}

/// `a * b / gcd(a, b)`, or `None` if the result leaves the `i64` range.
pub fn lcm_pair(a: i64, b: i64) -> Option<i64> {
    let divisor = gcd(a, b);
    if divisor == 0 {
        // Only reachable when both operands are zero.
        return Some(0);
    }
    a.checked_div(divisor)?.checked_mul(b)
}

/// Left fold of [`lcm_pair`]. Empty input yields 0.
pub fn lcm(values: &[i64]) -> Option<i64> {
    match values {
        [] => Some(0),
        [first, rest @ ..] => rest
            .iter()
            .try_fold(*first, |acc, &x| lcm_pair(acc, x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit + 1];
        is_prime[0] = false;
        if limit >= 1 {
            is_prime[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if is_prime[i] {
                let mut multiple = i * i;
                while multiple <= limit {
                    is_prime[multiple] = false;
                    multiple += i;
                }
            }
            i += 1;
        }
        is_prime
    }

    #[test]
    fn fibonacci_prefixes() {
        assert!(fibonacci(0).is_empty());
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(2), vec![0, 1]);
        assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
        assert_eq!(fibonacci(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn fibonacci_longest_prefix_fits_u64() {
        let sequence = fibonacci(crate::models::MAX_FIBONACCI_TERMS);
        assert_eq!(sequence.len(), crate::models::MAX_FIBONACCI_TERMS);
        assert_eq!(sequence.last(), Some(&12_200_160_415_121_876_738));
    }

    #[test]
    fn fibonacci_stops_before_overflow() {
        assert_eq!(fibonacci(200).len(), crate::models::MAX_FIBONACCI_TERMS);
    }

    #[test]
    fn is_prime_matches_sieve() {
        let limit = 10_000;
        let reference = sieve(limit);
        for x in -10..=limit as i64 {
            let expected = x >= 0 && reference[x as usize];
            assert_eq!(is_prime(x), expected, "mismatch for {}", x);
        }
    }

    #[test]
    fn is_prime_handles_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn filter_primes_keeps_order_and_duplicates() {
        assert_eq!(filter_primes(&[1, 2, 3, 4, 5, 6, 7]), vec![2, 3, 5, 7]);
        assert_eq!(filter_primes(&[7, 4, 7, -3, 2]), vec![7, 7, 2]);
        assert!(filter_primes(&[]).is_empty());
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, -1), -1);
    }

    #[test]
    fn hcf_folds_left() {
        assert_eq!(hcf(&[12, 18, 24]), 6);
        assert_eq!(hcf(&[7]), 7);
        assert_eq!(hcf(&[]), 0);
        assert_eq!(hcf(&[100, 75, 50, 25]), 25);
    }

    #[test]
    fn lcm_folds_left() {
        assert_eq!(lcm(&[4, 6]), Some(12));
        assert_eq!(lcm(&[5]), Some(5));
        assert_eq!(lcm(&[]), Some(0));
        assert_eq!(lcm(&[2, 3, 4, 5]), Some(60));
        assert_eq!(lcm(&[0, 0]), Some(0));
        assert_eq!(lcm(&[0, 7]), Some(0));
    }

    #[test]
    fn lcm_reports_overflow() {
        assert_eq!(lcm(&[i64::MAX, i64::MAX - 1]), None);
        assert_eq!(lcm_pair(i64::MIN, -1), None);
    }

    #[test]
    fn kernels_are_deterministic() {
        let input = [12, 18, 24, 7, 2];
        assert_eq!(hcf(&input), hcf(&input));
        assert_eq!(lcm(&input), lcm(&input));
        assert_eq!(filter_primes(&input), filter_primes(&input));
        assert_eq!(fibonacci(30), fibonacci(30));
    }
}
