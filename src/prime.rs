//! Prime number helpers used to size a [`crate::Table`].
//!
//! Quadratic probing only reaches half of the slots of a table, and only if the table's length is
//! prime. Both of these are plain trial division: they run once per rebuild, and the candidates
//! are at most a few times larger than the number of words in the table.

/// Checks whether `n` is prime.
///
/// `n` must be positive.
pub fn is_prime(n: usize) -> bool {
    debug_assert!(n > 0, "primality is only defined for positive numbers");

    if n == 2 || n == 3 {
        return true;
    }

    if n == 1 || n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    // Same as `divisor * divisor <= n` without the overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Finds the smallest odd prime which is at least `n`.
///
/// Even inputs are bumped to the next odd number first, so this never returns 2. Returns `None`
/// if there is no such prime representable as a `usize`.
///
/// `n` must be positive.
pub fn next_prime(n: usize) -> Option<usize> {
    debug_assert!(n > 0, "primes are only searched from positive numbers");

    let mut candidate = if n % 2 == 0 { n.checked_add(1)? } else { n };
    while !is_prime(candidate) {
        candidate = candidate.checked_add(2)?;
    }

    Some(candidate)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alloc::vec::Vec;

    #[test]
    fn small_primes() {
        let primes: Vec<_> = (1..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn squares_of_primes_are_not_prime() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(10_403)); // 101 * 103
    }

    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(Some(3), next_prime(1));
        assert_eq!(Some(3), next_prime(2));
        assert_eq!(Some(17), next_prime(17));
        assert_eq!(Some(19), next_prime(18));
        assert_eq!(Some(23), next_prime(20));
        // Growth from the default capacity: 2 * 17 = 34.
        assert_eq!(Some(37), next_prime(34));
        assert_eq!(Some(79), next_prime(74));
    }

    #[test]
    fn next_prime_overflow() {
        // `usize::MAX` is divisible by 3 and the next odd candidate doesn't fit.
        assert_eq!(None, next_prime(usize::MAX));
    }
}
