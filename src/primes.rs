//! Primality testing by trial division over the 6k ± 1 wheel.
use lazy_static::lazy_static;
use num_integer::Roots;

lazy_static! {
    /// Primes below 30; enough to settle small inputs before the wheel runs.
    static ref SMALL_PRIMES: Vec<u64> = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
}

/// Trial division up to the integer square root. Divisors 2 and 3 come from
/// the table, the rest from the 6k ± 1 wheel.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    let limit = n.sqrt();
    // resume the wheel at the table's edge so 31 is still checked
    let mut a = 29;
    while a <= limit {
        if n % a == 0 || n % (a + 2) == 0 {
            return false;
        }
        a += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_not_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn matches_the_primes_below_one_hundred() {
        let expected = vec![
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97,
        ];
        let found: Vec<u64> = (0u64..100).filter(|&n| is_prime(n)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn squares_of_wheel_primes_are_composite() {
        // 31 * 31: only reachable through the wheel, not the table
        assert!(!is_prime(961));
        assert!(!is_prime(37 * 37));
        assert!(!is_prime(41 * 43));
    }

    #[test]
    fn large_known_values() {
        assert!(is_prime(2_147_483_647)); // 2^31 - 1
        assert!(!is_prime(2_147_483_649));
        assert!(is_prime(1_000_000_007));
    }
}
