//! Recursion drills: factorial, the classroom Fibonacci, the Towers of
//! Hanoi, two-ended string reversal and digit expansion.
use num_bigint::BigUint;
use num_traits::One;

/// `n!` as an arbitrary-precision integer; `0!` is 1.
pub fn factorial(n: u64) -> BigUint {
    if n == 0 {
        BigUint::one()
    } else {
        factorial(n - 1) * BigUint::from(n)
    }
}

/// The classroom Fibonacci with its shifted base cases: `fib(1) = 1`,
/// `fib(2) = 2`, doubly recursive above that. Exponential on purpose; the
/// driver warns before large inputs.
pub fn fibonacci(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::one()
    } else if n == 2 {
        BigUint::from(2u32)
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// Solves the Towers of Hanoi for `disks` disks, returning every move in
/// execution order as `(from, to)` peg labels. The move count is
/// `2^disks - 1`.
pub fn hanoi(disks: u32, from: char, to: char, via: char) -> Vec<(char, char)> {
    let mut moves = Vec::new();
    hanoi_into(disks, from, to, via, &mut moves);
    moves
}

fn hanoi_into(disks: u32, from: char, to: char, via: char, moves: &mut Vec<(char, char)>) {
    if disks == 0 {
        return;
    }
    // park the upper tower on the spare peg, move the base disk, then
    // bring the tower back on top of it
    hanoi_into(disks - 1, from, via, to, moves);
    moves.push((from, to));
    hanoi_into(disks - 1, via, to, from, moves);
}

/// Two-ended recursive reversal: swap the outermost pair, recurse on the
/// interior. Byte-oriented, so callers hand in ASCII or raw buffers.
pub fn reverse_in_place(bytes: &mut [u8]) {
    let len = bytes.len();
    if len <= 1 {
        return;
    }
    bytes.swap(0, len - 1);
    reverse_in_place(&mut bytes[1..len - 1]);
}

/// Digits of `n`, most significant first, by recursing on `n / 10` before
/// emitting `n % 10`.
pub fn digits(n: u64) -> Vec<u32> {
    let mut out = Vec::new();
    digits_into(n, &mut out);
    out
}

fn digits_into(n: u64, out: &mut Vec<u32>) {
    if n >= 10 {
        digits_into(n / 10, out);
    }
    out.push((n % 10) as u32);
}
