//! Polynomial rolling hashes and the double-hashing probe sequence.

/// First multiplier for the base hash. Prime, and larger than the byte
/// alphabet so character codes at different positions do not correlate.
const PRIME_A: u64 = 151;
/// Second multiplier; a distinct prime so the stride hash is independent
/// of the start hash.
const PRIME_B: u64 = 163;

/// Base hash: interprets the key's bytes as a base-`a` number, reduced mod
/// `m` at every step so intermediate values never overflow.
fn poly_hash(key: &str, a: u64, m: u64) -> u64 {
    let mut hash = 0u64;
    for &byte in key.as_bytes() {
        hash = (hash * a + u64::from(byte)) % m;
    }
    hash
}

/// Double-hashing probe sequence for `key` over a table of `capacity`
/// slots: starts at `hash_a` and advances by `hash_b + 1` each attempt.
/// With a nonzero stride and a prime capacity the sequence visits every
/// slot once per `capacity` attempts.
///
/// The iterator is infinite; callers bound it to one full cycle.
pub(crate) fn probe(key: &str, capacity: usize) -> impl Iterator<Item = usize> {
    let m = capacity as u64;
    let start = poly_hash(key, PRIME_A, m);
    // hash_b + 1 can equal the capacity, which would collapse to a zero
    // stride mod capacity and stall the sequence; clamp back into [1, m).
    let stride = ((poly_hash(key, PRIME_B, m) + 1) % m).max(1);
    let mut index = start;
    std::iter::from_fn(move || {
        let current = index;
        index = (index + stride) % m;
        Some(current as usize)
    })
}
