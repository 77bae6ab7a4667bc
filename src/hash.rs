//! String hashing used to pick the probe start of a key

/// Initial accumulator of the djb2 hash
const SEED: i32 = 5381;

/// Hashes a string with the djb2 scheme (`hash * 33 + code`).
///
/// Each step wraps in 32-bit signed arithmetic and the final accumulator is
/// reinterpreted as unsigned. Codes are UTF-16 code units, so characters
/// outside the Basic Multilingual Plane contribute both halves of their
/// surrogate pair.
///
/// ```rust
/// use probemap::hash_string;
///
/// assert_eq!(hash_string(""), 5381);
/// assert_eq!(hash_string("Hobbit1") % 8, 6);
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn hash_string(key: &str) -> u32 {
    key.encode_utf16()
        .fold(SEED, |hash, code| hash.wrapping_mul(33).wrapping_add(i32::from(code)))
        as u32
}

/// Returns the slot index at which probing for `key` starts, or `None` for a
/// zero capacity.
#[must_use]
pub fn probe_start(key: &str, capacity: usize) -> Option<usize> {
    // u32 always fits in usize on the targets std supports
    let hash = usize::try_from(hash_string(key)).ok()?;
    hash.checked_rem(capacity)
}
