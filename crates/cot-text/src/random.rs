//! Random alphanumeric strings (passwords, tokens, fixture ids).

use rand::Rng;

/// The 62-character alphabet: `a-z`, then `A-Z`, then `0-9`.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length used when none is requested.
pub const DEFAULT_LENGTH: usize = 16;

/// Draw `len` characters independently and uniformly from [`ALPHABET`].
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}
