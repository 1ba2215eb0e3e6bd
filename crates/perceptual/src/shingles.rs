//! Karp-Rabin rolling hashes over token windows.
//!
//! Each token is reduced to a 31-bit integer with a seeded xxh3, then every
//! contiguous window of `k` tokens gets
//!
//! ```text
//! h = (t[0]*P^(k-1) + t[1]*P^(k-2) + ... + t[k-1]) mod M
//! ```
//!
//! Sliding one position costs O(1): drop the leading term, multiply by `P`,
//! add the new trailing term. Products are widened to `u128`, so any modulus
//! that fits in a `u64` is safe.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Deterministic fixed-width hash of every token, in order.
pub fn token_hashes<S: AsRef<str>>(tokens: &[S], seed: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(tokens.len());
    out.extend(
        tokens
            .iter()
            .map(|t| xxh3_64_with_seed(t.as_ref().as_bytes(), seed) & 0x7fff_ffff),
    );
    out
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Polynomial rolling hash for a fixed window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHasher {
    window: usize,
    base: u64,
    modulus: u64,
    /// `base^(window-1) mod modulus`, the weight of the leading term.
    lead_weight: u64,
}

impl RollingHasher {
    /// `window` and `modulus` must be non-zero; config validation guarantees it.
    pub fn new(window: usize, base: u64, modulus: u64) -> Self {
        let base = base % modulus;
        let mut lead_weight = 1 % modulus;
        for _ in 1..window {
            lead_weight = mul_mod(lead_weight, base, modulus);
        }
        Self {
            window,
            base,
            modulus,
            lead_weight,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Hash of every window, indexed by window start. Empty when fewer than
    /// `window` values are supplied.
    pub fn hashes(&self, values: &[u64]) -> Vec<u64> {
        let n = values.len();
        let k = self.window;
        if k == 0 || n < k {
            return Vec::new();
        }
        let m = self.modulus;

        let mut out = Vec::with_capacity(n - k + 1);
        let mut h = 0u64;
        for &val in values.iter().take(k) {
            h = add_mod(mul_mod(h, self.base, m), val % m, m);
        }
        out.push(h);

        for (&old, &new) in values.iter().zip(values.iter().skip(k)) {
            let lead = mul_mod(old % m, self.lead_weight, m);
            h = add_mod(h, m - lead, m);
            h = add_mod(mul_mod(h, self.base, m), new % m, m);
            out.push(h);
        }
        out
    }

    /// Hash of a single window computed from scratch. Used to cross-check the
    /// rolling recurrence.
    pub fn hash_window(&self, values: &[u64]) -> u64 {
        values.iter().fold(0u64, |h, &val| {
            add_mod(mul_mod(h, self.base, self.modulus), val % self.modulus, self.modulus)
        })
    }
}

/// Rolling window hashes for `tokens`.
pub fn make_shingles_rolling<S: AsRef<str>>(
    tokens: &[S],
    k: usize,
    base: u64,
    modulus: u64,
    seed: u64,
) -> Vec<u64> {
    if k == 0 || tokens.len() < k {
        return Vec::new();
    }
    RollingHasher::new(k, base, modulus).hashes(&token_hashes(tokens, seed))
}

/// The display form of a window: its tokens joined by single spaces.
pub fn join_window<S: AsRef<str>>(tokens: &[S], start: usize, k: usize) -> String {
    let mut s = String::new();
    for (i, tok) in tokens[start..start + k].iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(tok.as_ref());
    }
    s
}
