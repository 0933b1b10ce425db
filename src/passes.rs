//! The four transformation passes measured by the benchmark runner
//!
//! Each pair produces the same realized collection two ways: a lazy
//! iterator adapter drained into a `Vec`, and an imperative loop that
//! builds the `Vec` eagerly. The eager passes end with a full no-op
//! traversal so both sides of a pair pay a comparable drain cost.

use std::hint::black_box;

/// Number of elements in the fixed benchmark input sequence
pub const INPUT_LEN: u64 = 10_000_000;

/// Build the input sequence: consecutive integers from 0 (inclusive)
/// to `len` (exclusive), in ascending order.
pub fn build_input(len: u64) -> Vec<u64> {
    (0..len).collect()
}

/// Evenness test shared by both filter passes
#[inline]
pub fn is_even(x: u64) -> bool {
    x & 1 == 0
}

/// Lazy filter: an on-demand iterator adapter over the input, drained
/// into a realized `Vec` (the collect is the drain). Order preserved.
pub fn filter_lazy(input: &[u64]) -> Vec<u64> {
    input.iter().copied().filter(|&x| is_even(x)).collect()
}

/// Eager filter: imperative construction of the realized collection,
/// followed by the mirroring no-op traversal.
pub fn filter_eager(input: &[u64]) -> Vec<u64> {
    let mut out = Vec::new();
    for &x in input {
        if is_even(x) {
            out.push(x);
        }
    }
    traverse(&out);
    out
}

/// Lazy map: an on-demand iterator adapter yielding `x + 2` per input
/// element, drained into a realized `Vec`. Order preserved.
pub fn map_lazy(input: &[u64]) -> Vec<u64> {
    input.iter().map(|&x| x + 2).collect()
}

/// Eager map: imperative construction of the realized collection,
/// followed by the mirroring no-op traversal.
pub fn map_eager(input: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(input.len());
    for &x in input {
        out.push(x + 2);
    }
    traverse(&out);
    out
}

/// Full no-op pass over a realized collection. Measurement plumbing
/// only: it equalizes the drain cost between the lazy and eager passes
/// and is not a functional requirement. `black_box` keeps the optimizer
/// from deleting the loop.
fn traverse(values: &[u64]) {
    for &v in values {
        black_box(v);
    }
}
