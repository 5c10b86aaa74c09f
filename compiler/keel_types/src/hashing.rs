//! Stable type-name hashing.
//!
//! Produces the 32-bit identity hash used for name-based cross-checks across
//! toolchain components (native layout maps, crash-dump tooling, debugger
//! lookups). The value must therefore be stable across runs, processes, and
//! tool versions, so it is computed by a fixed, documented algorithm rather
//! than by `std` or third-party hashers whose internals may change.
//!
//! # Algorithm
//!
//! Two independent accumulator lanes, seeded with the 32-bit FNV offset
//! basis and zero. Characters at even positions feed lane one, characters at
//! odd positions feed lane two; each step folds the rotated lane back into
//! itself and xors the character in. Both lanes are finalized with one more
//! rotate-add and combined with xor. The split keeps adjacent characters
//! from cancelling each other the way a single xor chain would.

/// Seed for the even-position lane (the 32-bit FNV offset basis).
const LANE_SEED: u32 = 0x811C_9DC5;

/// Compute the stable identity hash of a type name.
///
/// Deterministic for a given name: every call, on every thread, in every
/// process, returns the same value.
pub fn name_hash(name: &str) -> u32 {
    let mut even: u32 = LANE_SEED;
    let mut odd: u32 = 0;

    for (i, c) in name.chars().enumerate() {
        if i % 2 == 0 {
            even = mix(even, u32::from(c));
        } else {
            odd = mix(odd, u32::from(c));
        }
    }

    finalize(even) ^ finalize(odd)
}

/// Fold one character into a lane.
#[inline]
fn mix(lane: u32, c: u32) -> u32 {
    lane.wrapping_add(lane.rotate_left(5)) ^ c
}

/// Final avalanche step for a lane.
#[inline]
fn finalize(lane: u32) -> u32 {
    lane.wrapping_add(lane.rotate_left(8))
}
