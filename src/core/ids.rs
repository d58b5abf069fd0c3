//! Random five-digit user identifiers.

use crate::errors::{AppError, AppResult};
use rand::Rng;
use std::collections::HashSet;

/// Largest identifier handed out (five digits, leading zeros allowed).
pub const MAX_ID: u32 = 99_999;

const ID_SPACE: usize = MAX_ID as usize + 1;

/// Draw a random id in `[0, 99999]` that is not in `existing`.
pub fn generate(existing: &HashSet<u32>) -> AppResult<u32> {
    generate_with(&mut rand::rng(), existing)
}

/// Same as [`generate`] with a caller-provided RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, existing: &HashSet<u32>) -> AppResult<u32> {
    let taken = existing.iter().filter(|id| **id <= MAX_ID).count();
    if taken >= ID_SPACE {
        return Err(AppError::IdSpaceExhausted(taken));
    }

    loop {
        let candidate = rng.random_range(0..=MAX_ID);
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }
}
