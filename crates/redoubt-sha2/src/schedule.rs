// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1 / 6.4.2 step 1

use crate::consts::BLOCK_WORDS;
use crate::variant::{Params, Rotations};
use crate::word::{Word, add, xor3};

/// σ0(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^c(x)
#[inline(always)]
pub(crate) fn small_sigma0<W: Word>(x: W, rot: &Rotations) -> W {
    let [a, b, c] = rot.small_sigma0;
    xor3(x.rotr(a), x.rotr(b), x.shr(c))
}

/// σ1(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^c(x)
#[inline(always)]
pub(crate) fn small_sigma1<W: Word>(x: W, rot: &Rotations) -> W {
    let [a, b, c] = rot.small_sigma1;
    xor3(x.rotr(a), x.rotr(b), x.shr(c))
}

/// Decodes one block into `words[0..16]` (big-endian).
///
/// # Panics
///
/// If `block` is not exactly `16 * W::BYTES` bytes or `words` holds fewer
/// than 16 words.
#[inline(always)]
pub fn load_block<W: Word>(block: &[u8], words: &mut [W]) {
    assert_eq!(
        block.len(),
        BLOCK_WORDS * W::BYTES,
        "sha2: block must be {} bytes",
        BLOCK_WORDS * W::BYTES
    );
    assert!(words.len() >= BLOCK_WORDS, "sha2: schedule holds fewer than 16 words");

    for (word, bytes) in words
        .iter_mut()
        .zip(block.chunks_exact(W::BYTES))
        .take(BLOCK_WORDS)
    {
        *word = W::from_be_slice(bytes);
    }
}

/// Expands `schedule[0..16]` in place into `schedule[0..rounds]`.
///
/// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
///
/// # Panics
///
/// If `schedule` holds fewer than `params.rounds` words.
#[inline(always)]
pub fn expand<W: Word>(schedule: &mut [W], params: &Params<W>) {
    assert!(
        schedule.len() >= params.rounds,
        "sha2: schedule holds {} words, {} rounds need {}",
        schedule.len(),
        params.algorithm,
        params.rounds
    );

    let rot = &params.rotations;
    for t in BLOCK_WORDS..params.rounds {
        schedule[t] = add([
            small_sigma1(schedule[t - 2], rot),
            schedule[t - 7],
            small_sigma0(schedule[t - 15], rot),
            schedule[t - 16],
        ]);
    }
}
