// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Compression function per FIPS 180-4 Section 6.2.2 / 6.4.2
//!
//! The round loop runs a fixed `params.rounds` iterations with no branch on
//! state or message words.

use zeroize::Zeroize;

use crate::consts::{MAX_ROUNDS, STATE_WORDS};
use crate::schedule::{expand, load_block};
use crate::variant::{Params, Rotations};
use crate::word::{Word, add, xor3};

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub(crate) fn ch<W: Word>(x: W, y: W, z: W) -> W {
    x.and(y).xor(x.not().and(z))
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
///
/// Computed as (x ∧ y) ⊕ (z ∧ (x ⊕ y))
#[inline(always)]
pub(crate) fn maj<W: Word>(x: W, y: W, z: W) -> W {
    x.and(y).xor(z.and(x.xor(y)))
}

/// Σ0(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)
#[inline(always)]
pub(crate) fn big_sigma0<W: Word>(x: W, rot: &Rotations) -> W {
    let [a, b, c] = rot.big_sigma0;
    xor3(x.rotr(a), x.rotr(b), x.rotr(c))
}

/// Σ1(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)
#[inline(always)]
pub(crate) fn big_sigma1<W: Word>(x: W, rot: &Rotations) -> W {
    let [a, b, c] = rot.big_sigma1;
    xor3(x.rotr(a), x.rotr(b), x.rotr(c))
}

/// Runs all rounds of one block and returns H(i) = H(i-1) + working variables.
///
/// # Panics
///
/// If `schedule` holds fewer than `params.rounds` words.
pub fn compress<W: Word>(
    state: &[W; STATE_WORDS],
    schedule: &[W],
    params: &Params<W>,
) -> [W; STATE_WORDS] {
    assert!(
        schedule.len() >= params.rounds,
        "sha2: schedule holds {} words, {} rounds need {}",
        schedule.len(),
        params.algorithm,
        params.rounds
    );

    let rot = &params.rotations;
    let mut wv = *state;

    for (k, w) in params
        .round_constants
        .iter()
        .zip(schedule)
        .take(params.rounds)
    {
        let [a, b, c, d, e, f, g, h] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = add([h, big_sigma1(e, rot), ch(e, f, g), *k, *w]);
        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = add([big_sigma0(a, rot), maj(a, b, c)]);

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv = [add([t1, t2]), a, b, c, add([d, t1]), e, f, g];
    }

    let mut next = [W::ZERO; STATE_WORDS];
    for ((out, h), v) in next.iter_mut().zip(state).zip(&wv) {
        *out = h.wrapping_add(*v);
    }

    wv.zeroize();
    next
}

/// Compresses one raw block into `state`.
///
/// Decodes, schedules and compresses; the schedule is wiped before return.
///
/// # Panics
///
/// If `block` is not exactly `params.block_len` bytes.
pub fn compress_block<W: Word>(state: &mut [W; STATE_WORDS], block: &[u8], params: &Params<W>) {
    assert_eq!(
        block.len(),
        params.block_len,
        "sha2: {} block must be {} bytes",
        params.algorithm,
        params.block_len
    );

    let mut schedule = [W::ZERO; MAX_ROUNDS];

    load_block(block, &mut schedule);
    expand(&mut schedule, params);
    *state = compress(state, &schedule, params);

    schedule.zeroize();
}
