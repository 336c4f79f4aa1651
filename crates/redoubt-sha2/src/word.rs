// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word - fixed-width unsigned word used by the compression engine.
//!
//! All operations wrap modulo 2^BITS. The round function and the message
//! schedule only see this trait, so a native integer and the two-halves
//! [`SplitU64`](crate::SplitU64) are interchangeable.

use core::fmt;

use zeroize::Zeroize;

/// Fixed-width unsigned word (32 or 64 bits).
pub trait Word: Copy + Eq + Default + Zeroize + fmt::Debug + Send + Sync + 'static {
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// All bits clear
    const ZERO: Self;

    /// self + rhs mod 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// ROTR^n(self), `n < BITS`
    fn rotr(self, n: u32) -> Self;

    /// SHR^n(self), zero-filled, `n < BITS`
    ///
    /// Debug builds panic on `n >= BITS`; release builds return zero.
    fn shr(self, n: u32) -> Self;

    /// self ⊕ rhs
    fn xor(self, rhs: Self) -> Self;

    /// self ∧ rhs
    fn and(self, rhs: Self) -> Self;

    /// ¬self
    fn not(self) -> Self;

    /// Decode from exactly `BYTES` big-endian bytes
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Encode into exactly `BYTES` big-endian bytes
    fn write_be(self, out: &mut [u8]);
}

/// Sum of 2 to 5 operands mod 2^BITS.
#[inline(always)]
pub fn add<W: Word, const N: usize>(operands: [W; N]) -> W {
    operands.into_iter().fold(W::ZERO, W::wrapping_add)
}

/// a ⊕ b ⊕ c
#[inline(always)]
pub fn xor3<W: Word>(a: W, b: W, c: W) -> W {
    a.xor(b).xor(c)
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;
    const ZERO: Self = 0;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        debug_assert!(n < Self::BITS, "shift amount {n} out of range");
        self.checked_shr(n).unwrap_or(0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn not(self) -> Self {
        !self
    }

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out[..4].copy_from_slice(&self.to_be_bytes());
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const ZERO: Self = 0;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        debug_assert!(n < Self::BITS, "shift amount {n} out of range");
        self.checked_shr(n).unwrap_or(0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn not(self) -> Self {
        !self
    }

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out[..8].copy_from_slice(&self.to_be_bytes());
    }
}
