// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SplitU64 - 64-bit word emulated with two 32-bit halves.
//!
//! Addition propagates the low-half carry explicitly; rotates and shifts
//! interleave bits across the halves. Branches depend only on the shift
//! amount, never on word contents.

use zeroize::Zeroize;

use crate::word::Word;

/// 64-bit word stored as `(hi, lo)` 32-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct SplitU64 {
    hi: u32,
    lo: u32,
}

impl SplitU64 {
    /// Zero word
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    /// Build from high and low halves
    #[inline(always)]
    pub const fn from_halves(hi: u32, lo: u32) -> Self {
        Self { hi, lo }
    }

    /// Split a native u64
    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            hi: (value >> 32) as u32,
            lo: value as u32,
        }
    }

    /// Join the halves into a native u64
    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        ((self.hi as u64) << 32) | self.lo as u64
    }

    /// High 32 bits
    #[inline(always)]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Low 32 bits
    #[inline(always)]
    pub const fn lo(self) -> u32 {
        self.lo
    }
}

/// Converts a native table into split words at compile time.
pub(crate) const fn split_words<const N: usize>(words: &[u64; N]) -> [SplitU64; N] {
    let mut out = [SplitU64::ZERO; N];
    let mut i = 0;
    while i < N {
        out[i] = SplitU64::from_u64(words[i]);
        i += 1;
    }
    out
}

impl Word for SplitU64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const ZERO: Self = SplitU64::ZERO;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(rhs.lo);
        let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u32);
        Self { hi, lo }
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        let n = n % 64;

        // ROTR^32 swaps the halves
        let (hi, lo) = if n >= 32 {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };

        let s = n % 32;
        if s == 0 {
            return Self { hi, lo };
        }

        Self {
            hi: (hi >> s) | (lo << (32 - s)),
            lo: (lo >> s) | (hi << (32 - s)),
        }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        debug_assert!(n < Self::BITS, "shift amount {n} out of range");

        match n {
            0 => self,
            1..=31 => Self {
                hi: self.hi >> n,
                lo: (self.lo >> n) | (self.hi << (32 - n)),
            },
            32..=63 => Self {
                hi: 0,
                lo: self.hi >> (n - 32),
            },
            _ => Self::ZERO,
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self {
            hi: self.hi ^ rhs.hi,
            lo: self.lo ^ rhs.lo,
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            hi: !self.hi,
            lo: !self.lo,
        }
    }

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        Self {
            hi: u32::from_be_slice(&bytes[..4]),
            lo: u32::from_be_slice(&bytes[4..8]),
        }
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        self.hi.write_be(&mut out[..4]);
        self.lo.write_be(&mut out[4..8]);
    }
}
