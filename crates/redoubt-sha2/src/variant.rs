// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant selection and the per-variant parameter descriptors.

use core::fmt;
use core::str::FromStr;

use crate::consts::{H0_256, H0_384, H0_512, K256, K512, STATE_WORDS};
use crate::error::Sha2Error;
use crate::split::{SplitU64, split_words};
use crate::word::Word;

/// SHA-2 variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256: 32-bit words, 64-byte blocks, 32-byte digest
    Sha256,
    /// SHA-384: SHA-512 machinery, own H(0), 48-byte digest
    Sha384,
    /// SHA-512: 64-bit words, 128-byte blocks, 64-byte digest
    Sha512,
}

impl Algorithm {
    /// Every supported variant
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Sha384, Algorithm::Sha512];

    /// Digest size in bits (also the selection tag)
    pub const fn bits(self) -> u16 {
        match self {
            Algorithm::Sha256 => 256,
            Algorithm::Sha384 => 384,
            Algorithm::Sha512 => 512,
        }
    }

    /// Digest size in bytes
    pub const fn output_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Block size in bytes
    pub const fn block_len(self) -> usize {
        match self {
            Algorithm::Sha256 => 64,
            Algorithm::Sha384 | Algorithm::Sha512 => 128,
        }
    }

    /// Canonical name, e.g. `"SHA-256"`
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for Algorithm {
    type Error = Sha2Error;

    fn try_from(tag: u16) -> Result<Self, Self::Error> {
        match tag {
            256 => Ok(Algorithm::Sha256),
            384 => Ok(Algorithm::Sha384),
            512 => Ok(Algorithm::Sha512),
            _ => {
                debug_event!(tag, "unknown sha2 variant tag");
                Err(Sha2Error::UnknownVariant(tag))
            }
        }
    }
}

/// Accepts `"256"`, `"sha256"`, `"SHA-384"`, `"sha_512"` (case-insensitive).
impl FromStr for Algorithm {
    type Err = Sha2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = match s.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("sha") => {
                s[3..].trim_start_matches(['-', '_'])
            }
            _ => s,
        };

        match digits {
            "256" => Ok(Algorithm::Sha256),
            "384" => Ok(Algorithm::Sha384),
            "512" => Ok(Algorithm::Sha512),
            _ => {
                debug_event!("unknown sha2 variant name");
                Err(Sha2Error::UnknownVariantName)
            }
        }
    }
}

/// Rotate/shift amounts of the Σ and σ functions (FIPS 180-4 Section 4.1).
///
/// `small_sigma*[2]` is the SHR amount; every other entry is a ROTR amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotations {
    /// Σ0: ROTR, ROTR, ROTR
    pub big_sigma0: [u32; 3],
    /// Σ1: ROTR, ROTR, ROTR
    pub big_sigma1: [u32; 3],
    /// σ0: ROTR, ROTR, SHR
    pub small_sigma0: [u32; 3],
    /// σ1: ROTR, ROTR, SHR
    pub small_sigma1: [u32; 3],
}

const ROTATIONS_256: Rotations = Rotations {
    big_sigma0: [2, 13, 22],
    big_sigma1: [6, 11, 25],
    small_sigma0: [7, 18, 3],
    small_sigma1: [17, 19, 10],
};

const ROTATIONS_512: Rotations = Rotations {
    big_sigma0: [28, 34, 39],
    big_sigma1: [14, 18, 41],
    small_sigma0: [1, 8, 7],
    small_sigma1: [19, 61, 6],
};

/// Immutable variant descriptor driving the generic engine.
#[derive(Debug)]
pub struct Params<W: Word> {
    /// Variant this descriptor implements
    pub algorithm: Algorithm,
    /// Block size in bytes (16 words)
    pub block_len: usize,
    /// Rounds per block, also the schedule length
    pub rounds: usize,
    /// Digest size in bytes; the serialized state is truncated to this
    pub output_len: usize,
    /// Size of the big-endian bit-length field appended by padding
    pub length_field_len: usize,
    /// H(0)
    pub initial_state: [W; STATE_WORDS],
    /// K[0..rounds]
    pub round_constants: &'static [W],
    /// Σ/σ amounts
    pub rotations: Rotations,
}

impl<W: Word> Params<W> {
    /// Word width in bits
    pub const fn word_bits(&self) -> u32 {
        W::BITS
    }

    /// Largest message, in bytes, whose bit length fits the length field.
    pub const fn max_message_len(&self) -> u128 {
        (1u128 << (self.length_field_len * 8 - 3)) - 1
    }
}

const K512_SPLIT: [SplitU64; 80] = split_words(&K512);

/// SHA-256 descriptor
pub static SHA256: Params<u32> = Params {
    algorithm: Algorithm::Sha256,
    block_len: 64,
    rounds: 64,
    output_len: 32,
    length_field_len: 8,
    initial_state: H0_256,
    round_constants: &K256,
    rotations: ROTATIONS_256,
};

/// SHA-384 descriptor
pub static SHA384: Params<u64> = Params {
    algorithm: Algorithm::Sha384,
    block_len: 128,
    rounds: 80,
    output_len: 48,
    length_field_len: 16,
    initial_state: H0_384,
    round_constants: &K512,
    rotations: ROTATIONS_512,
};

/// SHA-512 descriptor
pub static SHA512: Params<u64> = Params {
    algorithm: Algorithm::Sha512,
    block_len: 128,
    rounds: 80,
    output_len: 64,
    length_field_len: 16,
    initial_state: H0_512,
    round_constants: &K512,
    rotations: ROTATIONS_512,
};

/// SHA-384 descriptor over emulated 64-bit words
pub static SHA384_SPLIT: Params<SplitU64> = Params {
    algorithm: Algorithm::Sha384,
    block_len: 128,
    rounds: 80,
    output_len: 48,
    length_field_len: 16,
    initial_state: split_words(&H0_384),
    round_constants: &K512_SPLIT,
    rotations: ROTATIONS_512,
};

/// SHA-512 descriptor over emulated 64-bit words
pub static SHA512_SPLIT: Params<SplitU64> = Params {
    algorithm: Algorithm::Sha512,
    block_len: 128,
    rounds: 80,
    output_len: 64,
    length_field_len: 16,
    initial_state: split_words(&H0_512),
    round_constants: &K512_SPLIT,
    rotations: ROTATIONS_512,
};
