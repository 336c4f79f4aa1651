// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{MAX_OUTPUT_LEN, STATE_WORDS};
use crate::variant::Algorithm;
use crate::word::Word;

/// Finished digest: the big-endian hash state truncated to the variant's
/// output length. Owns its bytes; equality is constant-time.
#[derive(Clone)]
pub struct Digest {
    algorithm: Algorithm,
    bytes: [u8; MAX_OUTPUT_LEN],
}

impl Digest {
    /// Serializes `state` big-endian and keeps the first `output_len` bytes.
    pub(crate) fn from_state<W: Word>(algorithm: Algorithm, state: &[W; STATE_WORDS]) -> Self {
        let mut serialized = [0u8; STATE_WORDS * 8];
        for (word, out) in state.iter().zip(serialized.chunks_exact_mut(W::BYTES)) {
            word.write_be(out);
        }

        let len = algorithm.output_len();
        let mut bytes = [0u8; MAX_OUTPUT_LEN];
        bytes[..len].copy_from_slice(&serialized[..len]);

        serialized.zeroize();

        Self { algorithm, bytes }
    }

    /// Variant that produced this digest
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest bytes (32, 48 or 64)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Digest size in bytes
    pub fn len(&self) -> usize {
        self.algorithm.output_len()
    }

    /// Always `false`; every variant has a non-empty digest
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Bytes past output_len are always zero, so whole-array comparison is exact
        let same_algorithm = (self.algorithm as u8).ct_eq(&(other.algorithm as u8));
        same_algorithm & self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("bytes", &format_args!("{:02x?}", self.as_bytes()))
            .finish()
    }
}

impl Zeroize for Digest {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for Digest {}

impl Drop for Digest {
    fn drop(&mut self) {
        self.zeroize();
    }
}
