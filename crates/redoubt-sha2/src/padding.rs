// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1
//!
//! tail || 0x80 || 0x00.. || bit length (big-endian, length_field_len bytes)

use core::slice::ChunksExact;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::MAX_BLOCK_LEN;
use crate::error::Sha2Error;
use crate::variant::Params;
use crate::word::Word;

/// One or two padded final blocks. Wiped on drop.
pub struct PaddedTail {
    bytes: [u8; 2 * MAX_BLOCK_LEN],
    len: usize,
    block_len: usize,
}

impl PaddedTail {
    /// Padded bytes (`block_len` or `2 * block_len` long)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of blocks (1 or 2)
    pub fn block_count(&self) -> usize {
        self.len / self.block_len
    }

    /// Iterates the padded blocks in order
    pub fn blocks(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.block_len)
    }
}

impl Zeroize for PaddedTail {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.len.zeroize();
    }
}

impl ZeroizeOnDrop for PaddedTail {}

impl Drop for PaddedTail {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Pads the buffered `tail` of a message of `total_len` bytes.
///
/// `tail` holds the `total_len mod block_len` unprocessed bytes. The result
/// spills into a second block when `tail.len() + 1 + length_field_len`
/// exceeds the block size.
///
/// # Errors
/// Returns `Sha2Error::LengthOverflow` if `8 * total_len` does not fit in
/// `length_field_len` bytes (2^64 bits for SHA-256, 2^128 bits otherwise).
pub fn pad<W: Word>(
    tail: &[u8],
    total_len: u128,
    params: &Params<W>,
) -> Result<PaddedTail, Sha2Error> {
    debug_assert!(tail.len() < params.block_len);

    if total_len > params.max_message_len() {
        return Err(Sha2Error::LengthOverflow);
    }

    let block_len = params.block_len;
    let field_len = params.length_field_len;

    let len = if tail.len() + 1 + field_len > block_len {
        2 * block_len
    } else {
        block_len
    };

    let mut padded = PaddedTail {
        bytes: [0u8; 2 * MAX_BLOCK_LEN],
        len,
        block_len,
    };

    padded.bytes[..tail.len()].copy_from_slice(tail);
    padded.bytes[tail.len()] = 0x80;

    // Cannot overflow: total_len < 2^125
    let bit_len = (total_len << 3).to_be_bytes();
    padded.bytes[len - field_len..len].copy_from_slice(&bit_len[bit_len.len() - field_len..]);

    Ok(padded)
}
