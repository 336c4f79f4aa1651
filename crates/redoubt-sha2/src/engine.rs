// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming digest engine: Accumulating -> Finalized

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::compress_block;
use crate::consts::{MAX_BLOCK_LEN, STATE_WORDS};
use crate::digest::Digest;
use crate::error::Sha2Error;
use crate::padding::pad;
use crate::variant::{Algorithm, Params, SHA256, SHA384, SHA512};
use crate::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Accumulating,
    Finalized,
}

/// SHA-2 streaming state, generic over the word type.
///
/// Bound to one [`Params`] descriptor for its whole life. Between calls the
/// buffer holds fewer than `block_len` bytes. After `finish()` every further
/// `update()`/`finish()` returns [`Sha2Error::Finalized`]. State, buffer and
/// counters are wiped after `finish()` and on drop.
pub struct Sha2Engine<W: Word> {
    params: &'static Params<W>,

    // Hash state H(i)
    state: [W; STATE_WORDS],

    // Input buffering
    buffer: [u8; MAX_BLOCK_LEN],
    buffer_len: usize,
    total_len: u128,

    status: Status,
}

impl<W: Word> Sha2Engine<W> {
    /// Create new engine initialized with the descriptor's H(0)
    pub fn with_params(params: &'static Params<W>) -> Self {
        debug_event!(algorithm = %params.algorithm, word_bits = W::BITS, "sha2 engine created");

        Self {
            params,
            state: params.initial_state,
            buffer: [0u8; MAX_BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            status: Status::Accumulating,
        }
    }

    /// Descriptor this engine is bound to
    pub fn params(&self) -> &'static Params<W> {
        self.params
    }

    /// Variant this engine computes
    pub fn algorithm(&self) -> Algorithm {
        self.params.algorithm
    }

    /// `true` once `finish()` has succeeded
    pub fn is_finalized(&self) -> bool {
        self.status == Status::Finalized
    }

    /// Bytes accepted so far (0 after finalization)
    pub fn processed_len(&self) -> u128 {
        self.total_len
    }

    /// Absorbs `data`, compressing every block it completes.
    ///
    /// Zero-length input is a no-op. Splitting a message across calls never
    /// changes the digest.
    ///
    /// # Errors
    /// - `Sha2Error::Finalized` after `finish()`
    /// - `Sha2Error::LengthOverflow` if the total length would exceed the
    ///   length field; the engine is left unchanged
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha2Error> {
        self.ensure_accumulating()?;

        if data.is_empty() {
            return Ok(());
        }

        let max_len = self.params.max_message_len();
        let total_len = self
            .total_len
            .checked_add(data.len() as u128)
            .filter(|len| *len <= max_len)
            .ok_or_else(|| {
                debug_event!(algorithm = %self.params.algorithm, "sha2 input exceeds length field");
                Sha2Error::LengthOverflow
            })?;
        self.total_len = total_len;

        let block_len = self.params.block_len;
        let mut data = data;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(block_len - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < block_len {
                return Ok(());
            }

            compress_block(&mut self.state, &self.buffer[..block_len], self.params);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Process full blocks straight from the input
        let mut blocks = data.chunks_exact(block_len);
        for block in &mut blocks {
            compress_block(&mut self.state, block, self.params);
        }

        // Buffer remaining
        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffer_len = remainder.len();

        Ok(())
    }

    /// Pads, compresses the final block(s) and returns the digest.
    ///
    /// # Errors
    /// - `Sha2Error::Finalized` if already finalized
    /// - `Sha2Error::LengthOverflow` if the bit length does not fit the
    ///   length field
    pub fn finish(&mut self) -> Result<Digest, Sha2Error> {
        self.ensure_accumulating()?;

        let padded = pad(&self.buffer[..self.buffer_len], self.total_len, self.params)?;
        for block in padded.blocks() {
            compress_block(&mut self.state, block, self.params);
        }

        let digest = Digest::from_state(self.params.algorithm, &self.state);

        self.zeroize();
        self.status = Status::Finalized;

        Ok(digest)
    }

    fn ensure_accumulating(&self) -> Result<(), Sha2Error> {
        match self.status {
            Status::Accumulating => Ok(()),
            Status::Finalized => {
                debug_event!(algorithm = %self.params.algorithm, "call on finalized sha2 engine");
                Err(Sha2Error::Finalized)
            }
        }
    }

    /// Hash state H(i), for block-level tests
    #[cfg(test)]
    pub(crate) fn state(&self) -> &[W; STATE_WORDS] {
        &self.state
    }

    /// Pretend `total_len` bytes were already absorbed
    #[cfg(test)]
    pub(crate) fn with_processed_len(mut self, total_len: u128) -> Self {
        self.total_len = total_len;
        self
    }
}

impl<W: Word> Zeroize for Sha2Engine<W> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.total_len.zeroize();
    }
}

impl<W: Word> ZeroizeOnDrop for Sha2Engine<W> {}

impl<W: Word> Drop for Sha2Engine<W> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Runtime-selected SHA-2 engine.
///
/// Picks the word width from the [`Algorithm`]: `u32` for SHA-256, `u64`
/// for SHA-384/512.
pub struct DigestEngine {
    inner: Inner,
}

enum Inner {
    Narrow(Sha2Engine<u32>),
    Wide(Sha2Engine<u64>),
}

macro_rules! dispatch {
    ($self:expr, $engine:ident => $body:expr) => {
        match $self {
            Inner::Narrow($engine) => $body,
            Inner::Wide($engine) => $body,
        }
    };
}

impl DigestEngine {
    /// Create new engine for `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        let inner = match algorithm {
            Algorithm::Sha256 => Inner::Narrow(Sha2Engine::with_params(&SHA256)),
            Algorithm::Sha384 => Inner::Wide(Sha2Engine::with_params(&SHA384)),
            Algorithm::Sha512 => Inner::Wide(Sha2Engine::with_params(&SHA512)),
        };

        Self { inner }
    }

    /// Create new engine from a variant tag (256, 384 or 512)
    ///
    /// # Errors
    /// Returns `Sha2Error::UnknownVariant` for any other tag
    pub fn from_tag(tag: u16) -> Result<Self, Sha2Error> {
        Algorithm::try_from(tag).map(Self::new)
    }

    /// Variant this engine computes
    pub fn algorithm(&self) -> Algorithm {
        dispatch!(&self.inner, engine => engine.algorithm())
    }

    /// `true` once `finish()` has succeeded
    pub fn is_finalized(&self) -> bool {
        dispatch!(&self.inner, engine => engine.is_finalized())
    }

    /// Bytes accepted so far (0 after finalization)
    pub fn processed_len(&self) -> u128 {
        dispatch!(&self.inner, engine => engine.processed_len())
    }

    /// See [`Sha2Engine::update`]
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha2Error> {
        dispatch!(&mut self.inner, engine => engine.update(data))
    }

    /// See [`Sha2Engine::finish`]
    pub fn finish(&mut self) -> Result<Digest, Sha2Error> {
        dispatch!(&mut self.inner, engine => engine.finish())
    }
}

/// One-shot digest of `data`
///
/// # Errors
/// Returns `Sha2Error::LengthOverflow` if `data` exceeds the length field
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Result<Digest, Sha2Error> {
    let mut engine = DigestEngine::new(algorithm);
    engine.update(data)?;
    engine.finish()
}

/// One-shot SHA-256
pub fn sha256(data: &[u8]) -> Result<Digest, Sha2Error> {
    digest(Algorithm::Sha256, data)
}

/// One-shot SHA-384
pub fn sha384(data: &[u8]) -> Result<Digest, Sha2Error> {
    digest(Algorithm::Sha384, data)
}

/// One-shot SHA-512
pub fn sha512(data: &[u8]) -> Result<Digest, Sha2Error> {
    digest(Algorithm::Sha512, data)
}
