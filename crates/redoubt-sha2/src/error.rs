// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-2 engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha2Error {
    /// Variant tag outside {256, 384, 512}
    #[error("unknown SHA-2 variant {0} (expected 256, 384 or 512)")]
    UnknownVariant(u16),

    /// Variant name not recognized (e.g. "SHA-224")
    #[error("unknown SHA-2 variant name (expected SHA-256, SHA-384 or SHA-512)")]
    UnknownVariantName,

    /// Message bit length does not fit the padding length field
    #[error("message length exceeds the maximum encodable in the length field")]
    LengthOverflow,

    /// `update()` or `finish()` called after `finish()`
    #[error("digest engine already finalized")]
    Finalized,
}

impl Sha2Error {
    /// Returns `true` for errors raised by variant selection or input size.
    pub fn is_configuration(&self) -> bool {
        !self.is_state()
    }

    /// Returns `true` for misuse of a finalized engine.
    pub fn is_state(&self) -> bool {
        matches!(self, Sha2Error::Finalized)
    }
}
