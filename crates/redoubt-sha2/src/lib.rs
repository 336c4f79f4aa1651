// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 digest engine (SHA-256, SHA-384, SHA-512) with secure memory handling
//!
//! One compression engine, generic over the word type, specialized per
//! variant by a static [`Params`] descriptor (initial state, round constants,
//! rotate/shift amounts, block and output sizes). Intermediate values are
//! zeroized; the engine wipes its state on drop.
//!
//! ```rust
//! use redoubt_sha2::{Algorithm, DigestEngine};
//!
//! let mut engine = DigestEngine::new(Algorithm::Sha256);
//! engine.update(b"ab").expect("update failed");
//! engine.update(b"c").expect("update failed");
//!
//! let digest = engine.finish().expect("finish failed");
//! assert_eq!(digest.len(), 32);
//! assert_eq!(digest.as_bytes()[..4], [0xba, 0x78, 0x16, 0xbf]);
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod engine;
mod error;
#[cfg(feature = "std")]
mod io;
mod padding;
mod schedule;
mod split;
mod variant;
mod word;

pub use compress::{compress, compress_block};
pub use consts::{BLOCK_WORDS, MAX_BLOCK_LEN, MAX_OUTPUT_LEN, MAX_ROUNDS, STATE_WORDS};
pub use digest::Digest;
pub use engine::{DigestEngine, Sha2Engine, digest, sha256, sha384, sha512};
pub use error::Sha2Error;
pub use padding::{PaddedTail, pad};
pub use schedule::{expand, load_block};
pub use split::SplitU64;
pub use variant::{
    Algorithm, Params, Rotations, SHA256, SHA384, SHA384_SPLIT, SHA512, SHA512_SPLIT,
};
pub use word::{Word, add, xor3};
