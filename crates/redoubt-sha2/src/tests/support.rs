// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared test helpers

/// Decodes a lowercase/uppercase hex string.
///
/// Panics on odd length or non-hex characters.
pub(crate) fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Failed to parse hex"))
        .collect()
}

/// Feeds `data` in `chunk`-sized pieces and finishes.
pub(crate) fn digest_chunked(
    algorithm: crate::Algorithm,
    data: &[u8],
    chunk: usize,
) -> crate::Digest {
    let mut engine = crate::DigestEngine::new(algorithm);
    for piece in data.chunks(chunk) {
        engine.update(piece).expect("Failed to update(..)");
    }
    engine.finish().expect("Failed to finish()")
}
