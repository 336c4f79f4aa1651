// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

use crate::engine::{DigestEngine, Sha2Engine, digest};
use crate::split::SplitU64;
use crate::variant::{Algorithm, SHA384_SPLIT, SHA512_SPLIT};
use crate::word::Word;

use super::support::digest_chunked;

proptest! {
    #[test]
    fn two_part_split_matches_single_update(
        data in vec(any::<u8>(), 0..600),
        split in any::<Index>()
    ) {
        let at = split.index(data.len() + 1);
        let (head, tail) = data.split_at(at);

        for algorithm in Algorithm::ALL {
            let mut engine = DigestEngine::new(algorithm);
            engine.update(head).expect("Failed to update(head)");
            engine.update(tail).expect("Failed to update(tail)");
            let parts = engine.finish().expect("Failed to finish()");

            let whole = digest(algorithm, &data).expect("Failed to digest(..)");
            prop_assert_eq!(parts, whole);
        }
    }

    #[test]
    fn fixed_chunk_size_matches_single_update(
        data in vec(any::<u8>(), 0..1024),
        chunk in 1..300usize
    ) {
        for algorithm in Algorithm::ALL {
            let whole = digest(algorithm, &data).expect("Failed to digest(..)");
            prop_assert_eq!(digest_chunked(algorithm, &data, chunk), whole);
        }
    }

    #[test]
    fn split_word_engine_matches_native(data in vec(any::<u8>(), 0..400)) {
        let mut split_384 = Sha2Engine::with_params(&SHA384_SPLIT);
        split_384.update(&data).expect("Failed to update(..)");
        prop_assert_eq!(
            split_384.finish().expect("Failed to finish()"),
            digest(Algorithm::Sha384, &data).expect("Failed to digest(..)")
        );

        let mut split_512 = Sha2Engine::with_params(&SHA512_SPLIT);
        split_512.update(&data).expect("Failed to update(..)");
        prop_assert_eq!(
            split_512.finish().expect("Failed to finish()"),
            digest(Algorithm::Sha512, &data).expect("Failed to digest(..)")
        );
    }

    #[test]
    fn split_word_arithmetic_matches_u64(a in any::<u64>(), b in any::<u64>(), n in 0u32..64) {
        let sa = SplitU64::from_u64(a);
        let sb = SplitU64::from_u64(b);

        prop_assert_eq!(sa.wrapping_add(sb).to_u64(), a.wrapping_add(b));
        prop_assert_eq!(sa.rotr(n).to_u64(), a.rotate_right(n));
        prop_assert_eq!(sa.shr(n).to_u64(), a >> n);
        prop_assert_eq!(sa.xor(sb).to_u64(), a ^ b);
    }
}
