// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Sha2Error;
use crate::padding::pad;
use crate::variant::{SHA256, SHA384, SHA512};

#[test]
fn empty_message_is_one_padding_block() {
    let padded = pad(&[], 0, &SHA256).expect("Failed to pad(..)");

    assert_eq!(padded.block_count(), 1);
    let bytes = padded.as_bytes();
    assert_eq!(bytes.len(), 64);
    assert_eq!(bytes[0], 0x80);
    assert!(bytes[1..].iter().all(|&b| b == 0));
}

#[test]
fn block_aligned_message_gets_padding_only_block() {
    // 64 bytes already compressed, nothing buffered
    let padded = pad(&[], 64, &SHA256).expect("Failed to pad(..)");

    assert_eq!(padded.block_count(), 1);
    let bytes = padded.as_bytes();
    assert_eq!(bytes[0], 0x80);
    assert!(bytes[1..56].iter().all(|&b| b == 0));
    assert_eq!(bytes[56..], 512u64.to_be_bytes());
}

#[test]
fn tail_fits_in_one_block_up_to_55_bytes() {
    let tail = [0xAAu8; 55];
    let padded = pad(&tail, 55, &SHA256).expect("Failed to pad(..)");

    assert_eq!(padded.block_count(), 1);
    let bytes = padded.as_bytes();
    assert_eq!(bytes[..55], tail);
    assert_eq!(bytes[55], 0x80);
    assert_eq!(bytes[56..], (55u64 * 8).to_be_bytes());
}

#[test]
fn tail_of_56_bytes_spills_into_second_block() {
    let tail = [0xAAu8; 56];
    let padded = pad(&tail, 56, &SHA256).expect("Failed to pad(..)");

    assert_eq!(padded.block_count(), 2);
    let bytes = padded.as_bytes();
    assert_eq!(bytes.len(), 128);
    assert_eq!(bytes[..56], tail);
    assert_eq!(bytes[56], 0x80);
    // First block zero-filled after the marker, length only at the very end
    assert!(bytes[57..120].iter().all(|&b| b == 0));
    assert_eq!(bytes[120..], (56u64 * 8).to_be_bytes());
}

#[test]
fn sha512_uses_16_byte_length_field() {
    let tail = [0x11u8; 111];
    let padded = pad(&tail, 111, &SHA512).expect("Failed to pad(..)");
    assert_eq!(padded.block_count(), 1);
    assert_eq!(padded.as_bytes()[111], 0x80);
    assert_eq!(padded.as_bytes()[112..], (111u128 * 8).to_be_bytes());

    let tail = [0x11u8; 112];
    let padded = pad(&tail, 112, &SHA384).expect("Failed to pad(..)");
    assert_eq!(padded.block_count(), 2);
    assert_eq!(padded.as_bytes().len(), 256);
    assert_eq!(padded.as_bytes()[240..], (112u128 * 8).to_be_bytes());
}

#[test]
fn length_counts_whole_message_not_tail() {
    // 3 bytes buffered after 10 full blocks
    let padded = pad(b"abc", 643, &SHA256).expect("Failed to pad(..)");
    assert_eq!(padded.as_bytes()[56..], (643u64 * 8).to_be_bytes());
}

#[test]
fn sha256_length_field_ceiling() {
    let max = SHA256.max_message_len();
    assert_eq!(max, (1u128 << 61) - 1);

    let padded = pad(&[], max - 63, &SHA256).expect("Failed to pad(..) at the ceiling");
    let bytes = padded.as_bytes();
    assert_eq!(bytes[56..], ((max - 63) as u64 * 8).to_be_bytes());

    assert_eq!(pad(&[], max + 1, &SHA256).err(), Some(Sha2Error::LengthOverflow));
}

#[test]
fn sha512_length_field_ceiling() {
    let max = SHA512.max_message_len();
    assert_eq!(max, (1u128 << 125) - 1);

    let padded = pad(&[0u8; 127], max, &SHA512).expect("Failed to pad(..) at the ceiling");
    assert_eq!(padded.block_count(), 2);
    assert_eq!(padded.as_bytes()[240..], (u128::MAX - 7).to_be_bytes());

    assert_eq!(pad(&[], max + 1, &SHA512).err(), Some(Sha2Error::LengthOverflow));
}
