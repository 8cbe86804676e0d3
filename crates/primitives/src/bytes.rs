//! Byte and hex-string manipulation utilities
//!
//! This module is the shared utility surface the rest of the workspace is
//! built on: hex encoding/decoding with `0x`-prefix handling, left padding
//! for strings and buffers, MSB-first bit extraction, and constant-time
//! buffer comparison.

use alloy_primitives::hex;

use crate::error::Result;

/// Returns `true` if the string starts with the literal `0x` prefix.
pub fn has_hex_prefix(input: &str) -> bool {
    input.starts_with("0x")
}

/// Prepends `0x` to a string. Idempotent: an already-prefixed string is
/// returned unchanged.
pub fn add_hex_prefix(input: &str) -> String {
    if has_hex_prefix(input) {
        input.to_string()
    } else {
        format!("0x{input}")
    }
}

/// Strips a leading `0x` prefix. Idempotent: a string without the prefix is
/// returned unchanged.
pub fn strip_hex_prefix(input: &str) -> &str {
    input.strip_prefix("0x").unwrap_or(input)
}

/// Encodes bytes as a lowercase hex string without a prefix.
pub fn hex_encode<T: AsRef<[u8]>>(data: T) -> String {
    hex::encode(data)
}

/// Encodes bytes as a lowercase hex string with a `0x` prefix.
pub fn hex_encode_prefixed<T: AsRef<[u8]>>(data: T) -> String {
    hex::encode_prefixed(data)
}

/// Decodes a hex string, with or without a `0x`/`0X` prefix.
///
/// The literal strings `""` and `"0x"` decode to an empty buffer rather than
/// an error. Odd-length or non-hex input is an error.
pub fn hex_decode(input: &str) -> Result<Vec<u8>> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if stripped.is_empty() {
        return Ok(Vec::new());
    }

    Ok(hex::decode(stripped)?)
}

/// Left-pads a string with `pad` up to `to_length` characters.
///
/// If the input is already `to_length` or longer, the **last** `to_length`
/// characters are returned. Decimal-fraction slicing in the amount formatter
/// relies on this exact truncate-to-suffix behaviour; callers that need the
/// leading characters preserved must check the length first.
pub fn left_pad(input: &str, to_length: usize, pad: char) -> String {
    let length = input.chars().count();

    if length < to_length {
        let mut output = String::with_capacity(to_length);
        output.extend(std::iter::repeat_n(pad, to_length - length));
        output.push_str(input);
        output
    } else {
        input.chars().skip(length - to_length).collect()
    }
}

/// Extracts `length` bits (at most 64) starting at bit offset `start_bit`,
/// MSB-first within each byte, right-aligned in a `u64`.
///
/// Returns `None` if `length` is zero or exceeds 64, if the requested range
/// does not fit the buffer, or if the touched byte window spans more than
/// eight bytes.
pub fn bits_in_range(data: &[u8], start_bit: usize, length: usize) -> Option<u64> {
    if length == 0 || length > 64 {
        return None;
    }
    let end_bit = start_bit.checked_add(length)?;
    if end_bit > data.len().checked_mul(8)? {
        return None;
    }

    let start_byte = start_bit / 8;
    let end_byte = end_bit.div_ceil(8);
    if end_byte - start_byte > 8 {
        return None;
    }

    let mut window = [0u8; 8];
    window[..end_byte - start_byte].copy_from_slice(&data[start_byte..end_byte]);

    let mut value = u64::from_be_bytes(window);
    value <<= start_bit % 8;
    value >>= 64 - length;
    Some(value)
}

/// Compares two buffers without early exit on mismatching contents.
///
/// Buffers of unequal length compare unequal immediately, which leaks the
/// length; this is a known limitation, not a guarantee against length
/// side-channels. Equal-length buffers are compared over their full length
/// with an accumulated OR-of-XOR.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut difference = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        difference |= x ^ y;
    }

    difference == 0
}

/// Left-extends a buffer to `to_length` bytes, padding with `0x00`, or with
/// `0xFF` when `pad_with_ones` is set (two's-complement sign extension).
///
/// Returns `None` if the buffer is already longer than `to_length`.
pub fn set_length_left(data: &[u8], to_length: usize, pad_with_ones: bool) -> Option<Vec<u8>> {
    if data.len() > to_length {
        return None;
    }

    let fill = if pad_with_ones { 0xff } else { 0x00 };
    let mut output = vec![fill; to_length - data.len()];
    output.extend_from_slice(data);
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bit_functions() {
        let data = [0xf0, 0x02, 0x03];
        assert_eq!(bits_in_range(&data, 0, 1), Some(1));
        assert_eq!(bits_in_range(&data, 0, 4), Some(0x0f));
        assert_eq!(bits_in_range(&data, 8, 16), Some(0x0203));
        assert_eq!(bits_in_range(&data, 20, 4), Some(0x03));
    }

    #[test]
    fn test_bit_functions_out_of_range() {
        let data = [0xf0, 0x02, 0x03];
        assert_eq!(bits_in_range(&data, 0, 0), None);
        assert_eq!(bits_in_range(&data, 0, 65), None);
        assert_eq!(bits_in_range(&data, 16, 16), None);
        assert_eq!(bits_in_range(&data, 24, 1), None);
    }

    #[test]
    fn test_bit_functions_offset_near_usize_max() {
        // offsets whose range end would wrap must fail, not overflow
        let data = [0xf0, 0x02, 0x03];
        assert_eq!(bits_in_range(&data, usize::MAX - 60, 64), None);
        assert_eq!(bits_in_range(&data, usize::MAX, 1), None);
    }

    #[test]
    fn test_hex_prefix_helpers() {
        assert_eq!(strip_hex_prefix("0x1c31de57e49fc00"), "1c31de57e49fc00");
        assert_eq!(strip_hex_prefix("1c31de57e49fc00"), "1c31de57e49fc00");
        assert_eq!(add_hex_prefix("abcd"), "0xabcd");
        assert_eq!(add_hex_prefix("0xabcd"), "0xabcd");
        assert!(has_hex_prefix("0xabcd"));
        assert!(!has_hex_prefix("abcd"));
    }

    #[test]
    fn test_hex_decode_special_cases() {
        assert_eq!(hex_decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_decode("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_decode("0xff00").unwrap(), vec![0xff, 0x00]);
        assert_eq!(hex_decode("ff00").unwrap(), vec![0xff, 0x00]);
        assert!(hex_decode("0xf").is_err());
        assert!(hex_decode("zz").is_err());
    }

    #[test]
    fn test_left_pad() {
        assert_eq!(left_pad("7", 3, '0'), "007");
        assert_eq!(left_pad("", 3, '0'), "000");
        assert_eq!(left_pad("123", 3, '0'), "123");
        // suffix truncation when already longer than the target
        assert_eq!(left_pad("12345", 3, '0'), "345");
        assert_eq!(left_pad("12345", 0, '0'), "");
    }

    #[test]
    fn test_set_length_left() {
        assert_eq!(set_length_left(&[0x01], 3, false), Some(vec![0x00, 0x00, 0x01]));
        assert_eq!(set_length_left(&[0x01], 3, true), Some(vec![0xff, 0xff, 0x01]));
        assert_eq!(set_length_left(&[0x01, 0x02], 2, false), Some(vec![0x01, 0x02]));
        assert_eq!(set_length_left(&[0x01, 0x02, 0x03], 2, false), None);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }

    proptest! {
        #[test]
        fn proptest_hex_round_trip(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(hex_decode(&hex_encode(&data)).unwrap(), data.clone());
            prop_assert_eq!(hex_decode(&hex_encode_prefixed(&data)).unwrap(), data);
        }

        #[test]
        fn proptest_constant_time_eq_matches_eq(
            a in proptest::collection::vec(any::<u8>(), 0..64),
            b in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            prop_assert!(constant_time_eq(&a, &a));
            prop_assert_eq!(constant_time_eq(&a, &b), a == b);
        }

        #[test]
        fn proptest_set_length_left_preserves_suffix(
            data in proptest::collection::vec(any::<u8>(), 0..32),
            extra in 0usize..8,
        ) {
            let padded = set_length_left(&data, data.len() + extra, false).unwrap();
            prop_assert_eq!(padded.len(), data.len() + extra);
            prop_assert_eq!(&padded[extra..], &data[..]);
        }
    }
}
