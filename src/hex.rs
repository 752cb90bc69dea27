/// The hex digits, in nibble order. Decoding matches against this exactly, so lowercase digits
/// are rejected.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

const HEX_PREFIX: &[u8] = b"0x";
const LOW_4_BITS: u8 = 0b0000_1111;

/// Malformed input to [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("hex input has odd length {len}")]
    OddLength { len: usize },
    #[error("invalid hex digit 0x{byte:02X} at index {index}")]
    InvalidCharacter { byte: u8, index: usize },
}

/// Maps a nibble to its uppercase hex digit without branching on its value.
///
/// `(b - 10) >> 31` sign-extends to `-1` for digits and `0` for letters, so the base offset is
/// `55 - 7 = 48` (`'0'`) for `b < 10` and `55` (`'A' - 10`) otherwise.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn nibble_to_char(nibble: u8) -> char {
    let b = i32::from(nibble);
    char::from((55 + b + (((b - 10) >> 31) & -7)) as u8)
}

#[allow(clippy::cast_possible_truncation)]
fn alphabet_index(c: u8) -> Option<u8> {
    HEX_ALPHABET.iter().position(|&digit| digit == c).map(|i| i as u8)
}

/// Encodes `data` as uppercase hex, high nibble first.
#[must_use]
pub fn encode<B: AsRef<[u8]>>(data: B) -> String {
    let data = data.as_ref();
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        out.push(nibble_to_char(byte >> 4));
        out.push(nibble_to_char(byte & LOW_4_BITS));
    }
    out
}

/// Like [`encode`], but keeps "no data" distinct from "empty data".
#[must_use]
pub fn encode_optional<B: AsRef<[u8]>>(data: Option<B>) -> Option<String> {
    data.map(encode)
}

/// Decodes uppercase hex, with any number of leading `0x` prefixes. Empty input decodes to an
/// empty buffer.
///
/// # Errors
///
/// Returns [`FormatError::OddLength`] if the input (prefix stripped) has an odd number of digits,
/// and [`FormatError::InvalidCharacter`] for the first byte outside [`HEX_ALPHABET`]. Non-ASCII
/// input is always reported as an invalid character, before the length is checked.
pub fn decode<S: AsRef<[u8]>>(value: S) -> Result<Vec<u8>, FormatError> {
    let mut digits = value.as_ref();
    while let Some(rest) = digits.strip_prefix(HEX_PREFIX) {
        digits = rest;
    }

    // non-ASCII bytes would otherwise skew the digit count
    if let Some(index) = digits.iter().position(|byte| !byte.is_ascii()) {
        return Err(FormatError::InvalidCharacter {
            byte: digits[index],
            index,
        });
    }

    if digits.len() % 2 == 1 {
        return Err(FormatError::OddLength { len: digits.len() });
    }

    let nibble_at = |index: usize| {
        let byte = digits[index];
        alphabet_index(byte).ok_or(FormatError::InvalidCharacter { byte, index })
    };

    (0..digits.len() / 2)
        .map(|i| -> Result<u8, FormatError> {
            Ok((nibble_at(2 * i)? << 4) | nibble_at(2 * i + 1)?)
        })
        .collect()
}

/// Like [`decode`], treating absent input the same as empty input.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_optional<S: AsRef<[u8]>>(value: Option<S>) -> Result<Vec<u8>, FormatError> {
    value.map_or_else(|| Ok(Vec::new()), decode)
}
