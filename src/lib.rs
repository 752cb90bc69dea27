//! Uppercase hexadecimal encoding and decoding
//!
//! ```
//! let bytes = base16::decode("0x00FF1A").unwrap();
//! assert_eq!(bytes, [0x00, 0xFF, 0x1A]);
//! assert_eq!(base16::encode(&bytes), "00FF1A");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod bytes_ext;
mod hex;

pub use bytes_ext::{BytesExt, HexStrExt};
pub use hex::{decode, decode_optional, encode, encode_optional, FormatError, HEX_ALPHABET};

#[cfg(test)]
fn collect_lines(s: &str) -> String {
    s.lines().collect::<String>()
}

#[cfg(test)]
fn collect_mapped_lines<F>(s: &str, map_fn: F) -> Vec<Vec<u8>>
where
    F: Fn(&str) -> Vec<u8>,
{
    s.lines().map(map_fn).collect::<Vec<_>>()
}

#[cfg(test)]
fn gen_random_bytes(len: usize) -> Vec<u8> {
    use rand::Rng;
    (0..len).map(|_| rand::thread_rng().gen()).collect()
}

/// Reads contents of path, removes newlines, hex decodes, and returns a Vec<u8>
#[cfg(test)]
macro_rules! hex_decode_from_file {
    ($filename:expr) => {{
        let contents = include_str!($filename);
        crate::hex::decode(crate::collect_lines(contents)).unwrap()
    }};
}

/// Reads contents of path, hex decodes each line (no newlines), and returns a Vec<Vec<u8>>
#[cfg(test)]
macro_rules! hex_decode_lines_from_file {
    ($filename:expr) => {{
        let contents = include_str!($filename);
        crate::collect_mapped_lines(contents, |line| crate::hex::decode(line).unwrap())
    }};
}
