use crate::hex::{self, FormatError};

pub trait BytesExt {
    /// Encode self as uppercase hex
    fn to_hex(&self) -> String;
}

pub trait HexStrExt {
    /// Decode self as hex, stripping any leading `0x`
    ///
    /// # Errors
    ///
    /// See [`crate::decode`].
    fn decode_hex(&self) -> Result<Vec<u8>, FormatError>;
}

impl BytesExt for [u8] {
    fn to_hex(&self) -> String {
        hex::encode(self)
    }
}

impl HexStrExt for str {
    fn decode_hex(&self) -> Result<Vec<u8>, FormatError> {
        hex::decode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let input: [u8; 3] = [0x00, 0xFF, 0x1A];
        let expected = "00FF1A";

        let actual = input.to_hex();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_hex() {
        let input = "0x00FF1A";
        let expected = [0x00, 0xFF, 0x1A];

        let actual = input.decode_hex().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_hex_owned() {
        let input = String::from("ABC");

        let actual = input.decode_hex();
        assert_eq!(actual, Err(FormatError::OddLength { len: 3 }));
    }
}
