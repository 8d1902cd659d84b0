use super::{Alphabet, STANDARD};
use crate::alphabet;
use crate::regroup::{self, Regroup, Tail};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    InvalidRemainingBits,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::InvalidRemainingBits => write!(f, "Remaining bits must be zero"),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        Self::InvalidCharacter {
            character: error.character,
            index: error.index,
        }
    }
}

impl From<regroup::Error> for Error {
    fn from(error: regroup::Error) -> Self {
        match error {
            regroup::Error::InvalidRemainingBits { .. } => Self::InvalidRemainingBits,
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn decoded_len(&self, len: usize) -> usize {
        len * 6 / 8
    }

    fn digits(&self, input: &str) -> Result<Vec<u8>, Error> {
        let digits = input
            .chars()
            .enumerate()
            .map(|(index, character)| self.alphabet.decode(character, index))
            .collect::<Result<Vec<u8>, alphabet::DecodeError>>()?;
        Ok(digits)
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut regroup = Regroup::new(self.digits(input.as_ref())?, 6, 8, Tail::Strict);
        let mut index = 0;
        for byte in regroup.by_ref() {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = byte;
            index += 1;
        }
        regroup.finish()?;
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let digits = self.digits(input.as_ref())?;
        Ok(regroup::convert(digits, 6, 8, Tail::Strict)?)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&STANDARD);

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::alphabet::{Alphabet, URL_SAFE};

    #[test]
    fn decode() {
        assert_eq!(super::decode("FPucA9l+"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
        assert_eq!(super::decode("FPucA9k="), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9]));
        assert_eq!(super::decode("FPucAw=="), Ok(vec![0x14, 0xfb, 0x9c, 0x03]));
        assert_eq!(super::decode(""), Ok(b"".to_vec()));
        assert_eq!(super::decode("Zg=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("Zm9vYg=="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("Zm9vYmE="), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("Zm9vYmFy"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn decode_without_padding() {
        assert_eq!(super::decode("Zg"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8"), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9vYmE"), Ok(b"fooba".to_vec()));
    }

    #[test]
    fn padding_is_skipped_anywhere() {
        assert_eq!(super::decode("Z=g="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("===="), Ok(vec![]));
    }

    #[test]
    fn decode_all_bytes() {
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(super::decode("Z!=="), Err(Error::InvalidCharacter { character: '!', index: 1 }));
        assert_eq!(super::decode("Zm9v-"), Err(Error::InvalidCharacter { character: '-', index: 4 }));
        assert_eq!(super::decode("Zmé="), Err(Error::InvalidCharacter { character: 'é', index: 2 }));
        assert_eq!(
            super::decode("Z!==").map_err(|error| error.to_string()),
            Err("Invalid character '!' at index 1".to_string())
        );
    }

    #[test]
    fn invalid_remaining_bits() {
        assert_eq!(super::decode("Zh=="), Err(Error::InvalidRemainingBits));
        assert_eq!(super::decode("Zm9="), Err(Error::InvalidRemainingBits));
        assert_eq!(super::decode("Z"), Err(Error::InvalidRemainingBits));
        assert_eq!(super::decode("A"), Ok(vec![]));
    }

    #[test]
    fn decode_with_custom_alphabet() {
        let alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ9876543210#@").unwrap();
        assert_eq!(
            Decoder::new(&alphabet).decode("BtXVwJ8yFer#vfiQm9LqAY4oldb1pZG@Eua2jh56sM0HzITKC7WRxNDSngP3kcOU"),
            Ok(b"m<oZ=X|D~TR*3IPk.N,0|?8?y@;$~7Joaf+dsl+^wl4jz(*.".to_vec())
        );
        let alphabet = Alphabet::new("BCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/A*").unwrap();
        assert_eq!(Decoder::new(&alphabet).decode("BB**"), Ok(vec![0x00]));
        assert_eq!(
            Decoder::new(&alphabet).decode("BB=="),
            Err(Error::InvalidCharacter { character: '=', index: 2 })
        );
        assert_eq!(Decoder::new(&URL_SAFE).decode("-_8="), Ok(vec![0xfb, 0xff]));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("Zm9vYg==", &mut output), Ok(4));
        assert_eq!(&output, b"foob");
        let mut output = [0u8; 3];
        assert_eq!(super::decode_into("Zm9vYg==", &mut output), Err(Error::BufferTooSmall));
        let mut output = [0u8; 6];
        assert_eq!(super::decode_into("Zh==", &mut output), Err(Error::InvalidRemainingBits));
    }

    #[test]
    fn decoded_len() {
        let decoder = Decoder::default();
        for input in ["", "Zg==", "Zm8=", "Zm9v", "Zm9vYg", "Zm9vYmFy"] {
            assert!(super::decode(input).unwrap().len() <= decoder.decoded_len(input.len()));
        }
        assert_eq!(decoder.decoded_len(0), 0);
        assert_eq!(decoder.decoded_len(4), 3);
        assert_eq!(decoder.decoded_len(6), 4);
        assert_eq!(super::decode("Zm9v").unwrap().len(), decoder.decoded_len(4));
        assert_eq!(super::decode("Zm9vYmFy").unwrap().len(), decoder.decoded_len(8));
    }
}
