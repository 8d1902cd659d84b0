use super::{Alphabet, STANDARD};
use crate::alphabet::PADDING_INDEX;
use crate::regroup::{Regroup, Tail};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    padding: bool,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet, padding: bool) -> Self {
        Self { alphabet, padding }
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        let len = (len * 8).div_ceil(6);
        if self.padding {
            len.div_ceil(4) * 4
        } else {
            len
        }
    }

    fn digits(&self, input: &[u8]) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.encoded_len(input.len()));
        digits.extend(Regroup::new(input.iter().copied(), 8, 6, Tail::Flush));
        if self.padding {
            while digits.len() % 4 != 0 {
                digits.push(PADDING_INDEX);
            }
        }
        digits
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        for digit in self.digits(input.as_ref()) {
            let symbol = self.alphabet.encode(digit);
            let slot = output.get_mut(index..index + symbol.len_utf8()).ok_or(Error::BufferTooSmall)?;
            symbol.encode_utf8(slot);
            index += symbol.len_utf8();
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.digits(input.as_ref()).into_iter().map(|digit| self.alphabet.encode(digit)).collect()
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&STANDARD, true);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}
