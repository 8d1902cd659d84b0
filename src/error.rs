use crate::alphabet;
use crate::base64::{decode, encode};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidAlphabetLength { length: usize },
    DuplicateAlphabetCharacter { character: char, first: usize, second: usize },
    NonAsciiAlphabetCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    InvalidRemainingBits,
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabetLength { length } => write!(f, "Invalid alphabet length {} (64 or 65 expected)", length),
            Self::DuplicateAlphabetCharacter { character, first, second } => {
                write!(f, "Duplicate alphabet character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiAlphabetCharacter { character, index } => {
                write!(f, "Non-ascii alphabet character {:#02x} at index {}", character, index)
            }
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::InvalidRemainingBits => write!(f, "Remaining bits must be zero"),
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        match error {
            alphabet::Error::InvalidLength { length } => Self::InvalidAlphabetLength { length },
            alphabet::Error::DuplicateCharacter { character, first, second } => {
                Self::DuplicateAlphabetCharacter { character, first, second }
            }
            alphabet::Error::NonAsciiCharacter { character, index } => Self::NonAsciiAlphabetCharacter { character, index },
        }
    }
}

impl From<encode::Error> for Error {
    fn from(error: encode::Error) -> Self {
        match error {
            encode::Error::BufferTooSmall => Self::BufferTooSmall,
        }
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        match error {
            decode::Error::BufferTooSmall => Self::BufferTooSmall,
            decode::Error::InvalidCharacter { character, index } => Self::InvalidCharacter { character, index },
            decode::Error::InvalidRemainingBits => Self::InvalidRemainingBits,
        }
    }
}
