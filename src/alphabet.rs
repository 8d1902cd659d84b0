use std::{error, fmt};

pub const LEN: usize = 65;

pub const PADDING_INDEX: u8 = 64;

pub const DEFAULT_PADDING: char = '=';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    pub character: char,
    pub index: usize,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Invalid alphabet length {} (64 or 65 expected)", length),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate alphabet character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid character '{}' at index {}", self.character, self.index)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    encode: [char; LEN],
    decode: [Option<u8>; 128],
}

impl Alphabet {
    pub const fn from_ascii(characters: &[u8]) -> Result<Self, Error> {
        let mut encode = [DEFAULT_PADDING; LEN];
        match characters.len() {
            64 | 65 => {}
            length => return Err(Error::InvalidLength { length }),
        }
        let mut index = 0;
        while index < characters.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            encode[index] = character as char;
            index += 1;
        }
        Self::build(encode)
    }

    pub fn new(characters: &str) -> Result<Self, Error> {
        let mut encode = [DEFAULT_PADDING; LEN];
        let mut length = 0;
        for character in characters.chars() {
            if let Some(slot) = encode.get_mut(length) {
                *slot = character;
            }
            length += 1;
        }
        match length {
            64 | 65 => Self::build(encode),
            length => Err(Error::InvalidLength { length }),
        }
    }

    const fn build(encode: [char; LEN]) -> Result<Self, Error> {
        let mut decode: [Option<u8>; 128] = [None; 128];
        let mut index = 0;
        while index < LEN {
            let character = encode[index];
            if (character as u32) < 128 {
                if let Some(first) = decode[character as usize] {
                    return Err(Error::DuplicateCharacter {
                        character,
                        first: first as usize,
                        second: index,
                    });
                }
                decode[character as usize] = Some(index as u8);
            } else {
                let mut first = 0;
                while first < index {
                    if encode[first] == character {
                        return Err(Error::DuplicateCharacter { character, first, second: index });
                    }
                    first += 1;
                }
            }
            index += 1;
        }
        Ok(Self { encode, decode })
    }

    /// Symbol for `value`, which must be at most [`PADDING_INDEX`].
    pub fn encode(&self, value: u8) -> char {
        self.encode[value as usize]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if (character as u32) < 128 {
            self.decode[character as usize]
        } else {
            self.encode.iter().position(|&symbol| symbol == character).map(|value| value as u8)
        };
        value.ok_or(DecodeError { character, index })
    }

    pub const fn padding(&self) -> char {
        self.encode[PADDING_INDEX as usize]
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.encode.iter().copied()
    }
}

pub const STANDARD: Alphabet = match Alphabet::from_ascii(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const URL_SAFE: Alphabet = match Alphabet::from_ascii(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub fn resolve(characters: Option<&str>) -> Result<Alphabet, Error> {
    match characters {
        None => Ok(STANDARD),
        Some(characters) => {
            let alphabet = Alphabet::new(characters)?;
            tracing::trace!(padding = %alphabet.padding(), "resolved custom alphabet");
            Ok(alphabet)
        }
    }
}
