use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidRemainingBits { value: u32, bits: u32 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRemainingBits { value, bits } => {
                write!(f, "Remaining bits must be zero ({:#x} left in the last {} bits)", value, bits)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tail {
    Flush,
    Strict,
}

// Digits wider than `input_bits` are skipped. `finish` is only meaningful once the iterator is exhausted.
pub struct Regroup<I> {
    input: I,
    input_bits: u32,
    output_bits: u32,
    tail: Tail,
    accumulator: u32,
    bits: u32,
}

impl<I: Iterator<Item = u8>> Regroup<I> {
    pub fn new(input: impl IntoIterator<IntoIter = I>, input_bits: u32, output_bits: u32, tail: Tail) -> Self {
        assert!((1..=8).contains(&input_bits) && (1..=8).contains(&output_bits));
        Self {
            input: input.into_iter(),
            input_bits,
            output_bits,
            tail,
            accumulator: 0,
            bits: 0,
        }
    }

    pub fn finish(self) -> Result<(), Error> {
        match self.accumulator {
            0 => Ok(()),
            value => Err(Error::InvalidRemainingBits { value, bits: self.bits }),
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Regroup<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if self.bits >= self.output_bits {
                self.bits -= self.output_bits;
                let digit = self.accumulator >> self.bits;
                self.accumulator &= (1 << self.bits) - 1;
                return Some(digit as u8);
            }
            match self.input.next() {
                Some(digit) => {
                    if u32::from(digit) < (1 << self.input_bits) {
                        self.accumulator = (self.accumulator << self.input_bits) | u32::from(digit);
                        self.bits += self.input_bits;
                    }
                }
                None => {
                    if self.tail == Tail::Flush && self.bits > 0 {
                        let digit = self.accumulator << (self.output_bits - self.bits);
                        self.accumulator = 0;
                        self.bits = 0;
                        return Some(digit as u8);
                    }
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.input.size_hint();
        let extra = usize::from(self.tail == Tail::Flush);
        let upper = upper.map(|len| (len * self.input_bits as usize + self.bits as usize) / self.output_bits as usize + extra);
        (0, upper)
    }
}

pub fn convert(input: impl IntoIterator<Item = u8>, input_bits: u32, output_bits: u32, tail: Tail) -> Result<Vec<u8>, Error> {
    let mut regroup = Regroup::new(input, input_bits, output_bits, tail);
    let output = regroup.by_ref().collect();
    regroup.finish()?;
    Ok(output)
}
