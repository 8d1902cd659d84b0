pub mod decode;
pub mod encode;
pub mod options;

pub use crate::alphabet::{Alphabet, STANDARD, URL_SAFE};
pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};
pub use options::Options;

use crate::Error;

pub fn encode_with(input: impl AsRef<[u8]>, options: &Options) -> Result<String, Error> {
    let alphabet = options.resolve_alphabet().map_err(|error| {
        tracing::debug!(%error, "base64 encode rejected alphabet");
        Error::from(error)
    })?;
    Ok(Encoder::new(&alphabet, options.padding()).encode(input))
}

// Padding symbols are skipped wherever they appear.
pub fn decode_with(input: impl AsRef<str>, options: &Options) -> Result<Vec<u8>, Error> {
    let result = options
        .resolve_alphabet()
        .map_err(Error::from)
        .and_then(|alphabet| Ok(Decoder::new(&alphabet).decode(input)?));
    if let Err(error) = &result {
        tracing::debug!(%error, "base64 decode failed");
    }
    result
}
