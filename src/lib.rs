pub mod alphabet;
pub mod base64;
pub mod error;
pub mod regroup;

pub use self::{
    alphabet::Alphabet,
    base64::{decode, decode_with, encode, encode_with, Decoder, Encoder, Options},
    error::Error,
};
