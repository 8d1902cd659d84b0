use crate::alphabet::{self, Alphabet};
use serde::{Deserialize, Serialize};
use std::{env, error, fmt, str::FromStr};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidValue { key: String, value: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "Invalid {} {}", key, value),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    alphabet: Option<String>,
    padding: Option<bool>,
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn var_map<T: FromStr>(key: &str) -> Result<Option<T>, Error> {
    match var(key) {
        Some(value) => value.parse().map(Some).map_err(|_| Error::InvalidValue {
            key: key.to_string(),
            value,
        }),
        None => Ok(None),
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Reads `{prefix}_ALPHABET` and `{prefix}_PADDING` from the environment.
    pub fn from_env(prefix: &str) -> Result<Self, Error> {
        Ok(Self {
            alphabet: var(&format!("{}_ALPHABET", prefix)),
            padding: var_map(&format!("{}_PADDING", prefix))?,
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn alphabet(&self) -> Option<&str> {
        self.alphabet.as_deref()
    }

    pub fn padding(&self) -> bool {
        self.padding.unwrap_or(true)
    }

    pub fn resolve_alphabet(&self) -> Result<Alphabet, alphabet::Error> {
        alphabet::resolve(self.alphabet())
    }
}
