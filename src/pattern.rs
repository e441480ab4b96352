use core::fmt;
use std::ops::Deref;

use crate::error::PatternError;

///
/// The byte sequence to search for, never empty
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    ///
    /// Create a pattern from raw bytes
    pub fn new(bytes: &[u8]) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }
    ///
    /// Decode a pattern written in hex, 2 digits per byte, case insensitive.
    /// Example : "deadBEEF00" is the 5 bytes `de ad be ef 00`
    pub fn from_hex(word: &str) -> Result<Self, PatternError> {
        if word.is_empty() {
            return Err(PatternError::Empty);
        }
        let bytes = hex::decode(word).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                PatternError::InvalidCharacter { c, index }
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                PatternError::OddLength(word.len())
            }
        })?;
        Self::new(&bytes)
    }
    ///
    /// Take the bytes of `word` as-is, without hex decoding
    pub fn literal(word: &str) -> Result<Self, PatternError> {
        Self::new(word.as_bytes())
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for Pattern {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Pattern {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", hex::encode(&self.bytes))
    }
}
