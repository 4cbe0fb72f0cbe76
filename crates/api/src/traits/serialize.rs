//! Traits for byte and text serialization of pairing types.

use crate::Result;

use alloc::{string::String, vec::Vec};

/// A trait for public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for types with a line-oriented text encoding.
///
/// Coordinates of one value are joined by a single space; elements of a
/// sequence are separated by newlines and preceded by a decimal length.
/// Readers consume exactly one value from the front of `input` and return
/// the remainder, so values compose without an intermediate tokenizer.
pub trait TextSerialize: Sized {
    /// Appends the encoding of `self` to `out`.
    fn write_text(&self, out: &mut String);

    /// Parses one value from the front of `input`.
    fn read_text(input: &str) -> Result<(Self, &str)>;

    /// Encodes `self` as a fresh string.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    /// Decodes a complete string, rejecting trailing input.
    fn from_text(input: &str) -> Result<Self> {
        let (value, rest) = Self::read_text(input)?;
        if !rest.is_empty() {
            return Err(crate::Error::malformed("TextSerialize::from_text", "trailing input"));
        }
        Ok(value)
    }
}
