//! Byte and text encodings
//!
//! Field elements implement [`Serialize`](dpairing_api::Serialize) and
//! [`TextSerialize`](dpairing_api::TextSerialize) next to their arithmetic.
//! This module holds the shared text helpers, the point formats, and the
//! optional `serde` glue.
//!
//! Points are laid out as `[flag][X][Y]` (uncompressed) or
//! `[flag][X][parity]` (compressed). The flag is `0x00` for the identity,
//! whose remaining bytes are zero, and `0x01` otherwise. Text follows the
//! same layout with fields separated by a single space.

mod point;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod text;

pub use text::{read_sequence, write_sequence};

/// Flag byte of the point at infinity
pub const FLAG_IDENTITY: u8 = 0x00;
/// Flag byte of any other point
pub const FLAG_POINT: u8 = 0x01;
