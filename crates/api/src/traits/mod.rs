//! Serialization traits shared by field elements, points and precomputations

pub mod serialize;

pub use serialize::{Serialize, TextSerialize};
