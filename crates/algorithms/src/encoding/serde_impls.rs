//! `serde` support through the compressed byte encodings

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ec::{Affine, SwCurveConfig};
use crate::field::SqrtField;
use crate::pairing::{Gt, PairingConfig};

struct BytesVisitor<T> {
    expected: &'static str,
    decode: fn(&[u8]) -> crate::Result<T>,
    _marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for BytesVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expected)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        (self.decode)(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        (self.decode)(&bytes).map_err(de::Error::custom)
    }
}

impl<C: SwCurveConfig> Serialize for Affine<C>
where
    C::BaseField: SqrtField,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_compressed())
    }
}

impl<'de, C: SwCurveConfig> Deserialize<'de> for Affine<C>
where
    C::BaseField: SqrtField,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor {
            expected: "a compressed curve point",
            decode: Affine::<C>::from_compressed,
            _marker: PhantomData,
        })
    }
}

impl<P: PairingConfig> Serialize for Gt<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&dpairing_api::Serialize::to_bytes(self))
    }
}

impl<'de, P: PairingConfig> Deserialize<'de> for Gt<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor {
            expected: "a target group element",
            decode: <Gt<P> as dpairing_api::Serialize>::from_bytes,
            _marker: PhantomData,
        })
    }
}
