//! Serde support: a rope serializes as its byte contents.
//!
//! The deserializer also accepts strings and plain sequences of bytes,
//! so ropes round-trip through self-describing formats regardless of
//! how those formats model binary data.

use std::fmt;

use ::serde::de::{Error, SeqAccess, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Rope;

impl Serialize for Rope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

struct RopeVisitor;

impl<'de> Visitor<'de> for RopeVisitor {
    type Value = Rope;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte array")
    }

    fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Rope, E> {
        Ok(Rope::from_bytes(v))
    }

    fn visit_byte_buf<E: Error>(self, v: Vec<u8>) -> Result<Rope, E> {
        Ok(Rope::from_bytes(&v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Rope, E> {
        Ok(Rope::from(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Rope, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(Rope::from_bytes(&bytes))
    }
}

impl<'de> Deserialize<'de> for Rope {
    fn deserialize<D>(deserializer: D) -> Result<Rope, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_byte_buf(RopeVisitor)
    }
}
