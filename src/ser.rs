//! Serde support for `BitSet`.
//!
//! By default a set serializes as a `(len, words)` pair, `words` holding the
//! stored `u32` words with padding cleared. The [`decimal`] and [`binary`]
//! modules serialize it as text instead, for use with `#[serde(with = ...)]`.

use alloc::{string::String, vec::Vec};
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
};

use crate::{BitSet, BitSetBuilder, Radix, storage::words_for};

impl Serialize for BitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let words: Vec<u32> = self.logical_words().collect();
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.len)?;
        tuple.serialize_element(&words)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for BitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitSetVisitor;

        impl<'de> Visitor<'de> for BitSetVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bit length followed by a sequence of u32 words")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let len: usize = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let words: Vec<u32> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                if words.len() != words_for(len) {
                    return Err(de::Error::invalid_length(
                        words.len(),
                        &"ceil(len / 32) words",
                    ));
                }

                let mut builder = BitSetBuilder::with_capacity(words.len());
                for word in words {
                    builder.push_word(word);
                }
                let mut set = builder.finish();
                set.resize(len, false);
                Ok(set)
            }
        }

        deserializer.deserialize_tuple(2, BitSetVisitor)
    }
}

fn text_error<E: de::Error>(err: crate::Error) -> E {
    E::custom(err)
}

/// Serializes a [`BitSet`] as its decimal numeral.
///
/// Deserializing goes through [`BitSet::from_radix_str`], so the length
/// becomes that of the shortest binary numeral.
pub mod decimal {
    use super::*;

    /// Serialize the set as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to write a string.
    pub fn serialize<S>(set: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&set.to_decimal_string())
    }

    /// Deserialize the set from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a non-empty string of decimal
    /// digits.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        BitSet::from_radix_str(&text, Radix::Decimal).map_err(text_error)
    }
}

/// Serializes a [`BitSet`] as its binary text, every bit included.
pub mod binary {
    use super::*;

    /// Serialize the set as a binary string of exactly `len()` digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to write a string.
    pub fn serialize<S>(set: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&set.to_binary_string(true))
    }

    /// Deserialize the set from a binary string. An empty string yields an
    /// empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains anything but `0` and `1`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(BitSet::new());
        }
        BitSet::from_radix_str(&text, Radix::Binary).map_err(text_error)
    }
}
