//! Serde module for `f64` fields that may be infinite or `NaN`
//!
//! JSON has no literal for non-finite numbers, so they are written as the
//! strings `"inf"`, `"-inf"` and `"NaN"`. Plain numbers pass through, and a
//! `null` (how `serde_json` writes non-finite floats by default) reads back
//! as `NaN`.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";
const NAN: &str = "NaN";

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value.is_sign_positive() {
        serializer.serialize_str(INFINITY)
    } else {
        serializer.serialize_str(NEG_INFINITY)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FloatVisitor)
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, null, \"inf\", \"-inf\" or \"NaN\"")
    }

    fn visit_f64<E>(self, value: f64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(value as f64)
    }

    fn visit_u64<E>(self, value: u64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(value as f64)
    }

    fn visit_unit<E>(self) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(f64::NAN)
    }

    fn visit_none<E>(self) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(f64::NAN)
    }

    fn visit_str<E>(self, value: &str) -> Result<f64, E>
    where
        E: de::Error,
    {
        match value {
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}
