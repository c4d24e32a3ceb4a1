//! Deserialization of PrecisionDecimal.

use core::fmt::Formatter;

use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

use crate::num::PrecisionDecimal;

pub struct PrecisionDecimalVisitor {}

impl<'de> Deserialize<'de> for PrecisionDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrecisionDecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for PrecisionDecimalVisitor {
    type Value = PrecisionDecimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a decimal number as `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PrecisionDecimal::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PrecisionDecimal::from(v))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        PrecisionDecimal::try_from(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        PrecisionDecimal::try_from(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        PrecisionDecimal::parse(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
