//! Serialization of PrecisionDecimal.
//! The number is serialized as a string with all of its digits.

use serde::{Serialize, Serializer};

use crate::num::PrecisionDecimal;

impl Serialize for PrecisionDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_fixed())
    }
}
