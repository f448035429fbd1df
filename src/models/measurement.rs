//! Weight and height as reported upstream, in tenths of a unit.

use serde::{Serialize, Serializer};
use std::fmt;

/// A raw upstream weight (hectograms) or height (decimetres).
///
/// The display value is `raw / 10`. Values below one unit are rendered with
/// exactly one decimal place (`7` → `"0.7"`); larger values use the shortest
/// representation (`69` → `6.9`, `100` → `10`) and serialize as JSON numbers.
///
/// The default is the unknown measurement of the sentinel record, which
/// serializes as the number `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Measurement(Option<u32>);

impl Measurement {
    pub fn from_raw(raw: u32) -> Self {
        Self(Some(raw))
    }

    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }

    /// Raw upstream value; `0` when unknown.
    pub fn raw(&self) -> u32 {
        self.0.unwrap_or(0)
    }

    /// Value in kilograms or metres.
    pub fn value(&self) -> f64 {
        f64::from(self.raw()) / 10.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "0"),
            Some(raw) if raw < 10 => write!(f, "{:.1}", self.value()),
            Some(_) => write!(f, "{}", self.value()),
        }
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            None => serializer.serialize_u32(0),
            Some(raw) if raw < 10 => serializer.collect_str(self),
            Some(raw) if raw % 10 == 0 => serializer.serialize_u32(raw / 10),
            Some(_) => serializer.serialize_f64(self.value()),
        }
    }
}
