//! Deserialisation for `f64` fields that use NaN as "undefined".
//!
//! JSON has no NaN, so serde_json writes it as `null`. Fields that may hold
//! NaN opt in with `#[serde(deserialize_with = "...serde_nan::deserialize")]`
//! to read that `null` back as NaN.

use serde::{Deserialize, Deserializer};

/// Reads a number, or `null` as NaN.
///
/// # Errors
///
/// Returns the deserializer's error for anything that is neither.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
