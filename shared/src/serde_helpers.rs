//! Lenient deserializers for form-style JSON
//!
//! HTML forms submit every field as a string, so integer columns accept
//! both `10` and `"10"`.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserialize an `i32` from a JSON integer or a numeric string.
///
/// Use with `#[serde(deserialize_with = "shared::serde_helpers::lenient_i32")]`.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let wide = match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => n,
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid integer: {s:?}")))?,
    };
    i32::try_from(wide).map_err(|_| de::Error::custom(format!("integer out of range: {wide}")))
}
