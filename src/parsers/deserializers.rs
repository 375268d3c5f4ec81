use serde::{Deserialize, Deserializer};

/// Deserializer for optional header strings: an explicit `null` reads as an empty string,
/// the same as a missing field
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
