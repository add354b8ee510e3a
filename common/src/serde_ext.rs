use serde::{Deserialize, Deserializer};

/// Tri-state patch field: an absent field stays `None`, an explicit
/// `null` becomes `Some(None)`, a value becomes `Some(Some(v))`.
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
