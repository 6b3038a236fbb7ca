//! Treats an explicit JSON `null` like a missing field
//!
//! `#[serde(default)]` only covers absent keys; the API also sends `null` for empty
//! lists and unset flags (`"original_name_servers": null`).

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping `null` to `T::default()`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
