//! Raw holiday records as supplied by the upstream holiday API.

use holical_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// One raw holiday record.
///
/// The date is kept as text so that a single malformed date drops only its
/// own record instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoliday {
    /// Calendar day, `YYYY-MM-DD`.
    #[serde(rename = "fecha", alias = "date")]
    pub date: String,
    /// Free-form category, e.g. `"inamovible"` or `"trasladable"`.
    #[serde(rename = "tipo", alias = "category")]
    pub category: String,
    /// Display label.
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
}

impl RawHoliday {
    /// Create a record from its three fields.
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            name: name.into(),
        }
    }
}

/// Decode a JSON array of raw holiday records.
///
/// # Errors
/// Returns [`Error::Decode`] if `bytes` is not a JSON array of records.
pub fn decode(bytes: &[u8]) -> Result<Vec<RawHoliday>> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
}
