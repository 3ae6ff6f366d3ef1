//! Advocate domain model.
//!
//! An [`Advocate`] is one directory entry as delivered by the backend. Records
//! are read-only once loaded; the plugin only ever filters and displays them.
//!
//! The backend is loose about two fields: `yearsOfExperience` and
//! `phoneNumber` may arrive either as JSON strings or as JSON numbers. Both are
//! normalized to their decimal text form during deserialization so the filter
//! engine can compare them as text.

use serde::{Deserialize, Deserializer, Serialize};

/// One advocate entry.
///
/// Field names follow the backend's camelCase wire format. Unknown fields
/// (such as a database `id`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub years_of_experience: String,
    #[serde(deserialize_with = "text_or_number")]
    pub phone_number: String,
}

/// Display identity of a table row.
///
/// The backend exposes no stable identifier, so rows are keyed by the
/// (first name, last name) pair. Two advocates sharing both names collide;
/// the key is only used to keep the cursor on the same row across refilters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub first_name: String,
    pub last_name: String,
}

impl Advocate {
    /// Returns the row key for this advocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use advocate_directory::Advocate;
    ///
    /// let advocate = Advocate {
    ///     first_name: "Jane".into(),
    ///     last_name: "Doe".into(),
    ///     city: "Austin".into(),
    ///     degree: "MD".into(),
    ///     specialties: vec![],
    ///     years_of_experience: "5".into(),
    ///     phone_number: "5551234567".into(),
    /// };
    /// assert_eq!(advocate.row_key().first_name, "Jane");
    /// ```
    #[must_use]
    pub fn row_key(&self) -> RowKey {
        RowKey {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Returns `true` if this record is identified by `key`.
    #[must_use]
    pub fn has_key(&self, key: &RowKey) -> bool {
        self.first_name == key.first_name && self.last_name == key.last_name
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Accepts a JSON string or integer and yields its text form.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Unsigned(n) => n.to_string(),
        TextOrNumber::Signed(n) => n.to_string(),
    })
}
