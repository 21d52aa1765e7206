use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One invited party on the guest list.
///
/// `is_family` and `p1` stay in their wire encoding so a record added
/// through the API reads back byte for byte; [`Guest::family`] and
/// [`Guest::plus_one`] decode them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub name: String,
    pub guest_of: String,
    pub is_family: String,
    pub restriction: String,
    pub p1: String,
    pub p1_name: String,
    pub p1_restriction: String,
}

/// Family standing, decoded from the `isFamily` marker: empty means not
/// family, any other value (the UI sends ", family") means family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    No,
    Yes,
}

/// Plus-one standing, decoded from the `p1` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlusOne {
    /// `"1?"`: allowed a plus one, not yet known whether they bring one.
    Unknown,
    /// `"0"`: attending alone.
    No,
    /// `"1"`: bringing a confirmed plus one.
    Confirmed,
}

impl PlusOne {
    pub fn from_marker(marker: &str) -> Option<PlusOne> {
        match marker {
            "1?" => Some(PlusOne::Unknown),
            "0" => Some(PlusOne::No),
            "1" => Some(PlusOne::Confirmed),
            _ => None,
        }
    }
}

/// The first required field a request body is missing, or carries with a
/// non-string type. Its display form is the API's error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing '{0}' parameter")]
pub struct MissingField(pub &'static str);

fn string_field(value: &Value, field: &'static str) -> Result<String, MissingField> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(MissingField(field)),
    }
}

impl Guest {
    /// Reads a guest out of untyped JSON.
    ///
    /// All seven fields must be present as strings; they are checked in
    /// declaration order and the first miss wins. Anything that is not a
    /// JSON object fails on `name`. Accepted values are copied verbatim,
    /// marker strings included.
    pub fn from_value(value: &Value) -> Result<Guest, MissingField> {
        let parsed = Guest::read_value(value);
        if let Err(MissingField(field)) = &parsed {
            log::warn!("not a guest, missing '{field}': {value}");
        }
        parsed
    }

    fn read_value(value: &Value) -> Result<Guest, MissingField> {
        Ok(Guest {
            name: string_field(value, "name")?,
            guest_of: string_field(value, "guestOf")?,
            is_family: string_field(value, "isFamily")?,
            restriction: string_field(value, "restriction")?,
            p1: string_field(value, "p1")?,
            p1_name: string_field(value, "p1Name")?,
            p1_restriction: string_field(value, "p1Restriction")?,
        })
    }

    pub fn family(&self) -> Family {
        if self.is_family.is_empty() {
            Family::No
        } else {
            Family::Yes
        }
    }

    /// Markers outside the tri-state count as attending alone.
    pub fn plus_one(&self) -> PlusOne {
        PlusOne::from_marker(&self.p1).unwrap_or(PlusOne::No)
    }
}
