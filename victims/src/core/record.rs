//! Record shape persisted in the backing file.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry in the store.
///
/// Files written by older versions lack `middlename` and `age`; those load as
/// an empty middle name and no age. Missing or `null` names and dates load as
/// empty text rather than failing the whole file. Keys this crate does not
/// know about are kept in `extra` and written back unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub middlename: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "dateOfDeath", default, deserialize_with = "null_as_empty")]
    pub date_of_death: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Record {
    /// Full name with the middle name included only when present.
    pub fn full_name(&self) -> String {
        let first = or_unknown(&self.firstname);
        let last = or_unknown(&self.lastname);
        if self.middlename.is_empty() {
            format!("{first} {last}")
        } else {
            format!("{first} {} {last}", self.middlename)
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())?;
        if let Some(age) = self.age {
            write!(f, " (age {age})")?;
        }
        write!(f, " - {}", or_unknown(&self.date_of_death))
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() { "Unknown" } else { value }
}

/// Raw field values as typed on the command line, before trimming or parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
    pub age: String,
    pub date_of_death: String,
}

impl RecordInput {
    pub fn new(
        firstname: impl Into<String>,
        middlename: impl Into<String>,
        lastname: impl Into<String>,
        age: impl Into<String>,
        date_of_death: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            middlename: middlename.into(),
            lastname: lastname.into(),
            age: age.into(),
            date_of_death: date_of_death.into(),
        }
    }

    /// Build from 4 or 5 positional values: `first [middle] last age date`.
    ///
    /// Returns `None` for any other arity.
    pub fn from_positionals(values: &[String]) -> Option<Self> {
        match values {
            [first, last, age, date] => Some(Self::new(first, "", last, age, date)),
            [first, middle, last, age, date] => Some(Self::new(first, middle, last, age, date)),
            _ => None,
        }
    }
}
