use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted scrapbook entry.
///
/// `id`, `created_at` and `updated_at` are assigned by the record store; the
/// rest is set once at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,

    pub photo_url: String,

    pub caption: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Accepts RFC 3339 (`timestamptz` columns) as well as offset-less values from
/// plain `timestamp` columns, which are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl Memory {
    /// Creation date the way the collection view shows it, e.g. `Feb 14, 2025`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

/// Insert payload for a new memory. `location` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMemory {
    pub photo_url: String,
    pub caption: String,
    pub location: Option<String>,
}

impl NewMemory {
    pub fn new(photo_url: String, caption: String, location: Option<String>) -> Self {
        Self {
            photo_url,
            caption,
            location,
        }
    }
}
