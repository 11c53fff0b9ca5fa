// src/quest.rs
//! World quest records as they come off a wowhead world-quests page.
//!
//! `WorldQuest` is one active instance from the list widget; `QuestMetadata`
//! is the display info registered for the same id in the gatherer blob.
//! `merge` joins the two by id. Ids are only unique within a single page
//! snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::consts::QUEST_PREFIX;
use crate::core::net::site_url;

/// Gatherer metadata keyed by quest id.
pub type MetadataMap = HashMap<u32, QuestMetadata>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestMetadata {
    #[serde(rename = "name_enus")]
    pub name: Option<String>,
    pub icon: Option<String>,
    /// Faction flag.
    #[serde(rename = "_side")]
    pub side: Option<i64>,
    #[serde(rename = "reqclass")]
    pub req_class: Option<i64>,
    #[serde(rename = "reqrace")]
    pub req_race: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorldQuest {
    pub id: u32,
    #[serde(deserialize_with = "ending::deserialize")]
    pub ending: DateTime<Utc>,
    #[serde(default, rename = "worldquesttype")]
    pub kind: Option<i64>,
    #[serde(default)]
    pub factions: Vec<i64>,
    #[serde(default)]
    pub zones: Vec<u32>,
    #[serde(skip)]
    pub metadata: QuestMetadata,
}

impl WorldQuest {
    /// Metadata name, or `WQ(<id>)` when the page had none for this quest.
    pub fn name(&self) -> String {
        match self.metadata.name.as_deref() {
            Some(n) if !n.is_empty() => s!(n),
            _ => format!("WQ({})", self.id),
        }
    }

    pub fn link(&self) -> String {
        site_url(&format!("{}{}", QUEST_PREFIX, self.id))
    }

    /// Discord timestamp markup rendering as "in 3 hours" etc.
    pub fn relative_until(&self) -> String {
        format!("<t:{}:R>", self.ending.timestamp())
    }

    pub fn zones_joined(&self) -> String {
        self.zones
            .iter()
            .map(|z| z.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Attach metadata to each quest by id; missing entries get the empty record.
pub fn merge(mut quests: Vec<WorldQuest>, metadata: &MetadataMap) -> Vec<WorldQuest> {
    for q in quests.iter_mut() {
        q.metadata = metadata.get(&q.id).cloned().unwrap_or_default();
    }
    quests
}

/// `ending` arrives either as a date-time string or as a unix timestamp.
mod ending {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, de::Error};

    // Above this a number is taken as milliseconds.
    const MS_THRESHOLD: u64 = 20_000_000_000;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let parsed = match Raw::deserialize(d)? {
            Raw::Int(n) => from_unix(n),
            Raw::Float(f) => from_float(f),
            Raw::Text(s) => from_text(s.trim()),
        };
        parsed.ok_or_else(|| D::Error::custom("invalid quest ending timestamp"))
    }

    fn from_unix(n: i64) -> Option<DateTime<Utc>> {
        if n.unsigned_abs() > MS_THRESHOLD {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        }
    }

    // Sub-second digits are dropped; NaN, infinities and anything outside
    // i64 are rejected instead of saturating.
    fn from_float(f: f64) -> Option<DateTime<Utc>> {
        if !f.is_finite() || f.abs() >= i64::MAX as f64 {
            return None;
        }
        from_unix(f.trunc() as i64)
    }

    fn from_text(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(n) = s.parse::<i64>() {
            return from_unix(n);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
