//! Dataset models
//!
//! Mirrors the layout of `db.json`. The two top-level collections must be
//! arrays of objects; anything else is a structural error. Inside a record
//! every field is optional: a missing field, `null`, or a value of the wrong
//! type degrades to the empty default instead of failing the load. Array
//! elements that do not parse are skipped by the checks and kept verbatim.
//! Fields this crate does not model are kept in `extra` so that rewriting the
//! file never drops data.

use super::lenient::{lenient, LenientVec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of `db.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub festivals: Vec<Festival>,

    #[serde(default)]
    pub bands: Vec<Band>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    /// Lineup as free-text band names; not references into `Dataset::bands`
    #[serde(default, deserialize_with = "lenient")]
    pub bands: LenientVec<LineupEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One lineup entry: either a bare name or a `{ "name", "key" }` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineupEntry {
    Name(String),
    Ref(BandRef),
}

impl LineupEntry {
    pub fn name(&self) -> &str {
        match self {
            LineupEntry::Name(name) => name,
            LineupEntry::Ref(band_ref) => &band_ref.name,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            LineupEntry::Name(_) => None,
            LineupEntry::Ref(band_ref) => band_ref.key.as_deref(),
        }
    }
}

impl From<&str> for LineupEntry {
    fn from(name: &str) -> Self {
        LineupEntry::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandRef {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Band {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub genres: LenientVec<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub members: LenientVec<Member>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub role: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    /// Total number of lineup entries across all festivals
    pub fn lineup_len(&self) -> usize {
        self.festivals.iter().map(|f| f.bands.len()).sum()
    }
}

impl Festival {
    pub fn new(name: &str, lineup: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            bands: lineup.iter().map(|n| LineupEntry::from(*n)).collect(),
            extra: Map::new(),
        }
    }
}

impl Band {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_member(mut self, name: &str, role: &str) -> Self {
        self.members.push(Member {
            name: name.to_string(),
            role: role.to_string(),
            extra: Map::new(),
        });
        self
    }
}
