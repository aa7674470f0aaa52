//! Raw profile access.
//!
//! A raw profile is one deeply nested, loosely-structured telemetry
//! document. Any field below the top-level `player` object may be absent;
//! absence always reads as zero / empty / default. Only a missing `player`
//! object is fatal — that document is not a player record at all.

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Raw profile errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile document has no top-level player object")]
    MissingPlayer,

    #[error("failed to parse profile document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A borrowed view of one (possibly absent) raw JSON object.
///
/// All getters are get-or-default: a missing section behaves exactly like
/// an empty one.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    map: Option<&'a Map<String, Value>>,
}

static EMPTY_LIST: &[Value] = &[];

impl<'a> Section<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        Section {
            map: value.and_then(Value::as_object),
        }
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Numeric field, defaulting to 0. Some counters arrive as numeric
    /// strings; those parse too.
    pub fn num(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Integer field, defaulting to 0. Floats truncate.
    pub fn int(&self, key: &str) -> i64 {
        self.num(key) as i64
    }

    /// String field with an explicit default.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// Nested object field; absent reads as an empty section.
    pub fn sub(&self, key: &str) -> Section<'a> {
        Section::from_value(self.get(key))
    }

    /// Array field; absent reads as an empty slice.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_LIST)
    }

    /// Whether a string array field contains `item` (package ownership).
    pub fn list_contains(&self, key: &str, item: &str) -> bool {
        self.list(key).iter().any(|v| v.as_str() == Some(item))
    }

    /// Iterate the section's entries; empty for an absent section.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.into_iter().flat_map(|m| m.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.map.map(Map::is_empty).unwrap_or(true)
    }
}

/// One player's raw telemetry document.
#[derive(Debug, Clone)]
pub struct RawProfile {
    root: Value,
}

impl RawProfile {
    /// Wrap a parsed document. Fails when the top-level `player` object is
    /// absent — the whole-request fatal condition; everything below it is
    /// optional.
    pub fn from_value(root: Value) -> Result<Self, ProfileError> {
        match root.get("player") {
            Some(player) if player.is_object() => Ok(RawProfile { root }),
            _ => Err(ProfileError::MissingPlayer),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ProfileError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// The top-level player object.
    pub fn player(&self) -> Section<'_> {
        Section::from_value(self.root.get("player"))
    }

    /// The raw sub-document of one game, e.g. `"Bedwars"`. Missing games
    /// read as empty sections.
    pub fn game(&self, name: &str) -> Section<'_> {
        self.player().sub("stats").sub(name)
    }

    pub fn uuid(&self) -> String {
        self.player().text("uuid", "")
    }
}

/// Best-effort parser for malformed embedded pseudo-JSON.
///
/// Some raw fields hold structured text with unquoted keys and bare
/// uppercase enum values (`{PartType:ENGINE,Level:2}`). Quotes are inserted
/// by pattern substitution before parsing; anything still unparseable is
/// treated as absent.
pub fn parse_embedded(raw: &str) -> Option<Value> {
    let keys = Regex::new(r"(\w+):").unwrap();
    let quoted_keys = keys.replace_all(raw, "\"$1\":");

    let values = Regex::new(r":([A-Z_]+)([,}])").unwrap();
    let quoted = values.replace_all(&quoted_keys, ":\"$1\"$2");

    match serde_json::from_str::<Value>(&quoted) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "discarding unrepairable embedded document");
            None
        }
    }
}
