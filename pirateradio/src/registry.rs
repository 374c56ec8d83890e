//! Station registry
//!
//! Immutable mapping from a spoken station name to a playable stream URL.
//! Names are stored lowercased and looked up case-insensitively; insertion
//! order is kept so the spoken station list follows the file order.
//!
//! # Example
//!
//! ```
//! use pirateradio::StationRegistry;
//!
//! let registry = StationRegistry::from_json_str(
//!     r#"{"kiss": "https://stream/kiss", "rix fm": "https://stream/rix"}"#,
//! )?;
//!
//! assert_eq!(registry.lookup("KISS")?, "https://stream/kiss");
//! assert_eq!(registry.help_text(), "kiss, or rix fm");
//! # Ok::<(), pirateradio::Error>(())
//! ```

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Station list shipped with the crate
const EMBEDDED_STATIONS: &str = include_str!("radio_stations.json");

/// A registry entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Station {
    /// Lowercased station name
    pub name: String,
    pub stream_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRegistry {
    stations: IndexMap<String, String>,
}

impl StationRegistry {
    /// Build a registry from `(name, url)` pairs
    ///
    /// Names are trimmed and lowercased. Empty names, names that collide after
    /// lowercasing and URLs that do not parse are rejected.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut stations = IndexMap::new();

        for (name, url) in entries {
            let key = normalize(name.as_ref());
            if key.is_empty() {
                return Err(Error::invalid_registry("empty station name"));
            }

            let url = url.as_ref().trim();
            Url::parse(url).map_err(|e| {
                Error::invalid_registry(format!("station '{}': invalid stream URL '{}': {}", key, url, e))
            })?;

            if stations.insert(key.clone(), url.to_string()).is_some() {
                return Err(Error::invalid_registry(format!(
                    "duplicate station name '{}'",
                    key
                )));
            }
        }

        debug!(count = stations.len(), "Station registry built");
        Ok(Self { stations })
    }

    /// Parse a flat JSON object of station name to stream URL
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Self::from_json_map(raw)
    }

    /// Parse a flat JSON object from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_reader(reader)?;
        Self::from_json_map(raw)
    }

    /// Load a station file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let registry = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), stations = registry.len(), "Loaded station registry");
        Ok(registry)
    }

    /// Registry bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_STATIONS)
    }

    fn from_json_map(raw: IndexMap<String, serde_json::Value>) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            match value {
                serde_json::Value::String(url) => entries.push((name, url)),
                other => {
                    return Err(Error::invalid_registry(format!(
                        "station '{}': expected a URL string, found {}",
                        name, other
                    )));
                }
            }
        }
        Self::from_entries(entries)
    }

    /// Stream URL for a station, matched case-insensitively
    pub fn lookup(&self, name: &str) -> Result<&str> {
        self.stations
            .get(&normalize(name))
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(&normalize(name))
    }

    /// Station names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the entries, for serialization
    pub fn stations(&self) -> Vec<Station> {
        self.iter()
            .map(|(name, url)| Station {
                name: name.to_string(),
                stream_url: url.to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Spoken enumeration of the stations: `"a, b, or c"`
    ///
    /// The last name always carries the `or`, so a single station gives
    /// `"or a"`. An empty registry gives an empty string.
    pub fn help_text(&self) -> String {
        let names: Vec<&str> = self.names().collect();
        match names.split_last() {
            None => String::new(),
            Some((last, [])) => format!("or {}", last),
            Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
