// SPDX-License-Identifier: Apache-2.0

//! File-backed key/value store for user configuration.
//!
//! The whole file is read once by [`ConfigStore::load`] and rewritten by
//! [`ConfigStore::write_back`]. Mutations in between are in-memory only, so a
//! batch of related upserts (domain, email, token) lands in a single write.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::JiraError;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Integer scalar (ids).
    Int(i64),
    /// String scalar (domain, email, token).
    Text(String),
    /// List of integer ids.
    List(Vec<i64>),
    /// Nested mapping, kept so that unknown sections survive a write-back.
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Returns the integer value, parsing text when it holds a number.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            ConfigValue::Text(s) => s.trim().parse().ok(),
            ConfigValue::List(_) | ConfigValue::Map(_) => None,
        }
    }

    /// Returns the list of ids, or an empty slice for scalars.
    #[must_use]
    pub fn as_list(&self) -> &[i64] {
        match self {
            ConfigValue::List(ids) => ids,
            _ => &[],
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::List(ids) => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", ids.join(", "))
            }
            ConfigValue::Map(entries) => {
                let entries: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<Vec<i64>> for ConfigValue {
    fn from(value: Vec<i64>) -> Self {
        ConfigValue::List(value)
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, a list of integers or a mapping")
    }

    // `key:` and `key: ~` load as an empty string.
    fn visit_unit<E: de::Error>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<ConfigValue, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ConfigValue, D::Error> {
        ConfigValue::deserialize(deserializer)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigValue, E> {
        i64::try_from(v)
            .map(ConfigValue::Int)
            .map_err(|_| E::custom(format!("integer {v} is out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigValue, A::Error> {
        let mut ids = Vec::new();
        while let Some(id) = seq.next_element::<i64>()? {
            ids.push(id);
        }
        Ok(ConfigValue::List(ids))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ConfigValue, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            entries.insert(key, value);
        }
        Ok(ConfigValue::Map(entries))
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

/// Persistent key/value configuration backed by a YAML file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigStore {
    /// Creates an empty store that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Loads the store from `path`.
    ///
    /// A missing or empty file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `JiraError::Io` if the file exists but cannot be read, and
    /// `JiraError::Config` if it is not a YAML mapping of supported values.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, JiraError> {
        let path = path.into();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, starting empty");
                return Ok(Self::new(path));
            }
            Err(source) => return Err(JiraError::Io { path, source }),
        };

        if contents.trim().is_empty() {
            return Ok(Self::new(path));
        }

        let entries: BTreeMap<String, ConfigValue> =
            serde_saphyr::from_str(&contents).map_err(|e| JiraError::Config {
                message: format!("failed to parse '{}': {e}", path.display()),
            })?;
        debug!(path = %path.display(), keys = entries.len(), "Config file loaded");

        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Sets `key` in memory. Call [`write_back`](Self::write_back) to persist.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Returns true if `key` was loaded from the file or set in this process.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Serializes the whole store to its backing file.
    ///
    /// The parent directory must already exist.
    pub fn write_back(&self) -> Result<(), JiraError> {
        let contents = serde_saphyr::to_string(&self.entries).map_err(|e| JiraError::Config {
            message: format!("failed to serialize config: {e}"),
        })?;

        fs::write(&self.path, contents).map_err(|source| JiraError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "Config file written");

        Ok(())
    }
}
