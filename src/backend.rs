//! Backend selection by name.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DBConfig;
use crate::error::{Error, Result};
use crate::mem::MemDB;
use crate::types::DB;

/// Constructs a store given its name and directory. Backends without on-disk
/// state ignore both.
pub type Creator = fn(name: &str, dir: &Path) -> Result<Box<dyn DB>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackendType {
    #[default]
    #[serde(rename = "memdb")]
    MemDB,
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::MemDB => "memdb",
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memdb" => Ok(BackendType::MemDB),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

fn create_mem_db(_name: &str, _dir: &Path) -> Result<Box<dyn DB>> {
    Ok(Box::new(MemDB::new()))
}

/// Maps backend names to their constructors.
pub struct Registry {
    creators: HashMap<String, Creator>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::new();
        registry
            .creators
            .insert(BackendType::MemDB.to_string(), create_mem_db);
        registry
    }
}

impl Registry {
    /// An empty registry. Use `Registry::default()` for one with the
    /// built-in backends.
    pub fn new() -> Self {
        Registry {
            creators: HashMap::new(),
        }
    }

    /// Registers `creator` under `name`. An existing entry is replaced only
    /// when `force` is set.
    pub fn register(&mut self, name: &str, creator: Creator, force: bool) -> Result<()> {
        if !force && self.creators.contains_key(name) {
            return Err(Error::BackendExists(name.to_string()));
        }
        info!(backend = name, force, "registered db backend");
        self.creators.insert(name.to_string(), creator);
        Ok(())
    }

    pub fn create(&self, backend: &str, name: &str, dir: &Path) -> Result<Box<dyn DB>> {
        let creator = self
            .creators
            .get(backend)
            .ok_or_else(|| Error::UnknownBackend(backend.to_string()))?;
        info!(backend, name, dir = %dir.display(), "opening db");
        creator(name, dir)
    }

    pub fn open(&self, config: &DBConfig) -> Result<Box<dyn DB>> {
        self.create(config.backend.as_str(), &config.name, &config.dir)
    }

    pub fn backends(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Opens a store with one of the built-in backends.
pub fn new_db(name: &str, backend: BackendType, dir: &Path) -> Result<Box<dyn DB>> {
    Registry::default().create(backend.as_str(), name, dir)
}
