use std::io::Read;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::backend::BackendType;
use crate::error::Result;

/// Options for opening a store through a [`Registry`](crate::Registry).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DBConfig {
    pub backend: BackendType,
    pub name: String,
    pub dir: PathBuf,
}

impl DBConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
