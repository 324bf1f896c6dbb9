use crate::error::Error;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

pub const DEBUG_DUMP_REQUESTS_RESPONSES: &str = "DEBUG_DUMP_REQUESTS_RESPONSES";
pub const DUMP_DATA_DIR: &str = "DUMP_DATA_DIR";

/// Read-only view over the host's settings.
pub trait Settings {
    fn get(&self, name: &str) -> Option<String>;

    /// Unset means `false`. Anything other than `1`/`0`/`true`/`false` is rejected.
    fn get_bool(&self, name: &str) -> Result<bool, Error> {
        match self.get(name) {
            None => Ok(false),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                _ => Err(Error::InvalidSetting(name.into())),
            },
        }
    }
}

impl Settings for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Flat `NAME = value` settings read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TomlSettings {
    values: toml::Table,
}

impl TomlSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        Ok(toml::from_str(contents)?)
    }
}

impl Settings for TomlSettings {
    fn get(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            toml::Value::String(value) => Some(value.clone()),
            toml::Value::Boolean(value) => Some(value.to_string()),
            toml::Value::Integer(value) => Some(value.to_string()),
            toml::Value::Float(value) => Some(value.to_string()),
            _ => None,
        }
    }
}
