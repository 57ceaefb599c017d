use std::env;

use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::store::{Collection, JsonStore};

pub const SETTINGS_PATH: &str = "./.settings.json";
pub const SETTINGS_PATH_ENV: &str = "SETTINGS_PATH";

/// Application settings as an open key-value mapping, backed by one JSON
/// object file.
pub struct Setting {
    store: JsonStore<Map<String, Value>>,
    settings: Map<String, Value>,
}

impl Setting {
    pub fn open() -> Result<Self, AppError> {
        let path = env::var(SETTINGS_PATH_ENV).unwrap_or(SETTINGS_PATH.to_string());
        Self::open_at(&path)
    }

    pub fn open_at(path: &str) -> Result<Self, AppError> {
        let mut setting = Self {
            store: JsonStore::new(path, Map::new()),
            settings: Map::new(),
        };
        setting.reload()?;
        Ok(setting)
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Insert-or-overwrite for one key, persisted immediately.
    pub fn update_setting(&mut self, key: &str, value: impl Into<Value>) -> Result<(), AppError> {
        self.settings.insert(key.to_string(), value.into());
        self.persist()?;

        info!(key, "setting updated");
        Ok(())
    }

    /// Returns `None` for a missing key, never an error.
    pub fn get_config(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

impl Collection for Setting {
    type Document = Map<String, Value>;

    fn store(&self) -> &JsonStore<Map<String, Value>> {
        &self.store
    }

    fn post_load(&mut self, document: Map<String, Value>) -> Result<(), AppError> {
        self.settings = document;
        Ok(())
    }

    fn pre_save(&self) -> Result<Map<String, Value>, AppError> {
        Ok(self.settings.clone())
    }
}
