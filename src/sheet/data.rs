use super::models::AppData;
use anyhow::{Context, Result};
use serde::Deserialize;

/// The full shortcut reference, embedded at compile time.
static RAW_DATA: &str = include_str!("data.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub apps: Vec<AppData>,
}

impl Dataset {
    /// Looks up an application by id. Unknown ids are not an error; the
    /// caller renders the empty/no-results view instead.
    pub fn app(&self, id: &str) -> Option<&AppData> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn first_app_id(&self) -> Option<&str> {
        self.apps.first().map(|app| app.id.as_str())
    }

    /// Index of an app id in the sidebar ordering.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.apps.iter().position(|app| app.id == id)
    }
}

pub fn load() -> Result<Dataset> {
    toml::from_str(RAW_DATA).context("Failed to parse embedded shortcut data")
}
