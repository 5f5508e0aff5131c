use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::models::{FilterState, FriendFilter, NotificationCategory};

/// Logical setting name for the notification category tab.
pub const NOTIFICATION_FILTER_STATE: &str = "notification_filter_state";
/// Logical setting name for the friends-only narrowing.
pub const FRIEND_FILTER: &str = "friend_filter";

/// Derive the stored key for a per-user setting.
///
/// Settings are namespaced by pubkey so multiple accounts on one device
/// never collide.
pub fn pk_setting_key(pubkey: &str, name: &str) -> String {
    format!("{}.{}", pubkey, name)
}

/// On-disk shape of `settings.json`: a flat string-to-string map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(String),
    #[error("failed to parse settings: {0}")]
    Parse(String),
}

/// Per-user string settings persisted to `<data_dir>/settings.json`.
///
/// Loading falls back to an empty map on any failure (check `last_error()`);
/// saves are write-through and best-effort. Two instances over the same file
/// are not coordinated: last write wins.
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
    last_error: Option<SettingsError>,
}

impl SettingsStore {
    pub fn open(config: &CoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        let path = config.data_dir.join("settings.json");
        let (settings, last_error) = Self::load_from_file(&path);
        Ok(Self {
            path,
            settings,
            last_error,
        })
    }

    fn load_from_file(path: &PathBuf) -> (Settings, Option<SettingsError>) {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => (settings, None),
                Err(e) => {
                    tracing::warn!("settings: unreadable {}, starting empty: {}", path.display(), e);
                    (Settings::default(), Some(SettingsError::Parse(e.to_string())))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Settings::default(), None),
            Err(e) => (Settings::default(), Some(SettingsError::Read(e.to_string()))),
        }
    }

    fn save_to_file(&self) {
        if let Ok(json) = serde_json::to_string_pretty(&self.settings) {
            if let Err(e) = fs::write(&self.path, json) {
                tracing::warn!("settings: failed to write {}: {}", self.path.display(), e);
            }
        }
    }

    /// Loading error from `open()`, if any. Runtime reads never fail.
    pub fn last_error(&self) -> Option<&SettingsError> {
        self.last_error.as_ref()
    }

    pub fn get(&self, pubkey: &str, name: &str) -> Option<&str> {
        self.settings
            .values
            .get(&pk_setting_key(pubkey, name))
            .map(String::as_str)
    }

    pub fn set(&mut self, pubkey: &str, name: &str, value: &str) {
        self.settings
            .values
            .insert(pk_setting_key(pubkey, name), value.to_string());
        self.save_to_file();
    }

    /// Read both filter axes for `pubkey`. Each axis independently falls
    /// back to `All` on a missing or unrecognized stored value.
    pub fn load_filter_state(&self, pubkey: &str) -> FilterState {
        let category = self
            .get(pubkey, NOTIFICATION_FILTER_STATE)
            .and_then(NotificationCategory::parse)
            .unwrap_or_default();
        let friend_filter = self
            .get(pubkey, FRIEND_FILTER)
            .and_then(FriendFilter::parse)
            .unwrap_or_default();
        FilterState::new(category, friend_filter)
    }

    pub fn save_category(&mut self, pubkey: &str, category: NotificationCategory) {
        self.set(pubkey, NOTIFICATION_FILTER_STATE, category.as_str());
    }

    pub fn save_friend_filter(&mut self, pubkey: &str, filter: FriendFilter) {
        self.set(pubkey, FRIEND_FILTER, filter.as_str());
    }
}
