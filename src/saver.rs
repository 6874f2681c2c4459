/*
saver.rs

Copyright 2025 Hervé Quatremain

This file is part of Brainplay.

Brainplay is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Brainplay is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Brainplay. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Persist the user data and the settings.
//!
//! The [`Persistence`] trait is the only way the rest of the crate reaches the storage.
//! Two implementations are provided:
//!
//! * [`FileStore`] saves JSON files in the data directory:
//!   `<data_dir>/users/<username>.json` for each user (see [`profile`]), and
//!   `<data_dir>/settings.json` for the settings (see [`settings`]).
//! * [`memory::MemoryStore`] keeps everything in memory, for the tests and the autoplay mode.

pub mod memory;
pub mod profile;
pub mod settings;

use log::{debug, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::path::PathBuf;

use crate::profile::UserData;

/// Storage for the user data and the key/value settings.
pub trait Persistence {
    /// Return the data of the user, or `None` if nothing was saved for that user yet.
    fn load_user_data(&self, username: &str) -> Result<Option<UserData>, Box<dyn Error>>;

    /// Save the data of the user.
    fn save_user_data(&mut self, username: &str, data: &UserData) -> Result<(), Box<dyn Error>>;

    /// Return the value of a setting.
    fn get_setting(&self, key: &str) -> Option<Value>;

    /// Change the value of a setting.
    fn set_setting(&mut self, key: &str, value: Value) -> Result<(), Box<dyn Error>>;

    /// Return the boolean value of a setting, or the default value if the setting is not set or
    /// is not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_setting(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }
}

/// File-based storage.
pub struct FileStore {
    profiles: profile::SaverProfile,
    settings_file: settings::SaverSettings,

    /// Settings loaded at creation time and updated by [`FileStore::set_setting`].
    settings: Map<String, Value>,
}

impl FileStore {
    /// Create a [`FileStore`] object for the given data directory.
    ///
    /// The directory and its `users` subdirectory are created if needed.
    ///
    /// # Errors
    ///
    /// The method returns an error if the directories cannot be created.
    /// An unreadable settings file is not an error: the default settings are used instead.
    pub fn new(data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        debug!("Data directory: {data_dir:?}");
        let profiles: profile::SaverProfile = profile::SaverProfile::new(data_dir.clone())?;
        let settings_file: settings::SaverSettings = settings::SaverSettings::new(data_dir);
        let settings: Map<String, Value> = match settings_file.get_settings() {
            Ok(Some(s)) => s,
            Ok(None) => Map::new(),
            Err(e) => {
                warn!("Cannot read the settings, using the defaults: {e}");
                Map::new()
            }
        };
        Ok(Self {
            profiles,
            settings_file,
            settings,
        })
    }

    /// Return the names of the users that have saved data.
    pub fn list_users(&self) -> Result<Vec<String>, Box<dyn Error>> {
        self.profiles.list_users()
    }
}

impl Persistence for FileStore {
    fn load_user_data(&self, username: &str) -> Result<Option<UserData>, Box<dyn Error>> {
        self.profiles.get_user_data(username)
    }

    fn save_user_data(&mut self, username: &str, data: &UserData) -> Result<(), Box<dyn Error>> {
        self.profiles.save_user_data(username, data)
    }

    fn get_setting(&self, key: &str) -> Option<Value> {
        self.settings.get(key).cloned()
    }

    fn set_setting(&mut self, key: &str, value: Value) -> Result<(), Box<dyn Error>> {
        self.settings.insert(key.to_string(), value);
        self.settings_file.save_settings(&self.settings)
    }
}
