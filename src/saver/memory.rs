/*
memory.rs

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

//! In-memory storage.

use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;

use super::Persistence;
use crate::profile::UserData;

/// Storage that keeps the user data and the settings in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    users: HashMap<String, UserData>,
    settings: HashMap<String, Value>,

    /// Number of successful [`Persistence::save_user_data`] calls.
    pub saves: usize,

    /// When set, saving the user data fails.
    pub fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty [`MemoryStore`] object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn load_user_data(&self, username: &str) -> Result<Option<UserData>, Box<dyn Error>> {
        Ok(self.users.get(username).cloned())
    }

    fn save_user_data(&mut self, username: &str, data: &UserData) -> Result<(), Box<dyn Error>> {
        if self.fail_saves {
            return Err(format!("cannot save the data of {username}").into());
        }
        self.users.insert(username.to_string(), data.clone());
        self.saves += 1;
        Ok(())
    }

    fn get_setting(&self, key: &str) -> Option<Value> {
        self.settings.get(key).cloned()
    }

    fn set_setting(&mut self, key: &str, value: Value) -> Result<(), Box<dyn Error>> {
        self.settings.insert(key.to_string(), value);
        Ok(())
    }
}
