/*
profile.rs

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

//! Save and restore the data of each user.
//!
//! Each user has a `<username>.json` file in the `users` subdirectory of the data directory.
//! The saved object is a serialization of the [`UserData`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::profile::UserData;

/// Object to save and restore the user data.
pub struct SaverProfile {
    /// Absolute path to the directory that stores the user files.
    users_dir: PathBuf,
}

impl SaverProfile {
    /// Create a [`SaverProfile`] object.
    ///
    /// The provided [`PathBuf`] is the path to the data directory. The `users` subdirectory is
    /// created if it does not exist.
    pub fn new(mut data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        data_dir.push("users");
        fs::create_dir_all(&data_dir)?;
        debug!("User data directory: {data_dir:?}");
        Ok(Self {
            users_dir: data_dir,
        })
    }

    /// Return the path to the file of the user.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced by `_`. Distinct names can therefore
    /// share a file: `a/b` and `a_b` both map to `a_b.json`.
    fn user_file(&self, username: &str) -> PathBuf {
        let name: String = username
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let name: String = if name.is_empty() || name.starts_with('.') {
            format!("_{name}")
        } else {
            name
        };
        self.users_dir.join(format!("{name}.json"))
    }

    /// Retrieve the [`UserData`] object of the user.
    ///
    /// Return the [`UserData`] object or None if the user file does not exist.
    pub fn get_user_data(&self, username: &str) -> Result<Option<UserData>, Box<dyn Error>> {
        let file: File = match File::open(self.user_file(username)) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let data: UserData = serde_json::from_reader(reader)?;
        Ok(Some(data))
    }

    /// Save the provided [`UserData`] object.
    pub fn save_user_data(&self, username: &str, data: &UserData) -> Result<(), Box<dyn Error>> {
        let path: PathBuf = self.user_file(username);
        debug!("Saving user data to {path:?}");
        let file: File = File::create(path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.flush()?;
        Ok(())
    }

    /// Return the names of the users that have saved data, sorted.
    pub fn list_users(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut users: Vec<String> = Vec::new();
        for entry in fs::read_dir(&self.users_dir)? {
            let path: PathBuf = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Some(stem) = path.file_stem()
            {
                users.push(stem.to_string_lossy().into_owned());
            }
        }
        users.sort();
        Ok(users)
    }

    /// Delete the file of the user.
    pub fn delete_save(&self, username: &str) {
        let _ = remove_file(self.user_file(username));
    }
}
