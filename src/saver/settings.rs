/*
settings.rs

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

//! Save and restore the key/value settings in the `settings.json` file.

use log::debug;
use serde_json::{Map, Value};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Object to save and restore the settings.
pub struct SaverSettings {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverSettings {
    /// Create a [`SaverSettings`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the settings must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("settings.json");
        debug!("Settings file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the settings.
    ///
    /// Return None if the settings file does not exist.
    pub fn get_settings(&self) -> Result<Option<Map<String, Value>>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Map<String, Value> = serde_json::from_reader(reader)?;
        Ok(Some(settings))
    }

    /// Save the settings.
    pub fn save_settings(&self, settings: &Map<String, Value>) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        Ok(())
    }
}
