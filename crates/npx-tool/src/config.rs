/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

// src/config.rs
// NpxStepConfig is the TOML-serializable configuration for an npx build
// step. Every field is optional; values that are present are applied on
// top of an NpxSettings built from the command line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NpxError, NpxResult};
use crate::settings::NpxSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NpxStepConfig {
    // tool_path is an explicit npx executable, skipping PATH lookup.
    pub tool_path: Option<PathBuf>,
    pub working_directory: Option<PathBuf>,
    // packages are added with -p before the command runs.
    pub packages: Vec<String>,
    pub quiet: bool,
    pub ignore_existing: bool,
    pub environment: BTreeMap<String, String>,
    pub dry_run: bool,
}

impl NpxStepConfig {
    // from_file reads an NpxStepConfig from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> NpxResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NpxError::Io)?;
        Self::from_toml(&content)
    }

    // from_toml parses an NpxStepConfig from a TOML string.
    pub fn from_toml(toml_str: &str) -> NpxResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| NpxError::Config(format!("Failed to parse npx step config: {e}")))
    }

    // apply copies the configured values onto settings. Packages go
    // through add_package, so blank names are rejected here too.
    pub fn apply(&self, settings: &mut NpxSettings) -> NpxResult<()> {
        if let Some(tool_path) = &self.tool_path {
            settings.with_tool_path(tool_path);
        }
        if let Some(working_directory) = &self.working_directory {
            settings.with_working_directory(working_directory);
        }
        for package in &self.packages {
            settings.add_package(package.as_str())?;
        }
        if self.quiet {
            settings.quiet();
        }
        if self.ignore_existing {
            settings.ignoring_existing();
        }
        for (key, value) in &self.environment {
            settings.with_environment_variable(key.as_str(), value.as_str());
        }
        Ok(())
    }
}
