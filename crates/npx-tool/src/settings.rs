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

// src/settings.rs
// NpxSettings holds the choices for a single npx invocation and renders
// them into process arguments in a fixed order:
//
//   --quiet -p "<pkg>"... --ignore-existing <command> <additional args>...

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::args::ProcessArguments;
use crate::error::{NpxError, NpxResult};

const QUIET_FLAG: &str = "--quiet";
const PACKAGE_SWITCH: &str = "-p";
const IGNORE_EXISTING_FLAG: &str = "--ignore-existing";

// NpxSettings are the settings for running npx.
#[derive(Debug, Clone)]
pub struct NpxSettings {
    // command is the npx command (usually a package binary) to run.
    command: String,
    // additional_arguments are passed through after the command.
    additional_arguments: ProcessArguments,
    // packages are requested via repeated -p switches, in first-insertion
    // order with duplicates collapsed.
    packages: Vec<String>,
    ignore_existing: bool,
    quiet: bool,
    // tool_path overrides executable resolution when set.
    tool_path: Option<PathBuf>,
    working_directory: Option<PathBuf>,
    environment: BTreeMap<String, String>,
}

impl NpxSettings {
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_arguments(command, ProcessArguments::new())
    }

    pub fn with_arguments(
        command: impl Into<String>,
        additional_arguments: impl Into<ProcessArguments>,
    ) -> Self {
        Self {
            command: command.into(),
            additional_arguments: additional_arguments.into(),
            packages: Vec::new(),
            ignore_existing: false,
            quiet: false,
            tool_path: None,
            working_directory: None,
            environment: BTreeMap::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn additional_arguments(&self) -> &ProcessArguments {
        &self.additional_arguments
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_ignoring_existing(&self) -> bool {
        self.ignore_existing
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.tool_path.as_deref()
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    // add_package requests a package to be installed before the command
    // runs. Names that are empty or only whitespace are rejected.
    pub fn add_package(&mut self, package_name: impl Into<String>) -> NpxResult<&mut Self> {
        let package_name = package_name.into();
        if package_name.trim().is_empty() {
            return Err(NpxError::InvalidArgument(
                "Package name cannot be null or empty.".to_string(),
            ));
        }

        if !self.packages.contains(&package_name) {
            self.packages.push(package_name);
        }

        Ok(self)
    }

    // ignoring_existing makes npx ignore binaries already on $PATH or in
    // the local project.
    pub fn ignoring_existing(&mut self) -> &mut Self {
        self.ignore_existing = true;
        self
    }

    // quiet suppresses npx's own output.
    pub fn quiet(&mut self) -> &mut Self {
        self.quiet = true;
        self
    }

    pub fn with_tool_path(&mut self, tool_path: impl Into<PathBuf>) -> &mut Self {
        self.tool_path = Some(tool_path.into());
        self
    }

    pub fn with_working_directory(&mut self, working_directory: impl Into<PathBuf>) -> &mut Self {
        self.working_directory = Some(working_directory.into());
        self
    }

    pub fn with_environment_variable(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    // evaluate writes the settings into arguments.
    pub fn evaluate(&self, arguments: &mut ProcessArguments) {
        if self.quiet {
            arguments.append(QUIET_FLAG);
        }

        for package in &self.packages {
            arguments.append_switch_quoted(PACKAGE_SWITCH, package.as_str());
        }

        if self.ignore_existing {
            arguments.append(IGNORE_EXISTING_FLAG);
        }

        if self.command.contains(char::is_whitespace) {
            arguments.append_quoted(self.command.as_str());
        } else {
            arguments.append(self.command.as_str());
        }

        if !self.additional_arguments.is_empty() {
            arguments.extend(&self.additional_arguments);
        }
    }

    // to_arguments renders the settings into a fresh argument list.
    pub fn to_arguments(&self) -> ProcessArguments {
        let mut arguments = ProcessArguments::new();
        self.evaluate(&mut arguments);
        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_only() {
        let settings = NpxSettings::new("semantic-release");
        assert_eq!(settings.to_arguments().render(), "semantic-release");
        assert_eq!(
            settings.to_arguments().to_process_args(),
            vec!["semantic-release"]
        );
    }

    #[test]
    fn test_add_package_rejects_blank_names() {
        let mut settings = NpxSettings::new("command");
        settings.add_package("a package").unwrap();

        for name in ["", " ", "\t\n"] {
            let err = settings.add_package(name).unwrap_err();
            assert!(matches!(err, NpxError::InvalidArgument(_)));
        }

        assert_eq!(settings.packages(), &["a package".to_string()]);
    }

    #[test]
    fn test_packages_keep_first_insertion_order() {
        let mut settings = NpxSettings::new("command");
        settings
            .add_package("zeta")
            .unwrap()
            .add_package("alpha")
            .unwrap()
            .add_package("zeta")
            .unwrap();

        assert_eq!(settings.packages(), &["zeta".to_string(), "alpha".to_string()]);
        assert_eq!(
            settings.to_arguments().render(),
            "-p \"zeta\" -p \"alpha\" command"
        );
    }

    #[test]
    fn test_flag_order_independent_of_call_order() {
        let mut settings = NpxSettings::new("command");
        settings.ignoring_existing().quiet();
        settings.add_package("pkg").unwrap();

        assert_eq!(
            settings.to_arguments().render(),
            "--quiet -p \"pkg\" --ignore-existing command"
        );
    }

    #[test]
    fn test_process_args_strip_package_quotes() {
        let mut settings = NpxSettings::with_arguments("command", "--argument");
        settings.add_package("@semantic-release/git").unwrap();

        assert_eq!(
            settings.to_arguments().to_process_args(),
            vec!["-p", "@semantic-release/git", "command", "--argument"]
        );
    }

    #[test]
    fn test_command_with_whitespace_is_quoted() {
        let settings = NpxSettings::new("my command");
        assert_eq!(settings.to_arguments().render(), "\"my command\"");
        assert_eq!(settings.to_arguments().to_process_args(), vec!["my command"]);
    }

    #[test]
    fn test_evaluate_appends_to_existing_arguments() {
        let mut arguments = ProcessArguments::from("--yes");
        NpxSettings::new("command").evaluate(&mut arguments);
        assert_eq!(arguments.render(), "--yes command");
    }
}
