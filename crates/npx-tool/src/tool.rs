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

// src/tool.rs
// NpxTool resolves the npx executable, runs it with the arguments rendered
// from NpxSettings, and turns the exit code into a result. Executable
// lookup and process execution sit behind the ToolLocator and
// ProcessRunner traits so hosts (and tests) can supply their own.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::args::ProcessArguments;
use crate::error::{NpxError, NpxResult};
use crate::settings::NpxSettings;

// TOOL_NAME is the display name used in errors and logs.
pub const TOOL_NAME: &str = "Npx";

// TOOL_EXECUTABLE_NAMES are tried in order during resolution.
pub const TOOL_EXECUTABLE_NAMES: &[&str] = &["npx.cmd", "npx"];

// LINE_SEPARATOR joins captured output lines for logging.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

// ToolLocator finds an executable given candidate file names.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator {
    // resolve returns the first candidate found, or ToolNotFound.
    fn resolve(&self, tool: &str, candidates: &[&'static str]) -> NpxResult<PathBuf>;
}

// ProcessSettings control how a child process is started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSettings {
    pub redirect_standard_output: bool,
    pub working_directory: Option<PathBuf>,
    pub environment: BTreeMap<String, String>,
}

// ProcessOutput is what a finished child process reports back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    // standard_output holds the captured lines when redirection was
    // requested, in emission order.
    pub standard_output: Option<Vec<String>>,
}

// ProcessRunner starts a program and blocks until it exits.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        settings: &ProcessSettings,
    ) -> NpxResult<ProcessOutput>;
}

// PathLocator resolves executables from PATH using the which crate.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    // search_paths replaces the process PATH when set.
    search_paths: Option<(std::ffi::OsString, PathBuf)>,
}

impl PathLocator {
    pub fn new() -> Self {
        Self::default()
    }

    // in_paths searches the given PATH-style list instead of the
    // process environment, resolving relative entries against cwd.
    pub fn in_paths(paths: impl Into<std::ffi::OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_paths: Some((paths.into(), cwd.into())),
        }
    }

    fn lookup(&self, candidate: &str) -> Option<PathBuf> {
        match &self.search_paths {
            Some((paths, cwd)) => which::which_in(candidate, Some(paths), cwd).ok(),
            None => which::which(candidate).ok(),
        }
    }
}

impl ToolLocator for PathLocator {
    fn resolve(&self, tool: &str, candidates: &[&'static str]) -> NpxResult<PathBuf> {
        for candidate in candidates {
            if let Some(path) = self.lookup(candidate) {
                tracing::debug!("{tool}: resolved '{candidate}' to {}", path.display());
                return Ok(path);
            }
        }

        Err(NpxError::ToolNotFound {
            tool: tool.to_string(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        })
    }
}

// SystemProcessRunner runs programs with std::process::Command. Stdio is
// inherited unless standard output redirection is requested.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        settings: &ProcessSettings,
    ) -> NpxResult<ProcessOutput> {
        let program_name = program.display().to_string();

        let mut command = Command::new(program);
        command.args(arguments.to_process_args());
        command.envs(&settings.environment);
        if let Some(working_directory) = &settings.working_directory {
            command.current_dir(working_directory);
        }
        if settings.redirect_standard_output {
            command.stdout(Stdio::piped());
        }

        let mut child = command.spawn().map_err(|source| NpxError::ProcessStart {
            program: program_name.clone(),
            source,
        })?;

        // Drain stdout before waiting so a chatty child can't fill the pipe.
        let mut captured = None;
        if let Some(stdout) = child.stdout.take() {
            captured = Some(read_standard_output(&mut child, stdout, &program_name)?);
        }

        let status = child.wait().map_err(|source| NpxError::ProcessWait {
            program: program_name,
            source,
        })?;

        Ok(ProcessOutput {
            // A signal-terminated child has no code.
            exit_code: status.code().unwrap_or(-1),
            standard_output: captured,
        })
    }
}

// read_standard_output drains stdout into lines. On a read error the child
// is killed and reaped before the error is returned.
fn read_standard_output(
    child: &mut Child,
    mut stdout: impl Read,
    program: &str,
) -> NpxResult<Vec<String>> {
    let mut raw = Vec::new();
    if let Err(source) = stdout.read_to_end(&mut raw) {
        if let Err(e) = child.kill() {
            tracing::debug!("{TOOL_NAME}: failed to kill '{program}': {e}");
        }
        if let Err(e) = child.wait() {
            tracing::debug!("{TOOL_NAME}: failed to reap '{program}': {e}");
        }
        return Err(NpxError::ProcessWait {
            program: program.to_string(),
            source,
        });
    }

    Ok(String::from_utf8_lossy(&raw)
        .lines()
        .map(str::to_string)
        .collect())
}

// NpxTool executes npx through a locator and a process runner.
pub struct NpxTool<L = PathLocator, R = SystemProcessRunner> {
    locator: L,
    runner: R,
    // dry_run resolves and renders but never starts the process.
    dry_run: bool,
}

impl NpxTool {
    // system creates an NpxTool backed by PATH lookup and real processes.
    pub fn system() -> Self {
        Self::new(PathLocator::new(), SystemProcessRunner)
    }
}

impl Default for NpxTool {
    fn default() -> Self {
        Self::system()
    }
}

impl<L: ToolLocator, R: ProcessRunner> NpxTool<L, R> {
    pub fn new(locator: L, runner: R) -> Self {
        Self {
            locator,
            runner,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    // resolve_executable prefers an explicit tool path from the settings
    // and falls back to the locator.
    pub fn resolve_executable(&self, settings: &NpxSettings) -> NpxResult<PathBuf> {
        if let Some(tool_path) = settings.tool_path() {
            if tool_path.exists() {
                return Ok(tool_path.to_path_buf());
            }
            return Err(NpxError::ToolNotFound {
                tool: TOOL_NAME.to_string(),
                candidates: vec![tool_path.display().to_string()],
            });
        }

        self.locator.resolve(TOOL_NAME, TOOL_EXECUTABLE_NAMES)
    }

    // execute runs npx with stdio inherited from the caller.
    pub fn execute(&self, settings: &NpxSettings) -> NpxResult<()> {
        self.run(settings, false).map(|_| ())
    }

    // execute_with_output runs npx and returns its standard output lines.
    // On failure the captured output is logged once at info level.
    pub fn execute_with_output(&self, settings: &NpxSettings) -> NpxResult<Vec<String>> {
        Ok(self.run(settings, true)?.unwrap_or_default())
    }

    fn run(&self, settings: &NpxSettings, redirect: bool) -> NpxResult<Option<Vec<String>>> {
        let program = self.resolve_executable(settings)?;
        let arguments = settings.to_arguments();

        tracing::debug!(
            "{TOOL_NAME}: executing {} {}",
            program.display(),
            arguments.render_safe()
        );

        if self.dry_run {
            return Err(NpxError::DryRun(format!(
                "{} {}",
                program.display(),
                arguments.render_safe()
            )));
        }

        let process_settings = ProcessSettings {
            redirect_standard_output: redirect,
            working_directory: settings.working_directory().map(Path::to_path_buf),
            environment: settings.environment().clone(),
        };

        let output = self.runner.run(&program, &arguments, &process_settings)?;

        if output.exit_code != 0 {
            if let Some(lines) = &output.standard_output {
                tracing::info!("{}", lines.join(LINE_SEPARATOR));
            }
            return Err(NpxError::ToolExecutionFailed {
                tool: TOOL_NAME.to_string(),
                exit_code: output.exit_code,
            });
        }

        Ok(output.standard_output)
    }
}
