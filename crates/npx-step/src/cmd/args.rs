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

use std::path::PathBuf;

use clap::Parser;

// Cli is the npx-step command line:
//
//   npx-step [OPTIONS] <COMMAND> [-- <ARGUMENTS>...]
#[derive(Debug, Parser)]
#[command(
    name = "npx-step",
    about = "Run an npx command as a build step",
    version
)]
pub struct Cli {
    /// The command for npx to run (usually a package binary, e.g. semantic-release)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments passed through to the command
    #[arg(last = true, value_name = "ARGUMENTS")]
    pub arguments: Vec<String>,

    /// Package to install before running the command (repeatable)
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Ignore binaries already on $PATH or in the local project
    #[arg(long)]
    pub ignore_existing: bool,

    /// Suppress npx's own output
    #[arg(long)]
    pub quiet: bool,

    /// Capture the command's standard output and print it after it succeeds
    #[arg(long)]
    pub capture_output: bool,

    /// Explicit path to the npx executable (skips PATH lookup)
    #[arg(long, value_name = "PATH", env = "NPX_STEP_NPX_PATH")]
    pub npx_path: Option<PathBuf>,

    /// Working directory for npx
    #[arg(short = 'C', long, value_name = "DIR")]
    pub working_directory: Option<PathBuf>,

    /// Extra environment variable for npx (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// TOML file with step settings; command-line flags are applied after it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show what would be executed without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter directive (e.g. info, npx_tool=debug)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}
