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

use npx_tool::{
    NpxError, NpxResult, NpxSettings, NpxStepConfig, NpxTool, ProcessArguments, ProcessRunner,
    ToolLocator,
};

use crate::cmd::args::Cli;

// run_cli is the main CLI entry point.
pub fn run_cli(cli: Cli) -> NpxResult<()> {
    let config = load_config(&cli)?;
    let settings = build_settings(&cli, &config)?;
    let tool = NpxTool::system().with_dry_run(cli.dry_run || config.dry_run);

    match run_step(&tool, &settings, cli.capture_output) {
        Ok(()) => Ok(()),
        Err(NpxError::DryRun(cmd)) => {
            println!("Would have executed: {cmd}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

// load_config reads --config when given, else the defaults.
pub fn load_config(cli: &Cli) -> NpxResult<NpxStepConfig> {
    let Some(path) = &cli.config else {
        return Ok(NpxStepConfig::default());
    };
    tracing::debug!(config = %path.display(), "Loading step configuration");
    NpxStepConfig::from_file(path)
}

// run_step executes the settings, printing captured lines on success.
pub fn run_step<L: ToolLocator, R: ProcessRunner>(
    tool: &NpxTool<L, R>,
    settings: &NpxSettings,
    capture_output: bool,
) -> NpxResult<()> {
    if !capture_output {
        return tool.execute(settings);
    }

    for line in tool.execute_with_output(settings)? {
        println!("{line}");
    }
    Ok(())
}

// build_settings layers the command line on top of the config file.
pub fn build_settings(cli: &Cli, config: &NpxStepConfig) -> NpxResult<NpxSettings> {
    let arguments: ProcessArguments = cli.arguments.iter().map(String::as_str).collect();
    let mut settings = NpxSettings::with_arguments(cli.command.as_str(), arguments);

    config.apply(&mut settings)?;

    for package in &cli.packages {
        settings.add_package(package.as_str())?;
    }
    if cli.ignore_existing {
        settings.ignoring_existing();
    }
    if cli.quiet {
        settings.quiet();
    }
    if let Some(npx_path) = &cli.npx_path {
        settings.with_tool_path(npx_path);
    }
    if let Some(working_directory) = &cli.working_directory {
        settings.with_working_directory(working_directory);
    }
    for pair in &cli.env {
        let (key, value) = parse_env_pair(pair)?;
        settings.with_environment_variable(key, value);
    }

    Ok(settings)
}

// parse_env_pair splits KEY=VALUE; the value may itself contain '='.
pub fn parse_env_pair(pair: &str) -> NpxResult<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key, value)),
        _ => Err(NpxError::InvalidArgument(format!(
            "Environment variable must be KEY=VALUE, got '{pair}'"
        ))),
    }
}

// exit_code maps an error to the process exit code: npx's own code when
// it failed, 1 for everything else.
pub fn exit_code(error: &NpxError) -> i32 {
    error.exit_code().filter(|code| *code != 0).unwrap_or(1)
}
