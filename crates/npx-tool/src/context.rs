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

// src/context.rs
// NpxContext is the caller-facing entry point. It bundles the capabilities
// an invocation needs and offers the npx function family: command only,
// command with raw or configured trailing arguments, and command with a
// settings configurator, each with a variant that captures standard output.

use crate::args::ProcessArguments;
use crate::error::NpxResult;
use crate::settings::NpxSettings;
use crate::tool::{NpxTool, PathLocator, ProcessRunner, SystemProcessRunner, ToolLocator};

pub struct NpxContext<L = PathLocator, R = SystemProcessRunner> {
    tool: NpxTool<L, R>,
}

impl NpxContext {
    pub fn system() -> Self {
        Self::from_tool(NpxTool::system())
    }
}

impl<L: ToolLocator, R: ProcessRunner> NpxContext<L, R> {
    pub fn new(locator: L, runner: R) -> Self {
        Self::from_tool(NpxTool::new(locator, runner))
    }

    pub fn from_tool(tool: NpxTool<L, R>) -> Self {
        Self { tool }
    }

    // npx runs `npx <command>`.
    pub fn npx(&self, command: &str) -> NpxResult<()> {
        self.run(&NpxSettings::new(command))
    }

    pub fn npx_output(&self, command: &str) -> NpxResult<Vec<String>> {
        self.run_output(&NpxSettings::new(command))
    }

    // npx_with_arguments runs `npx <command> <arguments>`.
    pub fn npx_with_arguments(
        &self,
        command: &str,
        arguments: impl Into<ProcessArguments>,
    ) -> NpxResult<()> {
        self.run(&NpxSettings::with_arguments(command, arguments))
    }

    pub fn npx_with_arguments_output(
        &self,
        command: &str,
        arguments: impl Into<ProcessArguments>,
    ) -> NpxResult<Vec<String>> {
        self.run_output(&NpxSettings::with_arguments(command, arguments))
    }

    // npx_configure_arguments builds the trailing arguments with a closure.
    pub fn npx_configure_arguments(
        &self,
        command: &str,
        configure_arguments: impl FnOnce(&mut ProcessArguments),
    ) -> NpxResult<()> {
        self.npx_with_arguments(command, build_arguments(configure_arguments))
    }

    pub fn npx_configure_arguments_output(
        &self,
        command: &str,
        configure_arguments: impl FnOnce(&mut ProcessArguments),
    ) -> NpxResult<Vec<String>> {
        self.npx_with_arguments_output(command, build_arguments(configure_arguments))
    }

    // npx_with_settings lets the caller adjust packages and flags before
    // the invocation. Errors from the configurator abort the call before
    // anything is resolved or started.
    pub fn npx_with_settings(
        &self,
        command: &str,
        arguments: impl Into<ProcessArguments>,
        configure_settings: impl FnOnce(&mut NpxSettings) -> NpxResult<()>,
    ) -> NpxResult<()> {
        let settings = build_settings(command, arguments.into(), configure_settings)?;
        self.run(&settings)
    }

    pub fn npx_with_settings_output(
        &self,
        command: &str,
        arguments: impl Into<ProcessArguments>,
        configure_settings: impl FnOnce(&mut NpxSettings) -> NpxResult<()>,
    ) -> NpxResult<Vec<String>> {
        let settings = build_settings(command, arguments.into(), configure_settings)?;
        self.run_output(&settings)
    }

    // npx_configure builds both the trailing arguments and the settings
    // with closures.
    pub fn npx_configure(
        &self,
        command: &str,
        configure_arguments: impl FnOnce(&mut ProcessArguments),
        configure_settings: impl FnOnce(&mut NpxSettings) -> NpxResult<()>,
    ) -> NpxResult<()> {
        self.npx_with_settings(command, build_arguments(configure_arguments), configure_settings)
    }

    pub fn npx_configure_output(
        &self,
        command: &str,
        configure_arguments: impl FnOnce(&mut ProcessArguments),
        configure_settings: impl FnOnce(&mut NpxSettings) -> NpxResult<()>,
    ) -> NpxResult<Vec<String>> {
        self.npx_with_settings_output(
            command,
            build_arguments(configure_arguments),
            configure_settings,
        )
    }

    pub fn run(&self, settings: &NpxSettings) -> NpxResult<()> {
        self.tool.execute(settings)
    }

    pub fn run_output(&self, settings: &NpxSettings) -> NpxResult<Vec<String>> {
        self.tool.execute_with_output(settings)
    }
}

fn build_arguments(configure_arguments: impl FnOnce(&mut ProcessArguments)) -> ProcessArguments {
    let mut arguments = ProcessArguments::new();
    configure_arguments(&mut arguments);
    arguments
}

fn build_settings(
    command: &str,
    arguments: ProcessArguments,
    configure_settings: impl FnOnce(&mut NpxSettings) -> NpxResult<()>,
) -> NpxResult<NpxSettings> {
    let mut settings = NpxSettings::with_arguments(command, arguments);
    configure_settings(&mut settings)?;
    Ok(settings)
}
