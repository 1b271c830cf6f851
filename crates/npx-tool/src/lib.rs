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

// src/lib.rs
// Library for running npx as a build step: typed settings, argument
// rendering, executable resolution and process invocation.
pub mod args;
pub mod config;
pub mod context;
pub mod error;
pub mod settings;
pub mod tool;

// Re-export main types for convenience
pub use args::{ProcessArgument, ProcessArguments};
pub use config::NpxStepConfig;
pub use context::NpxContext;
pub use error::{NpxError, NpxResult};
pub use settings::NpxSettings;
pub use tool::{
    LINE_SEPARATOR, NpxTool, PathLocator, ProcessOutput, ProcessRunner, ProcessSettings,
    SystemProcessRunner, TOOL_EXECUTABLE_NAMES, TOOL_NAME, ToolLocator,
};
