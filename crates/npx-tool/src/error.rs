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

use std::io;

use thiserror::Error;

// NpxError is the error type for building and running npx invocations.
#[derive(Error, Debug)]
pub enum NpxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{tool}: Could not locate executable (tried: {})", candidates.join(", "))]
    ToolNotFound {
        tool: String,
        candidates: Vec<String>,
    },

    #[error("{tool}: Process returned an error (exit code {exit_code}).")]
    ToolExecutionFailed { tool: String, exit_code: i32 },

    #[error("Failed to start '{program}': {source}")]
    ProcessStart {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed waiting for '{program}': {source}")]
    ProcessWait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dry run - would have executed: {0}")]
    DryRun(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl NpxError {
    // exit_code returns the child's exit code for execution failures.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            NpxError::ToolExecutionFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

// NpxResult is a result type alias for operations that
// can fail with NpxError.
pub type NpxResult<T> = Result<T, NpxError>;
