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

use npx_tool::{NpxError, NpxResult};

#[test]
fn test_error_display() {
    let error = NpxError::InvalidArgument("Package name cannot be null or empty.".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid argument: Package name cannot be null or empty."
    );
}

#[test]
fn test_tool_not_found_lists_candidates() {
    let error = NpxError::ToolNotFound {
        tool: "Npx".to_string(),
        candidates: vec!["npx.cmd".to_string(), "npx".to_string()],
    };
    assert_eq!(
        error.to_string(),
        "Npx: Could not locate executable (tried: npx.cmd, npx)"
    );
}

#[test]
fn test_exit_code_only_for_execution_failures() {
    let failed = NpxError::ToolExecutionFailed {
        tool: "Npx".to_string(),
        exit_code: 127,
    };
    assert_eq!(failed.exit_code(), Some(127));
    assert_eq!(NpxError::Config("bad".to_string()).exit_code(), None);
}

#[test]
fn test_error_chain() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = NpxError::ProcessStart {
        program: "/usr/bin/npx".to_string(),
        source: io_error,
    };
    assert!(error.to_string().contains("file not found"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_result_type() {
    fn test_function() -> NpxResult<i32> {
        Ok(42)
    }

    assert_eq!(test_function().unwrap(), 42);
}
