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

use npx_tool::{NpxSettings, NpxStepConfig};

#[test]
fn test_empty_config() {
    let config = NpxStepConfig::from_toml("").unwrap();
    assert_eq!(config, NpxStepConfig::default());
    assert!(!config.dry_run);
}

#[test]
fn test_full_config() {
    let toml = r#"
tool_path = "/opt/node/bin/npx"
working_directory = "/src/app"
packages = ["@semantic-release/git", "@semantic-release/changelog"]
quiet = true
ignore_existing = true
dry_run = true

[environment]
CI = "true"
NPM_CONFIG_LOGLEVEL = "warn"
"#;

    let config = NpxStepConfig::from_toml(toml).unwrap();
    assert_eq!(config.tool_path, Some(PathBuf::from("/opt/node/bin/npx")));
    assert_eq!(config.packages.len(), 2);
    assert!(config.dry_run);

    let mut settings = NpxSettings::with_arguments("semantic-release", "--dry-run");
    config.apply(&mut settings).unwrap();

    assert_eq!(
        settings.to_arguments().render(),
        "--quiet -p \"@semantic-release/git\" -p \"@semantic-release/changelog\" --ignore-existing semantic-release --dry-run"
    );
    assert_eq!(
        settings.tool_path(),
        Some(PathBuf::from("/opt/node/bin/npx").as_path())
    );
    assert_eq!(
        settings.working_directory(),
        Some(PathBuf::from("/src/app").as_path())
    );
    assert_eq!(
        settings.environment().get("NPM_CONFIG_LOGLEVEL").map(String::as_str),
        Some("warn")
    );
}

#[test]
fn test_apply_rejects_blank_package() {
    let config = NpxStepConfig::from_toml(r#"packages = ["ok", " "]"#).unwrap();
    let mut settings = NpxSettings::new("command");

    assert!(config.apply(&mut settings).is_err());
    assert_eq!(settings.packages(), &["ok".to_string()]);
}

#[test]
fn test_unknown_field_is_config_error() {
    let err = NpxStepConfig::from_toml("retries = 3").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("npx-step.toml");
    std::fs::write(&path, "quiet = true\n").unwrap();

    let config = NpxStepConfig::from_file(&path).unwrap();
    assert!(config.quiet);

    assert!(NpxStepConfig::from_file(dir.path().join("missing.toml")).is_err());
}
