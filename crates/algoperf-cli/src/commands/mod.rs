// algoperf - Algorithm Performance Analysis
//
// Copyright (c) 2025 algoperf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command implementations.

mod analyze;
mod parse;

pub use analyze::{analyze, AnalyzeOptions};
pub use parse::parse;

use crate::error::CliError;
use algoperf::{AlgorithmId, AnalysisConfig, OptimalPolicy};
use std::path::Path;

/// Default maximum source size (1 GB).
/// Can be overridden via the ALGOPERF_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable bounding the size of one source file, in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "ALGOPERF_MAX_FILE_SIZE";

/// Get the maximum file size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_FILE_SIZE`] if the variable is not set or
/// does not hold a number.
pub fn max_file_size() -> u64 {
    max_file_size_override().unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// The size limit from the environment, if set to a number.
fn max_file_size_override() -> Option<u64> {
    parse_size_limit(std::env::var(MAX_FILE_SIZE_ENV).ok().as_deref())
}

fn parse_size_limit(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

/// Loads the configuration file if given, otherwise the defaults.
///
/// The environment size limit replaces `parse.max_source_bytes` only when
/// it is set.
pub(crate) fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    load_config_with_limit(path, max_file_size_override())
}

fn load_config_with_limit(
    path: Option<&Path>,
    size_limit: Option<u64>,
) -> Result<AnalysisConfig, CliError> {
    let mut config = match path {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(limit) = size_limit {
        config.parse.max_source_bytes = limit;
    }
    Ok(config)
}

/// Builds an optimal policy from command-line algorithm names.
pub(crate) fn optimal_policy(names: &[String]) -> Result<OptimalPolicy, CliError> {
    let algorithms = names
        .iter()
        .map(|name| {
            AlgorithmId::new(name)
                .map_err(|e| CliError::invalid_input(format!("--optimal '{}': {}", name, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(OptimalPolicy::new(algorithms))
}

/// Writes `contents` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(contents: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| CliError::io_error(path, e))
        }
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_policy_from_names() {
        let policy =
            optimal_policy(&["Brute-Force".to_string(), "dynamic-programming".to_string()]).unwrap();
        assert_eq!(policy.algorithms().len(), 2);
        assert!(policy.is_optimal(&AlgorithmId::new("brute-force").unwrap()));
    }

    #[test]
    fn test_optimal_policy_rejects_blank() {
        assert!(optimal_policy(&["  ".to_string()]).is_err());
    }

    #[test]
    fn test_load_default_config() {
        let config = load_config_with_limit(None, None).unwrap();
        assert!(config.parallel);
        assert_eq!(config.parse.max_source_bytes, DEFAULT_MAX_FILE_SIZE);
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("Failed to create temp file");
        std::fs::write(file.path(), json).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_config_size_limit_kept_without_env() {
        let file = config_file(r#"{"parse":{"max_source_bytes":100}}"#);
        let config = load_config_with_limit(Some(file.path()), None).unwrap();
        assert_eq!(config.parse.max_source_bytes, 100);
    }

    #[test]
    fn test_env_size_limit_overrides_config() {
        let file = config_file(r#"{"parse":{"max_source_bytes":100}}"#);
        let config = load_config_with_limit(Some(file.path()), Some(4096)).unwrap();
        assert_eq!(config.parse.max_source_bytes, 4096);
    }

    #[test]
    fn test_parse_size_limit() {
        assert_eq!(parse_size_limit(None), None);
        assert_eq!(parse_size_limit(Some(" 2048 ")), Some(2048));
        assert_eq!(parse_size_limit(Some("lots")), None);
    }
}
