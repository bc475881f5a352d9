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

//! Run-wide configuration.

use crate::error::{AnalysisError, Result};
use algoperf_core::OptimalPolicy;
use algoperf_ingest::ParseConfig;
use algoperf_report::PresentationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that parameterizes one analysis run.
///
/// Every field has a default, so a JSON file only needs the keys it
/// changes.
///
/// # Examples
///
/// ```
/// use algoperf::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json_str(
///     r#"{"optimal": ["brute-force"], "parse": {"category_tokens": ["sorted"]}, "parallel": false}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.optimal.algorithms().len(), 1);
/// assert_eq!(config.parse.category_tokens, vec!["sorted"]);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Record parsing options.
    pub parse: ParseConfig,
    /// Algorithms whose results define the optimum.
    pub optimal: OptimalPolicy,
    /// Labels, colors and scales for the report.
    pub presentation: PresentationConfig,
    /// Parse sources on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parse: ParseConfig::default(),
            optimal: OptimalPolicy::default(),
            presentation: PresentationConfig::default(),
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AnalysisError::Config {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| AnalysisError::Config {
            path: path.display().to_string(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoperf_ingest::RecordFormat;
    use algoperf_report::Scale;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            AnalysisConfig::from_json_str("{}").unwrap(),
            AnalysisConfig::default()
        );
    }

    #[test]
    fn test_nested_overrides() {
        let config = AnalysisConfig::from_json_str(
            r#"{"parse": {"format": "csv-si", "max_records": 10}, "presentation": {"time_scale": "linear"}}"#,
        )
        .unwrap();
        assert_eq!(config.parse.format, Some(RecordFormat::CsvSiUnits));
        assert_eq!(config.parse.max_records, 10);
        assert_eq!(config.parse.category_tokens, vec!["random", "blocks"]);
        assert_eq!(config.presentation.time_scale, Scale::Linear);
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_json() {
        let err = AnalysisConfig::from_json_str(r#"{"parallel": "yes"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Config { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_json_file("/no/such/algoperf.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/algoperf.json"));
    }
}
