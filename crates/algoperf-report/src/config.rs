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

//! Presentation hints passed to the report assembler.

use crate::types::{ReportAxis, Scale};
use algoperf_core::AlgorithmId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default log-axis floor in milliseconds.
pub const DEFAULT_LOG_FLOOR: f64 = 0.001;

/// Color used for algorithms without a configured style.
pub const FALLBACK_COLOR: &str = "black";

/// Legend label and color for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmStyle {
    /// Legend label.
    pub label: String,
    /// Color name or hex code.
    pub color: String,
}

impl AlgorithmStyle {
    /// Creates a style.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// How datasets should be labelled, colored and scaled.
///
/// Passed explicitly to [`ReportAssembler`](crate::ReportAssembler); nothing
/// is read from global state.
///
/// # Examples
///
/// ```
/// use algoperf_core::AlgorithmId;
/// use algoperf_report::{PresentationConfig, Scale};
///
/// let config = PresentationConfig::default();
/// let greedy1 = AlgorithmId::new("greedy1").unwrap();
/// assert_eq!(config.label(&greedy1), "Greedy 1");
/// assert_eq!(config.color(&greedy1), "blue");
/// assert_eq!(config.time_scale, Scale::Log);
///
/// let custom = AlgorithmId::new("simulated-annealing").unwrap();
/// assert_eq!(config.label(&custom), "simulated-annealing");
/// assert_eq!(config.color(&custom), "black");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Style per algorithm identifier.
    pub styles: BTreeMap<AlgorithmId, AlgorithmStyle>,
    /// Scale of the time axes.
    pub time_scale: Scale,
    /// Floor hint for log-scaled time axes, in milliseconds.
    pub log_floor: f64,
    /// Chart title overrides.
    pub titles: BTreeMap<ReportAxis, String>,
    /// Algorithm shown in the per-category time dataset; all when absent.
    pub category_algorithm: Option<AlgorithmId>,
    /// Whether to assemble the efficiency scatter.
    pub include_efficiency: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        let styles = [
            (AlgorithmId::BRUTE_FORCE, "Brute Force", "red"),
            (AlgorithmId::GREEDY1, "Greedy 1", "blue"),
            (AlgorithmId::GREEDY2, "Greedy 2", "green"),
            (AlgorithmId::DYNAMIC_PROGRAMMING, "Dynamic Programming", "purple"),
        ]
        .into_iter()
        .filter_map(|(id, label, color)| {
            AlgorithmId::new(id)
                .ok()
                .map(|id| (id, AlgorithmStyle::new(label, color)))
        })
        .collect();

        Self {
            styles,
            time_scale: Scale::Log,
            log_floor: DEFAULT_LOG_FLOOR,
            titles: BTreeMap::new(),
            category_algorithm: None,
            include_efficiency: true,
        }
    }
}

impl PresentationConfig {
    /// Legend label for an algorithm; the identifier itself when unstyled.
    pub fn label(&self, algorithm: &AlgorithmId) -> String {
        self.styles
            .get(algorithm)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| algorithm.to_string())
    }

    /// Color for an algorithm; [`FALLBACK_COLOR`] when unstyled.
    pub fn color(&self, algorithm: &AlgorithmId) -> String {
        self.styles
            .get(algorithm)
            .map(|s| s.color.clone())
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    }

    /// Chart title for an axis.
    pub fn title(&self, axis: ReportAxis) -> String {
        self.titles
            .get(&axis)
            .cloned()
            .unwrap_or_else(|| axis.default_title().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let config = PresentationConfig::default();
        assert_eq!(config.styles.len(), 4);
        let dp = AlgorithmId::new("dynamic-programming").unwrap();
        assert_eq!(config.color(&dp), "purple");
        assert_eq!(config.log_floor, 0.001);
        assert!(config.include_efficiency);
    }

    #[test]
    fn test_title_override() {
        let mut config = PresentationConfig::default();
        config
            .titles
            .insert(ReportAxis::TimeVsSize, "Tiempos".to_string());
        assert_eq!(config.title(ReportAxis::TimeVsSize), "Tiempos");
        assert_eq!(
            config.title(ReportAxis::MemoryVsSize),
            "Memory Usage Comparison"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PresentationConfig =
            serde_json::from_str(r#"{"time_scale":"linear","category_algorithm":"greedy2"}"#)
                .unwrap();
        assert_eq!(config.time_scale, Scale::Linear);
        assert_eq!(config.category_algorithm.unwrap().as_str(), "greedy2");
        assert_eq!(config.styles.len(), 4);
    }

    #[test]
    fn test_styles_from_json() {
        let config: PresentationConfig = serde_json::from_str(
            r##"{"styles":{"Greedy1":{"label":"G1","color":"#00f"}},"titles":{"efficiency":"Eff"}}"##,
        )
        .unwrap();
        let greedy1 = AlgorithmId::new("greedy1").unwrap();
        assert_eq!(config.label(&greedy1), "G1");
        assert_eq!(config.title(ReportAxis::Efficiency), "Eff");
    }
}
