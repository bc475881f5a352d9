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

//! Report types handed to the chart renderer.

use algoperf_core::{AlgorithmId, InputCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The comparison a dataset shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAxis {
    /// Mean time against input size, one series per algorithm.
    TimeVsSize,
    /// Mean memory against input size, one series per algorithm.
    MemoryVsSize,
    /// Optimal value against input size, one series per category.
    OptimalVsSize,
    /// Mean time against input size, one series per input category.
    TimeVsCategory,
    /// Quality percentage against input size, one series per heuristic.
    QualityVsSize,
    /// Representative result against mean time, one series per algorithm.
    Efficiency,
}

impl ReportAxis {
    /// Every axis, in report order.
    pub const ALL: [ReportAxis; 6] = [
        ReportAxis::TimeVsSize,
        ReportAxis::MemoryVsSize,
        ReportAxis::OptimalVsSize,
        ReportAxis::TimeVsCategory,
        ReportAxis::QualityVsSize,
        ReportAxis::Efficiency,
    ];

    /// Stable dataset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportAxis::TimeVsSize => "time_vs_size",
            ReportAxis::MemoryVsSize => "memory_vs_size",
            ReportAxis::OptimalVsSize => "optimal_vs_size",
            ReportAxis::TimeVsCategory => "time_vs_category",
            ReportAxis::QualityVsSize => "quality_vs_size",
            ReportAxis::Efficiency => "efficiency",
        }
    }

    /// Default chart title.
    pub fn default_title(&self) -> &'static str {
        match self {
            ReportAxis::TimeVsSize => "Execution Time Comparison",
            ReportAxis::MemoryVsSize => "Memory Usage Comparison",
            ReportAxis::OptimalVsSize => "Optimal Result by Input Size",
            ReportAxis::TimeVsCategory => "Execution Time by Input Category",
            ReportAxis::QualityVsSize => "Solution Quality Relative to Optimal",
            ReportAxis::Efficiency => "Efficiency: Result vs Time",
        }
    }

    pub(crate) fn x_title(&self) -> &'static str {
        match self {
            ReportAxis::Efficiency => "Execution time (ms)",
            _ => "Input size (n)",
        }
    }

    pub(crate) fn y_title(&self) -> &'static str {
        match self {
            ReportAxis::TimeVsSize | ReportAxis::TimeVsCategory => "Execution time (ms)",
            ReportAxis::MemoryVsSize => "Memory usage (KB)",
            ReportAxis::OptimalVsSize => "Optimal result",
            ReportAxis::QualityVsSize => "Quality (% of optimal)",
            ReportAxis::Efficiency => "Result",
        }
    }
}

impl fmt::Display for ReportAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis scale hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Linear axis.
    #[default]
    Linear,
    /// Logarithmic axis.
    Log,
}

/// One axis of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Axis title.
    pub title: String,
    /// Scale hint.
    pub scale: Scale,
    /// Smallest value worth drawing on a log axis; renderers clamp below it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,
}

impl AxisSpec {
    /// A linear axis.
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scale: Scale::Linear,
            floor: None,
        }
    }
}

/// A chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A labelled sequence of points, ordered by `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Algorithm the series belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmId>,
    /// Input category the series belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<InputCategory>,
    /// Color hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Points with ascending `x`.
    pub points: Vec<Point>,
}

/// A named chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Which comparison this is.
    pub axis: ReportAxis,
    /// Stable dataset name.
    pub name: String,
    /// Chart title.
    pub title: String,
    /// Horizontal axis.
    pub x_axis: AxisSpec,
    /// Vertical axis.
    pub y_axis: AxisSpec,
    /// Series in legend order.
    pub series: Vec<Series>,
}

impl ChartDataset {
    /// Finds a series by label.
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Every dataset produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Datasets in axis order.
    pub datasets: Vec<ChartDataset>,
}

impl Report {
    /// Finds the dataset for an axis.
    pub fn dataset(&self, axis: ReportAxis) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.axis == axis)
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
