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

//! Chart dataset assembly.
//!
//! Turns aggregated results into named, renderer-ready datasets:
//!
//! | Dataset | x | y | Series |
//! |---------|---|---|--------|
//! | `time_vs_size` | input size | mean time (ms) | algorithm |
//! | `memory_vs_size` | input size | mean memory (KB) | algorithm with memory data |
//! | `optimal_vs_size` | input size | optimal result | category |
//! | `time_vs_category` | input size | mean time (ms) | category |
//! | `quality_vs_size` | input size | % of optimal | heuristic (and category) |
//! | `efficiency` | mean time (ms) | result | algorithm |
//!
//! Labels, colors, scales and titles come from a [`PresentationConfig`].
//! Rendering is left to the consumer of the serialized [`Report`].
//!
//! Some charts are views of one dataset rather than datasets of their own.
//! Renderers derive them from `time_vs_size`:
//!
//! - a linear and a log-scale time chart, by drawing the same series with
//!   both scales (the dataset's `y_axis.scale` is only the preferred one);
//! - one performance chart per algorithm, by picking a single series (each
//!   series carries its `algorithm`).

mod assemble;
mod config;
mod types;

pub use assemble::ReportAssembler;
pub use config::{AlgorithmStyle, PresentationConfig, DEFAULT_LOG_FLOOR, FALLBACK_COLOR};
pub use types::{AxisSpec, ChartDataset, Point, Report, ReportAxis, Scale, Series};
