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

//! Canonical measurement model, aggregation and quality metrics.
//!
//! This crate holds the parts of the analysis pipeline that have invariants
//! worth getting right:
//!
//! - [`Measurement`] and [`Dataset`]: the single schema every raw record
//!   format converges on
//! - [`Aggregation`]: per-(algorithm, size, category) summaries
//! - [`OptimalTable`]: best known result per (size, category), taken from
//!   the algorithms named by an [`OptimalPolicy`]
//! - [`QualityReport`]: heuristic results as a percentage of the optimum
//!
//! Phases run in a fixed order: dataset → aggregation → optimal table →
//! quality.
//!
//! # Examples
//!
//! ```
//! use algoperf_core::{
//!     Aggregation, AlgorithmId, Dataset, InputCategory, Measurement, OptimalPolicy,
//!     OptimalTable, QualityReport,
//! };
//!
//! let random = InputCategory::new("random").unwrap();
//! let mut dataset = Dataset::new();
//! dataset.push(Measurement::new(AlgorithmId::new("dynamic-programming").unwrap(), 50, random.clone(), 3.1, Some(3584.0), 400.0).unwrap());
//! dataset.push(Measurement::new(AlgorithmId::new("greedy2").unwrap(), 50, random, 0.2, None, 300.0).unwrap());
//!
//! let policy = OptimalPolicy::default();
//! let aggregation = Aggregation::from_dataset(&dataset);
//! let optimal = OptimalTable::from_aggregation(&aggregation, &policy);
//! let quality = QualityReport::compute(&aggregation, &optimal, &policy);
//!
//! assert_eq!(quality.records[0].quality_pct, 75.0);
//! ```

mod aggregate;
mod dataset;
mod diagnostics;
mod error;
mod measurement;
mod quality;

pub use aggregate::{Aggregation, GroupSummary, OptimalEntry, OptimalPolicy, OptimalTable};
pub use dataset::Dataset;
pub use diagnostics::{Diagnostics, SourceFailure};
pub use error::{CoreError, Result};
pub use measurement::{AlgorithmId, BaselineKey, GroupKey, InputCategory, Measurement};
pub use quality::{QualityRecord, QualityReport};
