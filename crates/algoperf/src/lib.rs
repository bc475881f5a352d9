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

//! # algoperf - Algorithm Performance Analysis
//!
//! algoperf turns raw benchmark measurements of competing optimization
//! algorithms (exhaustive search, greedy heuristics, dynamic programming)
//! into one comparative analysis: execution time, memory footprint and
//! solution quality as functions of input size and input shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use algoperf::{discover_sources, AnalysisConfig, Analyzer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = discover_sources("results/")?;
//! let analysis = Analyzer::new(AnalysisConfig::default()).analyze_paths(&sources)?;
//!
//! println!("{}", analysis.diagnostics);
//! std::fs::write("report.json", analysis.report.to_json_pretty()?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: canonical measurements, aggregation, optimal table, quality
//! - [`ingest`]: raw record formats and parsing
//! - [`report`]: chart datasets and presentation hints

mod config;
mod error;
mod pipeline;
mod sources;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pipeline::{Analysis, Analyzer};
pub use sources::{discover_sources, SOURCE_EXTENSIONS};

pub use algoperf_core::{
    AlgorithmId, Dataset, Diagnostics, InputCategory, Measurement, OptimalPolicy, QualityRecord,
};
pub use algoperf_ingest::{ParseConfig, RecordFormat};
pub use algoperf_report::{PresentationConfig, Report, ReportAxis};

pub mod core {
    //! Canonical measurement model, aggregation and quality metrics
    pub use algoperf_core::{
        Aggregation, AlgorithmId, BaselineKey, CoreError, Dataset, Diagnostics, GroupKey,
        GroupSummary, InputCategory, Measurement, OptimalEntry, OptimalPolicy, OptimalTable,
        QualityRecord, QualityReport, SourceFailure,
    };
}

pub mod ingest {
    //! Raw record parsing
    pub use algoperf_ingest::{
        decoder_for, detect_format, parse_path, parse_reader, parse_str, CategoryMatcher,
        IngestError, ParseConfig, ParsedSource, RecordDecoder, RecordFormat, SkipReason,
        SkippedRecord, SourceContext,
    };
}

pub mod report {
    //! Chart dataset assembly
    pub use algoperf_report::{
        AlgorithmStyle, AxisSpec, ChartDataset, Point, PresentationConfig, Report,
        ReportAssembler, ReportAxis, Scale, Series,
    };
}

/// Analyzes every source directly inside `dir` with `config`.
///
/// # Errors
///
/// Fails if the directory cannot be listed or no source yields a valid
/// measurement.
pub fn analyze_dir(dir: impl AsRef<std::path::Path>, config: AnalysisConfig) -> Result<Analysis> {
    let sources = discover_sources(dir)?;
    Analyzer::new(config).analyze_paths(&sources)
}
