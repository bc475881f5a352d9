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

//! The analysis pipeline.
//!
//! Phases run strictly in order: parse every source, build the dataset,
//! aggregate, build the optimal table, compute quality, assemble the
//! report. Only parsing runs in parallel; parsed sources are merged in
//! input order.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use algoperf_core::{Aggregation, Dataset, Diagnostics, OptimalTable, QualityReport};
use algoperf_ingest::{parse_path, parse_str, IngestError, ParsedSource};
use algoperf_report::{Report, ReportAssembler};
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// The outcome of reading one source.
type SourceOutcome = (String, std::result::Result<ParsedSource, IngestError>);

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// All valid measurements, in source order.
    pub dataset: Dataset,
    /// Per-group summaries.
    pub aggregation: Aggregation,
    /// Best known result per (size, category).
    pub optimal: OptimalTable,
    /// Heuristic quality records and omissions.
    pub quality: QualityReport,
    /// Chart datasets for the renderer.
    pub report: Report,
    /// Counters collected along the way.
    pub diagnostics: Diagnostics,
}

/// Runs the pipeline with a fixed configuration.
///
/// # Examples
///
/// ```
/// use algoperf::{AnalysisConfig, Analyzer};
///
/// let sources = [
///     ("testcases_10_blocks_0_brute-force.txt", "n: 10\ntime_ms: 12.5\nmemory_kb: 3584\nresult: 26\n"),
///     ("testcases_10_blocks_0_greedy1.txt", "n: 10\ntime_ms: 0.05\nmemory_kb: 0\nresult: 20\n"),
/// ];
///
/// let analysis = Analyzer::new(AnalysisConfig::default()).analyze_sources(&sources).unwrap();
///
/// let record = &analysis.quality.records[0];
/// assert_eq!(record.algorithm.as_str(), "greedy1");
/// assert!((record.quality_pct - 76.92).abs() < 0.01);
/// assert_eq!(analysis.diagnostics.records_parsed, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes files on disk.
    ///
    /// Unreadable files are recorded in the diagnostics and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDataset`] when no file yields a valid
    /// measurement.
    pub fn analyze_paths<P>(&self, paths: &[P]) -> Result<Analysis>
    where
        P: AsRef<Path> + Sync,
    {
        info!(sources = paths.len(), parallel = self.config.parallel, "parsing sources");
        let parse = |path: &P| -> SourceOutcome {
            let path = path.as_ref();
            (path.display().to_string(), parse_path(path, &self.config.parse))
        };
        let outcomes: Vec<SourceOutcome> = if self.config.parallel {
            paths.par_iter().map(parse).collect()
        } else {
            paths.iter().map(parse).collect()
        };
        self.analyze_outcomes(outcomes)
    }

    /// Analyzes in-memory sources given as (name, text) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDataset`] when no source yields a valid
    /// measurement.
    pub fn analyze_sources<N, T>(&self, sources: &[(N, T)]) -> Result<Analysis>
    where
        N: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        info!(sources = sources.len(), parallel = self.config.parallel, "parsing sources");
        let parse = |(name, text): &(N, T)| -> SourceOutcome {
            let name = name.as_ref();
            (
                name.to_string(),
                Ok(parse_str(name, text.as_ref(), &self.config.parse)),
            )
        };
        let outcomes: Vec<SourceOutcome> = if self.config.parallel {
            sources.par_iter().map(parse).collect()
        } else {
            sources.iter().map(parse).collect()
        };
        self.analyze_outcomes(outcomes)
    }

    /// Merges parsed sources and runs the remaining phases.
    fn analyze_outcomes(&self, outcomes: Vec<SourceOutcome>) -> Result<Analysis> {
        let mut diagnostics = Diagnostics::default();
        let mut dataset = Dataset::new();

        for (name, outcome) in outcomes {
            match outcome {
                Ok(parsed) => {
                    diagnostics.sources_read += 1;
                    diagnostics.records_parsed += parsed.measurements.len();
                    diagnostics.records_skipped += parsed.skipped.len();
                    if parsed.truncated {
                        warn!(source = %name, "source truncated at the record limit");
                    }
                    if parsed.is_empty() {
                        diagnostics.empty_sources.push(name);
                    }
                    dataset.extend(parsed.measurements);
                }
                Err(IngestError::SourceUnavailable {
                    source_name,
                    reason,
                }) => {
                    warn!(source = %source_name, %reason, "source unavailable");
                    diagnostics.source_failed(source_name, reason);
                }
                Err(err) => {
                    warn!(source = %name, error = %err, "source unavailable");
                    diagnostics.source_failed(name, err.to_string());
                }
            }
        }

        if dataset.is_empty() {
            warn!("no valid measurements, no report produced");
            return Err(AnalysisError::EmptyDataset { diagnostics });
        }

        info!(measurements = dataset.len(), "aggregating");
        let aggregation = Aggregation::from_dataset(&dataset);
        let optimal = OptimalTable::from_aggregation(&aggregation, &self.config.optimal);
        let quality = QualityReport::compute(&aggregation, &optimal, &self.config.optimal);

        diagnostics.groups = aggregation.len();
        diagnostics.quality_records = quality.records.len();
        diagnostics.quality_missing_baseline = quality.omitted();
        diagnostics.optimal_disagreements = optimal.disagreements();

        info!(
            groups = diagnostics.groups,
            baselines = optimal.len(),
            quality_records = diagnostics.quality_records,
            "assembling report"
        );
        let report = ReportAssembler::new(self.config.presentation.clone()).assemble(
            &aggregation,
            &optimal,
            &quality,
        );

        Ok(Analysis {
            dataset,
            aggregation,
            optimal,
            quality,
            report,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial() -> Analyzer {
        Analyzer::new(AnalysisConfig {
            parallel: false,
            ..AnalysisConfig::default()
        })
    }

    #[test]
    fn test_empty_input_is_empty_dataset() {
        let sources: [(&str, &str); 0] = [];
        let err = serial().analyze_sources(&sources).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDataset { .. }));
    }

    #[test]
    fn test_only_malformed_records_is_empty_dataset() {
        let err = serial()
            .analyze_sources(&[("greedy1.csv", "t,1,abc,0,1\n")])
            .unwrap_err();
        match err {
            AnalysisError::EmptyDataset { diagnostics } => {
                assert_eq!(diagnostics.sources_read, 1);
                assert_eq!(diagnostics.records_skipped, 1);
                assert_eq!(diagnostics.empty_sources, vec!["greedy1.csv"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("greedy1.csv");
        std::fs::write(&good, "t_random,3,0.5,0,7\n").unwrap();
        let missing = dir.path().join("missing.csv");

        let analysis = serial().analyze_paths(&[good, missing]).unwrap();
        assert_eq!(analysis.diagnostics.sources_read, 1);
        assert_eq!(analysis.diagnostics.sources_failed.len(), 1);
        assert!(analysis.diagnostics.sources_failed[0]
            .source
            .ends_with("missing.csv"));
    }
}
