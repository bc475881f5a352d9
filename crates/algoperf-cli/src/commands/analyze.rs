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

//! Analyze command - full pipeline over a directory of measurement sources

use super::{load_config, optimal_policy, write_output};
use crate::error::CliError;
use algoperf::{discover_sources, Analysis, AnalysisError, Analyzer, Diagnostics, RecordFormat};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options of the `analyze` command.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Directory holding the measurement sources.
    pub dir: PathBuf,
    /// Where to write the report JSON.
    pub output: Option<PathBuf>,
    /// Analysis configuration file.
    pub config: Option<PathBuf>,
    /// Optimal algorithms, replacing the configured ones when non-empty.
    pub optimal: Vec<String>,
    /// Category tokens, replacing the configured ones when non-empty.
    pub category_tokens: Vec<String>,
    /// Record format, overriding detection.
    pub format: Option<RecordFormat>,
    /// Parse sources on one thread.
    pub serial: bool,
    /// Print the report JSON to stdout instead of the summary.
    pub json: bool,
}

/// Analyze every source in a directory.
///
/// Prints a diagnostics summary and the quality table to stdout, and writes
/// the report JSON to `output` when given.
///
/// # Errors
///
/// Returns `Err` if:
/// - The configuration file cannot be loaded or a flag is invalid
/// - The directory cannot be listed
/// - No source yields a valid measurement
/// - The report cannot be written
///
/// # Examples
///
/// ```no_run
/// use algoperf_cli::commands::{analyze, AnalyzeOptions};
///
/// # fn main() -> Result<(), algoperf_cli::error::CliError> {
/// analyze(&AnalyzeOptions {
///     dir: "results".into(),
///     output: Some("report.json".into()),
///     ..AnalyzeOptions::default()
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn analyze(options: &AnalyzeOptions) -> Result<(), CliError> {
    let mut config = load_config(options.config.as_deref())?;
    if !options.optimal.is_empty() {
        config.optimal = optimal_policy(&options.optimal)?;
    }
    if !options.category_tokens.is_empty() {
        config.parse.category_tokens = options.category_tokens.clone();
    }
    if options.format.is_some() {
        config.parse.format = options.format;
    }
    if options.serial {
        config.parallel = false;
    }
    debug!(
        format = ?config.parse.format,
        parallel = config.parallel,
        "analysis configuration resolved"
    );

    let sources = discover_sources(&options.dir)?;
    let analysis = match Analyzer::new(config).analyze_paths(&sources) {
        Ok(analysis) => analysis,
        Err(AnalysisError::EmptyDataset { diagnostics }) => {
            if !options.json {
                print_diagnostics(&options.dir, &diagnostics);
            }
            return Err(AnalysisError::EmptyDataset { diagnostics }.into());
        }
        Err(e) => return Err(e.into()),
    };

    let report = analysis.report.to_json_pretty()?;
    if let Some(output) = &options.output {
        write_output(&report, Some(output))?;
    }

    if options.json {
        write_output(&report, None)?;
    } else {
        print_diagnostics(&options.dir, &analysis.diagnostics);
        print_quality(&analysis);
        if let Some(output) = &options.output {
            println!("{} {}", "Report written to".green(), output.display());
        }
    }
    Ok(())
}

fn print_diagnostics(dir: &Path, diagnostics: &Diagnostics) {
    println!("{} {}", "Analysis of".bold(), dir.display().to_string().bold());
    println!(
        "  Sources:  {} read, {} failed, {} empty",
        diagnostics.sources_read,
        count(diagnostics.sources_failed.len()),
        diagnostics.empty_sources.len()
    );
    println!(
        "  Records:  {} parsed, {} skipped",
        diagnostics.records_parsed,
        count(diagnostics.records_skipped)
    );
    println!("  Groups:   {}", diagnostics.groups);
    println!(
        "  Quality:  {} records, {} without optimal baseline, {} optimal disagreements",
        diagnostics.quality_records,
        count(diagnostics.quality_missing_baseline),
        count(diagnostics.optimal_disagreements)
    );

    for failure in &diagnostics.sources_failed {
        println!("  {} {}: {}", "✗".red(), failure.source, failure.reason);
    }
    for source in &diagnostics.empty_sources {
        println!("  {} {}: no valid measurements", "!".yellow(), source);
    }
}

fn print_quality(analysis: &Analysis) {
    if analysis.quality.records.is_empty() {
        return;
    }
    println!("{}", "Quality vs optimal".bold());
    for record in &analysis.quality.records {
        println!(
            "  {:<24} n={:<8} {:<10} {:>8.2}%",
            record.algorithm.as_str(),
            record.input_size,
            record.input_category.as_str(),
            record.quality_pct
        );
    }
}

/// Highlights nonzero problem counters.
fn count(n: usize) -> String {
    if n == 0 {
        n.to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}
