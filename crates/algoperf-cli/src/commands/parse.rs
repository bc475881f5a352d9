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

//! Parse command - decode one source and show its canonical measurements

use super::{load_config, write_output};
use crate::error::CliError;
use algoperf::ingest::{parse_path, ParsedSource};
use algoperf::{Measurement, RecordFormat};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SkippedJson {
    line: u64,
    reason: String,
}

#[derive(Serialize)]
struct ParsedJson<'a> {
    source: &'a str,
    format: RecordFormat,
    measurements: &'a [Measurement],
    skipped: Vec<SkippedJson>,
    truncated: bool,
}

impl<'a> From<&'a ParsedSource> for ParsedJson<'a> {
    fn from(parsed: &'a ParsedSource) -> Self {
        Self {
            source: &parsed.source,
            format: parsed.format,
            measurements: &parsed.measurements,
            skipped: parsed
                .skipped
                .iter()
                .map(|s| SkippedJson {
                    line: s.line,
                    reason: s.reason.to_string(),
                })
                .collect(),
            truncated: parsed.truncated,
        }
    }
}

/// Parse a single measurement source.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is larger than the
/// configured limit.
pub fn parse(file: &Path, format: Option<RecordFormat>, json: bool) -> Result<(), CliError> {
    let mut config = load_config(None)?;
    config.parse.format = format;

    let parsed = parse_path(file, &config.parse)?;

    if json {
        let text = serde_json::to_string_pretty(&ParsedJson::from(&parsed))?;
        return write_output(&text, None);
    }

    println!(
        "{} {} ({})",
        "✓".green().bold(),
        parsed.source.bold(),
        parsed.format
    );
    for m in &parsed.measurements {
        let memory = m
            .memory_kb()
            .map(|kb| format!("{:.1} KB", kb))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} n={:<8} {:<10} {:>12.4} ms {:>14} result={}",
            m.algorithm().as_str(),
            m.input_size(),
            m.input_category().as_str(),
            m.time_ms(),
            memory,
            m.result_value()
        );
    }
    for skipped in &parsed.skipped {
        println!(
            "  {} line {}: {}",
            "skipped".yellow(),
            skipped.line,
            skipped.reason
        );
    }
    println!(
        "  {} measurements, {} skipped{}",
        parsed.measurements.len(),
        parsed.skipped.len(),
        if parsed.truncated { ", truncated" } else { "" }
    );
    Ok(())
}
