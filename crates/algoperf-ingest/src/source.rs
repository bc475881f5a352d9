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

//! Per-source context and parse results.

use crate::error::SkipReason;
use crate::format::RecordFormat;
use algoperf_core::Measurement;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(testcases_(\d+)_.+)_([^_]+)$").expect("valid file name pattern")
    })
}

/// What a source's name says about its records.
///
/// Measurement files follow `testcases_{n}_{id}_{algorithm}.txt`; summary
/// CSVs are usually named after the algorithm alone (`greedy1.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    name: String,
    algorithm: Option<String>,
    input_size: Option<u64>,
    test_case: Option<String>,
}

impl SourceContext {
    /// Derives the context from a source name (usually a path).
    ///
    /// # Examples
    ///
    /// ```
    /// use algoperf_ingest::SourceContext;
    ///
    /// let ctx = SourceContext::new("out/testcases_10_blocks_0_greedy1.txt");
    /// assert_eq!(ctx.algorithm(), Some("greedy1"));
    /// assert_eq!(ctx.input_size(), Some(10));
    /// assert_eq!(ctx.test_case(), Some("testcases_10_blocks_0"));
    ///
    /// let ctx = SourceContext::new("results/dynamic_greedy2.csv");
    /// assert_eq!(ctx.algorithm(), Some("greedy2"));
    /// assert_eq!(ctx.input_size(), None);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let stem = Path::new(&name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .trim()
            .to_string();

        if let Some(caps) = file_name_pattern().captures(&stem) {
            return Self {
                input_size: caps[2].parse().ok(),
                test_case: Some(caps[1].to_string()),
                algorithm: Some(caps[3].to_string()),
                name,
            };
        }

        let algorithm = stem
            .rsplit('_')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string);

        Self {
            name,
            algorithm,
            input_size: None,
            test_case: None,
        }
    }

    /// The source name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Algorithm implied by the file name.
    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Input size encoded in a `testcases_{n}_...` name.
    pub fn input_size(&self) -> Option<u64> {
        self.input_size
    }

    /// Test-case identifier encoded in a `testcases_{n}_...` name.
    pub fn test_case(&self) -> Option<&str> {
        self.test_case.as_deref()
    }
}

/// A record that was dropped, with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// 1-based line number where the record starts.
    pub line: u64,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Everything one source produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSource {
    /// Source name.
    pub source: String,
    /// Shape the records were decoded as.
    pub format: RecordFormat,
    /// Valid measurements, in source order.
    pub measurements: Vec<Measurement>,
    /// Dropped records, in source order.
    pub skipped: Vec<SkippedRecord>,
    /// Reading stopped at the per-source record limit.
    pub truncated: bool,
}

impl ParsedSource {
    pub(crate) fn new(source: impl Into<String>, format: RecordFormat) -> Self {
        Self {
            source: source.into(),
            format,
            measurements: Vec::new(),
            skipped: Vec::new(),
            truncated: false,
        }
    }

    pub(crate) fn skip(&mut self, line: u64, reason: SkipReason) {
        self.skipped.push(SkippedRecord { line, reason });
    }

    /// Records seen, valid or not.
    pub fn records_seen(&self) -> usize {
        self.measurements.len() + self.skipped.len()
    }

    /// True when no valid measurement was produced.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
