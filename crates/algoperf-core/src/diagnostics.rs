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

//! Run diagnostics surfaced to the caller.

use std::fmt;

/// A source that could not be opened or read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceFailure {
    /// Source name (usually a path).
    pub source: String,
    /// Why it failed.
    pub reason: String,
}

/// Counters collected over one analysis run.
///
/// Per-record failures never propagate; they only show up here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Sources opened and decoded (including ones that yielded nothing).
    pub sources_read: usize,
    /// Sources that could not be opened.
    pub sources_failed: Vec<SourceFailure>,
    /// Readable sources that produced zero valid records.
    pub empty_sources: Vec<String>,
    /// Canonical measurements produced.
    pub records_parsed: usize,
    /// Malformed records dropped.
    pub records_skipped: usize,
    /// Distinct group keys.
    pub groups: usize,
    /// Quality records emitted.
    pub quality_records: usize,
    /// Heuristic groups without a usable optimal baseline.
    pub quality_missing_baseline: usize,
    /// (size, category) pairs where optimal algorithms disagreed.
    pub optimal_disagreements: usize,
}

impl Diagnostics {
    /// Records a failed source.
    pub fn source_failed(&mut self, source: impl Into<String>, reason: impl Into<String>) {
        self.sources_failed.push(SourceFailure {
            source: source.into(),
            reason: reason.into(),
        });
    }

    /// Returns true if any source could not be read.
    pub fn has_failures(&self) -> bool {
        !self.sources_failed.is_empty()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "sources: {} read, {} failed, {} empty",
            self.sources_read,
            self.sources_failed.len(),
            self.empty_sources.len()
        )?;
        writeln!(
            f,
            "records: {} parsed, {} skipped",
            self.records_parsed, self.records_skipped
        )?;
        writeln!(f, "groups: {}", self.groups)?;
        write!(
            f,
            "quality: {} records, {} groups without optimal baseline, {} optimal disagreements",
            self.quality_records, self.quality_missing_baseline, self.optimal_disagreements
        )
    }
}
