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

//! Error types for the analysis pipeline.

use algoperf_core::Diagnostics;
use thiserror::Error;

/// Pipeline-level errors.
///
/// Per-source and per-record problems never surface here; they are
/// collected in [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No source produced a valid measurement, so there is nothing to report.
    #[error(
        "no valid measurements: {} source(s) read, {} failed, {} record(s) skipped",
        .diagnostics.sources_read,
        .diagnostics.sources_failed.len(),
        .diagnostics.records_skipped
    )]
    EmptyDataset {
        /// What was observed while trying.
        diagnostics: Diagnostics,
    },

    /// The analysis configuration could not be loaded.
    #[error("invalid configuration '{path}': {reason}")]
    Config {
        /// Configuration file.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// A source directory could not be listed.
    #[error("cannot list '{path}': {reason}")]
    Discovery {
        /// Directory that was scanned.
        path: String,
        /// Underlying cause.
        reason: String,
    },
}

/// Convenience type alias for `Result` with `AnalysisError`.
pub type Result<T> = std::result::Result<T, AnalysisError>;
