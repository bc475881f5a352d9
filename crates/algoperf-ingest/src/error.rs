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

//! Error types for record ingestion.
//!
//! Only source-level failures are errors. A bad line is described by a
//! [`SkipReason`] and recovered locally.

use algoperf_core::CoreError;
use thiserror::Error;

/// Source-level ingestion errors.
///
/// # Examples
///
/// ```
/// use algoperf_ingest::IngestError;
///
/// let err = IngestError::SourceUnavailable {
///     source_name: "data/greedy1.csv".to_string(),
///     reason: "No such file or directory".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "source 'data/greedy1.csv' unavailable: No such file or directory"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The source could not be opened or read.
    #[error("source '{source_name}' unavailable: {reason}")]
    SourceUnavailable {
        /// Source name (usually a path).
        source_name: String,
        /// Underlying cause.
        reason: String,
    },

    /// A format hint string did not name a known format.
    #[error("unknown record format '{0}' (expected key-value, csv, csv-explicit or csv-si)")]
    UnknownFormat(String),
}

impl IngestError {
    /// Wraps an I/O failure for `source_name`.
    pub fn unavailable(source_name: impl Into<String>, err: &std::io::Error) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with `IngestError`.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Why a single record was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    /// Row has the wrong number of fields.
    #[error("expected {expected} fields, got {actual}")]
    FieldCount {
        /// Width of the active layout.
        expected: usize,
        /// Fields found in the row.
        actual: usize,
    },

    /// A numeric field failed to parse.
    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber {
        /// Canonical field name.
        field: &'static str,
        /// Raw text.
        value: String,
    },

    /// A required field was absent from the record.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The values parsed but failed canonical validation.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The CSV reader could not split the row.
    #[error("unreadable row: {0}")]
    Csv(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_display() {
        let reason = SkipReason::FieldCount {
            expected: 5,
            actual: 3,
        };
        assert_eq!(reason.to_string(), "expected 5 fields, got 3");
    }

    #[test]
    fn test_rejected_is_transparent() {
        let reason = SkipReason::from(CoreError::InvalidInputSize(0));
        assert_eq!(reason.to_string(), "input size must be at least 1, got 0");
    }

    #[test]
    fn test_unavailable_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::unavailable("a.csv", &io);
        assert!(err.to_string().contains("a.csv"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IngestError>();
        assert_send_sync::<SkipReason>();
    }
}
