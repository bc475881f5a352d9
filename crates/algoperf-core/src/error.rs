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

//! Error types for the canonical measurement model.

use thiserror::Error;

/// Errors raised when constructing canonical values.
///
/// These never escape the record parser as hard failures: a record that
/// fails validation is dropped and counted as malformed.
///
/// # Examples
///
/// ```
/// use algoperf_core::CoreError;
///
/// let err = CoreError::InvalidInputSize(0);
/// assert_eq!(err.to_string(), "input size must be at least 1, got 0");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Algorithm identifier was empty after trimming.
    #[error("algorithm identifier must not be empty")]
    EmptyAlgorithm,

    /// Input category was empty after trimming.
    #[error("input category must not be empty")]
    EmptyCategory,

    /// `input_size` below 1.
    #[error("input size must be at least 1, got {0}")]
    InvalidInputSize(u64),

    /// Negative or non-finite execution time.
    #[error("time_ms must be a finite non-negative number, got {0}")]
    InvalidTime(f64),

    /// Negative or non-finite memory figure.
    #[error("memory_kb must be a finite non-negative number, got {0}")]
    InvalidMemory(f64),

    /// Non-finite objective value.
    #[error("result value must be finite, got {0}")]
    InvalidResult(f64),
}

/// Convenience type alias for `Result` with `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_display() {
        let err = CoreError::InvalidTime(-1.5);
        assert_eq!(
            err.to_string(),
            "time_ms must be a finite non-negative number, got -1.5"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
