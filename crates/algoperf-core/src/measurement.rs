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

//! Canonical measurement types.
//!
//! Every raw record format converges on [`Measurement`]. Values are validated
//! once, at construction, and are immutable afterward.

use crate::error::{CoreError, Result};
use std::fmt;

/// Identifier of an algorithm under test.
///
/// The set of algorithms is open: any non-empty identifier is accepted.
/// Identifiers are trimmed and lower-cased so that `Greedy1` and `greedy1 `
/// group together.
///
/// # Examples
///
/// ```
/// use algoperf_core::AlgorithmId;
///
/// let id = AlgorithmId::new(" Brute-Force ").unwrap();
/// assert_eq!(id.as_str(), "brute-force");
/// assert!(AlgorithmId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    /// Exhaustive search.
    pub const BRUTE_FORCE: &'static str = "brute-force";
    /// Local-maximum greedy heuristic.
    pub const GREEDY1: &'static str = "greedy1";
    /// Merge-if-better greedy heuristic.
    pub const GREEDY2: &'static str = "greedy2";
    /// Dynamic programming.
    pub const DYNAMIC_PROGRAMMING: &'static str = "dynamic-programming";

    /// Creates a normalized identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::EmptyAlgorithm);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AlgorithmId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AlgorithmId> for String {
    fn from(id: AlgorithmId) -> Self {
        id.0
    }
}

/// Generation strategy of a test case (e.g. `random`, `blocks`).
///
/// [`InputCategory::unknown`] is used whenever the category cannot be
/// determined from the raw record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct InputCategory(String);

impl InputCategory {
    /// Category assigned when no known token matches.
    pub const UNKNOWN: &'static str = "unknown";

    /// Creates a normalized category.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::EmptyCategory);
        }
        Ok(Self(normalized))
    }

    /// The `unknown` category.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns true for the `unknown` category.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Returns the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for InputCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<InputCategory> for String {
    fn from(category: InputCategory) -> Self {
        category.0
    }
}

/// Aggregation unit: all measurements sharing a key are summarized together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupKey {
    /// Algorithm that produced the measurements.
    pub algorithm: AlgorithmId,
    /// Number of elements in the test case.
    pub input_size: u64,
    /// Generation strategy of the test case.
    pub input_category: InputCategory,
}

impl GroupKey {
    /// Creates a group key.
    pub fn new(algorithm: AlgorithmId, input_size: u64, input_category: InputCategory) -> Self {
        Self {
            algorithm,
            input_size,
            input_category,
        }
    }

    /// The (size, category) pair used to look up an optimal baseline.
    pub fn baseline_key(&self) -> BaselineKey {
        BaselineKey {
            input_size: self.input_size,
            input_category: self.input_category.clone(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} n={} [{}]",
            self.algorithm, self.input_size, self.input_category
        )
    }
}

/// Key of the optimal table: algorithm is collapsed away.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaselineKey {
    /// Number of elements in the test case.
    pub input_size: u64,
    /// Generation strategy of the test case.
    pub input_category: InputCategory,
}

impl BaselineKey {
    /// Creates a baseline key.
    pub fn new(input_size: u64, input_category: InputCategory) -> Self {
        Self {
            input_size,
            input_category,
        }
    }
}

/// One observed run of one algorithm on one test case.
///
/// All numeric fields are in canonical units: milliseconds and kilobytes.
/// A memory reading of zero means "not measured" and is stored as `None`.
///
/// # Examples
///
/// ```
/// use algoperf_core::{AlgorithmId, InputCategory, Measurement};
///
/// let m = Measurement::new(
///     AlgorithmId::new("greedy1").unwrap(),
///     10,
///     InputCategory::new("blocks").unwrap(),
///     0.42,
///     Some(0.0),
///     20.0,
/// )
/// .unwrap();
///
/// assert_eq!(m.memory_kb(), None);
/// assert_eq!(m.group_key().input_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    algorithm: AlgorithmId,
    input_size: u64,
    input_category: InputCategory,
    time_ms: f64,
    memory_kb: Option<f64>,
    result_value: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    test_case: Option<String>,
}

impl Measurement {
    /// Validates and builds a measurement.
    ///
    /// # Errors
    ///
    /// Fails when `input_size` is zero, `time_ms` is negative or not finite,
    /// `memory_kb` is negative or not finite, or `result_value` is not finite.
    pub fn new(
        algorithm: AlgorithmId,
        input_size: u64,
        input_category: InputCategory,
        time_ms: f64,
        memory_kb: Option<f64>,
        result_value: f64,
    ) -> Result<Self> {
        if input_size < 1 {
            return Err(CoreError::InvalidInputSize(input_size));
        }
        if !time_ms.is_finite() || time_ms < 0.0 {
            return Err(CoreError::InvalidTime(time_ms));
        }
        let memory_kb = match memory_kb {
            Some(kb) if !kb.is_finite() || kb < 0.0 => return Err(CoreError::InvalidMemory(kb)),
            Some(kb) if kb == 0.0 => None,
            other => other,
        };
        if !result_value.is_finite() {
            return Err(CoreError::InvalidResult(result_value));
        }

        Ok(Self {
            algorithm,
            input_size,
            input_category,
            time_ms,
            memory_kb,
            result_value,
            test_case: None,
        })
    }

    /// Attaches the raw test-case identifier.
    pub fn with_test_case(mut self, test_case: impl Into<String>) -> Self {
        self.test_case = Some(test_case.into());
        self
    }

    /// Algorithm that produced this measurement.
    pub fn algorithm(&self) -> &AlgorithmId {
        &self.algorithm
    }

    /// Number of elements in the test case.
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// Generation strategy of the test case.
    pub fn input_category(&self) -> &InputCategory {
        &self.input_category
    }

    /// Wall-clock execution time in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Peak memory in kilobytes, `None` when not measured.
    pub fn memory_kb(&self) -> Option<f64> {
        self.memory_kb
    }

    /// Objective value reported by the algorithm.
    pub fn result_value(&self) -> f64 {
        self.result_value
    }

    /// Raw test-case identifier, if the source carried one.
    pub fn test_case(&self) -> Option<&str> {
        self.test_case.as_deref()
    }

    /// The grouping key of this measurement.
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(
            self.algorithm.clone(),
            self.input_size,
            self.input_category.clone(),
        )
    }
}
