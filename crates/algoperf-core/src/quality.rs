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

//! Relative quality of heuristic results against the optimal table.

use crate::aggregate::{Aggregation, OptimalPolicy, OptimalTable};
use crate::measurement::{AlgorithmId, GroupKey, InputCategory};

/// A heuristic's result as a percentage of the optimum at the same
/// (size, category).
///
/// Values above 100 are kept as-is; consumers decide the display range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QualityRecord {
    /// Heuristic algorithm.
    pub algorithm: AlgorithmId,
    /// Number of elements in the test case.
    pub input_size: u64,
    /// Generation strategy of the test case.
    pub input_category: InputCategory,
    /// `100 * heuristic_result / optimal_result`.
    pub quality_pct: f64,
}

/// Output of the quality calculation.
///
/// Groups without a usable baseline are listed rather than emitted as zero
/// or infinite records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityReport {
    /// One record per heuristic group with a nonzero baseline, in group-key order.
    pub records: Vec<QualityRecord>,
    /// Heuristic groups with no optimal-table entry.
    pub missing_baseline: Vec<GroupKey>,
    /// Heuristic groups whose optimal value is zero.
    pub zero_baseline: Vec<GroupKey>,
}

impl QualityReport {
    /// Computes quality records for every non-optimal group.
    ///
    /// The optimal table must be fully built before this runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use algoperf_core::{
    ///     AlgorithmId, Aggregation, Dataset, InputCategory, Measurement, OptimalPolicy,
    ///     OptimalTable, QualityReport,
    /// };
    ///
    /// let blocks = InputCategory::new("blocks").unwrap();
    /// let dataset: Dataset = vec![
    ///     Measurement::new(AlgorithmId::new("brute-force").unwrap(), 10, blocks.clone(), 1.0, None, 26.0).unwrap(),
    ///     Measurement::new(AlgorithmId::new("greedy1").unwrap(), 10, blocks, 0.1, None, 20.0).unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let policy = OptimalPolicy::default();
    /// let aggregation = Aggregation::from_dataset(&dataset);
    /// let table = OptimalTable::from_aggregation(&aggregation, &policy);
    /// let report = QualityReport::compute(&aggregation, &table, &policy);
    ///
    /// assert_eq!(report.records.len(), 1);
    /// assert!((report.records[0].quality_pct - 76.92).abs() < 0.01);
    /// ```
    pub fn compute(
        aggregation: &Aggregation,
        optimal: &OptimalTable,
        policy: &OptimalPolicy,
    ) -> Self {
        let mut report = Self::default();

        for summary in aggregation
            .iter()
            .filter(|s| !policy.is_optimal(&s.key.algorithm))
        {
            match optimal.get(&summary.key.baseline_key()) {
                None => report.missing_baseline.push(summary.key.clone()),
                Some(entry) if entry.value == 0.0 => report.zero_baseline.push(summary.key.clone()),
                Some(entry) => report.records.push(QualityRecord {
                    algorithm: summary.key.algorithm.clone(),
                    input_size: summary.key.input_size,
                    input_category: summary.key.input_category.clone(),
                    quality_pct: 100.0 * summary.best_result / entry.value,
                }),
            }
        }

        report
    }

    /// Number of heuristic groups left out of the quality output.
    pub fn omitted(&self) -> usize {
        self.missing_baseline.len() + self.zero_baseline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::measurement::Measurement;

    fn m(algorithm: &str, n: u64, category: &str, result: f64) -> Measurement {
        Measurement::new(
            AlgorithmId::new(algorithm).unwrap(),
            n,
            InputCategory::new(category).unwrap(),
            1.0,
            None,
            result,
        )
        .unwrap()
    }

    fn run(dataset: Dataset) -> QualityReport {
        let policy = OptimalPolicy::default();
        let aggregation = Aggregation::from_dataset(&dataset);
        let table = OptimalTable::from_aggregation(&aggregation, &policy);
        QualityReport::compute(&aggregation, &table, &policy)
    }

    #[test]
    fn test_quality_percentage() {
        let report = run(vec![m("brute-force", 10, "blocks", 26.0), m("greedy1", 10, "blocks", 20.0)]
            .into_iter()
            .collect());

        assert_eq!(report.records.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.algorithm.as_str(), "greedy1");
        assert!((record.quality_pct - 76.923).abs() < 0.01);
    }

    #[test]
    fn test_missing_baseline_omitted() {
        let report = run(vec![
            m("dynamic-programming", 10, "random", 50.0),
            m("greedy2", 1000, "random", 20.0),
        ]
        .into_iter()
        .collect());

        assert!(report.records.is_empty());
        assert_eq!(report.missing_baseline.len(), 1);
        assert_eq!(report.missing_baseline[0].input_size, 1000);
    }

    #[test]
    fn test_category_must_match() {
        let report = run(vec![m("brute-force", 10, "blocks", 26.0), m("greedy1", 10, "random", 20.0)]
            .into_iter()
            .collect());

        assert!(report.records.is_empty());
        assert_eq!(report.omitted(), 1);
    }

    #[test]
    fn test_zero_baseline_omitted() {
        let report = run(vec![m("brute-force", 3, "random", 0.0), m("greedy1", 3, "random", 0.0)]
            .into_iter()
            .collect());

        assert!(report.records.is_empty());
        assert_eq!(report.zero_baseline.len(), 1);
    }

    #[test]
    fn test_no_clamping_above_100() {
        let report = run(vec![m("brute-force", 5, "random", 10.0), m("greedy2", 5, "random", 12.0)]
            .into_iter()
            .collect());

        assert!((report.records[0].quality_pct - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimal_algorithms_get_no_record() {
        let report = run(vec![
            m("brute-force", 5, "random", 10.0),
            m("dynamic-programming", 5, "random", 10.0),
        ]
        .into_iter()
        .collect());

        assert!(report.records.is_empty());
        assert_eq!(report.omitted(), 0);
    }
}
