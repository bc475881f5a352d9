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

//! Property-based tests for aggregation invariants.

use algoperf_core::{Aggregation, Dataset, Measurement, OptimalPolicy, OptimalTable, QualityReport};
use algoperf_test::fixtures::builders::MeasurementBuilder;
use proptest::prelude::*;

fn measurement() -> impl Strategy<Value = Measurement> {
    (
        prop::sample::select(vec!["brute-force", "greedy1", "greedy2", "dynamic-programming"]),
        prop::sample::select(vec![5u64, 10, 20, 100]),
        prop::sample::select(vec!["random", "blocks"]),
        0.0f64..1e5,
        prop::option::of(0.0f64..1e6),
        0.0f64..1e6,
    )
        .prop_map(|(algorithm, n, category, time, memory, result)| {
            let builder = MeasurementBuilder::new(algorithm)
                .size(n)
                .category(category)
                .time_ms(time)
                .result(result);
            match memory {
                Some(kb) => builder.memory_kb(kb).build(),
                None => builder.build(),
            }
        })
}

proptest! {
    #[test]
    fn prop_aggregation_is_order_independent(
        measurements in prop::collection::vec(measurement(), 1..60),
        seed in any::<u64>(),
    ) {
        let mut shuffled = measurements.clone();
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let a = Aggregation::from_dataset(&measurements.into_iter().collect::<Dataset>());
        let b = Aggregation::from_dataset(&shuffled.into_iter().collect::<Dataset>());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_mean_time_within_bounds(measurements in prop::collection::vec(measurement(), 1..60)) {
        let aggregation = Aggregation::from_dataset(&measurements.into_iter().collect::<Dataset>());
        for summary in aggregation.iter() {
            prop_assert!(summary.min_time_ms <= summary.mean_time_ms + 1e-9);
            prop_assert!(summary.mean_time_ms <= summary.max_time_ms + 1e-9);
            prop_assert!(summary.memory_samples <= summary.count);
        }
    }

    #[test]
    fn prop_quality_non_negative_for_non_negative_results(
        measurements in prop::collection::vec(measurement(), 1..60),
    ) {
        let policy = OptimalPolicy::default();
        let aggregation = Aggregation::from_dataset(&measurements.into_iter().collect::<Dataset>());
        let optimal = OptimalTable::from_aggregation(&aggregation, &policy);
        let quality = QualityReport::compute(&aggregation, &optimal, &policy);

        for record in &quality.records {
            prop_assert!(record.quality_pct >= 0.0);
            prop_assert!(!policy.is_optimal(&record.algorithm));
            prop_assert!(optimal.value(record.input_size, &record.input_category).is_some());
        }
    }

    #[test]
    fn prop_optimal_value_is_max_of_optimal_groups(
        measurements in prop::collection::vec(measurement(), 1..60),
    ) {
        let policy = OptimalPolicy::default();
        let aggregation = Aggregation::from_dataset(&measurements.into_iter().collect::<Dataset>());
        let optimal = OptimalTable::from_aggregation(&aggregation, &policy);

        for (key, entry) in optimal.iter() {
            let expected = aggregation
                .iter()
                .filter(|s| policy.is_optimal(&s.key.algorithm) && s.key.baseline_key() == *key)
                .map(|s| s.best_result)
                .fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(entry.value, expected);
        }
    }
}
