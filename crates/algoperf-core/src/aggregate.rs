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

//! Group-key aggregation and the optimal-result table.
//!
//! Reductions are order-independent: samples are sorted before summation, so
//! the same dataset assembled in any source order produces bit-identical
//! summaries.

use crate::dataset::Dataset;
use crate::measurement::{AlgorithmId, BaselineKey, GroupKey, InputCategory};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Summary statistics for one group key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupSummary {
    /// The group this summary describes.
    pub key: GroupKey,
    /// Number of measurements in the group.
    pub count: usize,
    /// Mean execution time in milliseconds.
    pub mean_time_ms: f64,
    /// Fastest observed run.
    pub min_time_ms: f64,
    /// Slowest observed run.
    pub max_time_ms: f64,
    /// Mean memory over measured entries only; `None` if nothing was measured.
    pub mean_memory_kb: Option<f64>,
    /// Number of entries that carried a memory reading.
    pub memory_samples: usize,
    /// Maximum result value observed (the representative result).
    pub best_result: f64,
}

/// Per-group summaries of a whole dataset, ordered by group key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    groups: BTreeMap<GroupKey, GroupSummary>,
}

#[derive(Default)]
struct GroupSamples {
    times: Vec<f64>,
    memory: Vec<f64>,
    results: Vec<f64>,
}

impl Aggregation {
    /// Reduces a dataset into per-group summaries.
    ///
    /// Every measurement lands in exactly one group.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut samples: BTreeMap<GroupKey, GroupSamples> = BTreeMap::new();

        for m in dataset {
            let entry = samples.entry(m.group_key()).or_default();
            entry.times.push(m.time_ms());
            if let Some(kb) = m.memory_kb() {
                entry.memory.push(kb);
            }
            entry.results.push(m.result_value());
        }

        let groups = samples
            .into_iter()
            .map(|(key, s)| {
                let summary = summarize(key.clone(), s);
                (key, summary)
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            measurements = dataset.len(),
            groups = groups.len(),
            "aggregated dataset"
        );

        Self { groups }
    }

    /// Looks up the summary for one group.
    pub fn get(&self, key: &GroupKey) -> Option<&GroupSummary> {
        self.groups.get(key)
    }

    /// Iterates summaries in group-key order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupSummary> {
        self.groups.values()
    }

    /// Summaries of one algorithm, ordered by size then category.
    pub fn for_algorithm<'a>(
        &'a self,
        algorithm: &'a AlgorithmId,
    ) -> impl Iterator<Item = &'a GroupSummary> + 'a {
        self.groups
            .values()
            .filter(move |summary| &summary.key.algorithm == algorithm)
    }

    /// Distinct algorithms, sorted.
    pub fn algorithms(&self) -> BTreeSet<AlgorithmId> {
        self.groups.keys().map(|k| k.algorithm.clone()).collect()
    }

    /// Distinct input categories, sorted.
    pub fn categories(&self) -> BTreeSet<InputCategory> {
        self.groups.keys().map(|k| k.input_category.clone()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true when there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn summarize(key: GroupKey, mut s: GroupSamples) -> GroupSummary {
    s.times.sort_by(f64::total_cmp);
    s.memory.sort_by(f64::total_cmp);

    let count = s.times.len();
    let mean_time_ms = s.times.iter().sum::<f64>() / count as f64;
    let mean_memory_kb = if s.memory.is_empty() {
        None
    } else {
        Some(s.memory.iter().sum::<f64>() / s.memory.len() as f64)
    };
    let best_result = s
        .results
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    GroupSummary {
        key,
        count,
        mean_time_ms,
        min_time_ms: s.times[0],
        max_time_ms: s.times[count - 1],
        mean_memory_kb,
        memory_samples: s.memory.len(),
        best_result,
    }
}

/// Which algorithms are trusted to report optimal results.
///
/// "Optimal" is a policy, not a proof: the table trusts the maximum value
/// reported by these algorithms and never verifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OptimalPolicy {
    algorithms: BTreeSet<AlgorithmId>,
}

impl OptimalPolicy {
    /// Builds a policy from an explicit set of exact algorithms.
    pub fn new<I: IntoIterator<Item = AlgorithmId>>(algorithms: I) -> Self {
        Self {
            algorithms: algorithms.into_iter().collect(),
        }
    }

    /// Returns true if `algorithm` is designated optimal.
    pub fn is_optimal(&self, algorithm: &AlgorithmId) -> bool {
        self.algorithms.contains(algorithm)
    }

    /// The designated exact algorithms.
    pub fn algorithms(&self) -> &BTreeSet<AlgorithmId> {
        &self.algorithms
    }
}

impl Default for OptimalPolicy {
    fn default() -> Self {
        Self::new(
            [AlgorithmId::BRUTE_FORCE, AlgorithmId::DYNAMIC_PROGRAMMING]
                .into_iter()
                .filter_map(|name| AlgorithmId::new(name).ok()),
        )
    }
}

/// Best known result for one (size, category) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimalEntry {
    /// Maximum result reported by any optimal algorithm.
    pub value: f64,
    /// Optimal algorithms that reported results for this pair.
    pub contributors: BTreeSet<AlgorithmId>,
    /// True when contributing algorithms reported different maxima.
    pub disagreement: bool,
}

/// Mapping from (size, category) to the best known result.
///
/// Built once from an [`Aggregation`] and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimalTable {
    entries: BTreeMap<BaselineKey, OptimalEntry>,
}

impl OptimalTable {
    /// Builds the table from optimal-algorithm groups only.
    ///
    /// When two optimal algorithms disagree, the larger value is kept and the
    /// disagreement is logged.
    pub fn from_aggregation(aggregation: &Aggregation, policy: &OptimalPolicy) -> Self {
        let mut entries: BTreeMap<BaselineKey, OptimalEntry> = BTreeMap::new();

        for summary in aggregation
            .iter()
            .filter(|s| policy.is_optimal(&s.key.algorithm))
        {
            let baseline = summary.key.baseline_key();
            match entries.get_mut(&baseline) {
                Some(entry) => {
                    if summary.best_result != entry.value {
                        entry.disagreement = true;
                    }
                    entry.value = entry.value.max(summary.best_result);
                    entry.contributors.insert(summary.key.algorithm.clone());
                }
                None => {
                    entries.insert(
                        baseline,
                        OptimalEntry {
                            value: summary.best_result,
                            contributors: BTreeSet::from([summary.key.algorithm.clone()]),
                            disagreement: false,
                        },
                    );
                }
            }
        }

        for (key, entry) in entries.iter().filter(|(_, e)| e.disagreement) {
            warn!(
                input_size = key.input_size,
                input_category = %key.input_category,
                kept = entry.value,
                "optimal algorithms disagree; trusting the maximum"
            );
        }

        Self { entries }
    }

    /// Best known result for a (size, category) pair.
    pub fn get(&self, key: &BaselineKey) -> Option<&OptimalEntry> {
        self.entries.get(key)
    }

    /// Best known value for a (size, category) pair.
    pub fn value(&self, input_size: u64, input_category: &InputCategory) -> Option<f64> {
        self.entries
            .get(&BaselineKey::new(input_size, input_category.clone()))
            .map(|e| e.value)
    }

    /// Iterates entries ordered by size then category.
    pub fn iter(&self) -> impl Iterator<Item = (&BaselineKey, &OptimalEntry)> {
        self.entries.iter()
    }

    /// Number of pairs with a known optimum.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no optimal algorithm reported anything.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pairs where optimal algorithms disagreed.
    pub fn disagreements(&self) -> usize {
        self.entries.values().filter(|e| e.disagreement).count()
    }
}
