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

//! The canonical dataset: every measurement of one analysis run.

use crate::measurement::{AlgorithmId, InputCategory, Measurement};
use std::collections::BTreeSet;

/// Append-only collection of canonical measurements.
///
/// Repeated trials are all retained; nothing is deduplicated or overwritten.
/// The dataset lives for a single analysis run and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    measurements: Vec<Measurement>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one measurement.
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Appends every measurement from `iter`.
    pub fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        self.measurements.extend(iter);
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Returns true when no measurement was collected.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Iterates over the measurements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// Measurements as a slice.
    pub fn as_slice(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Distinct algorithms present, sorted.
    pub fn algorithms(&self) -> BTreeSet<AlgorithmId> {
        self.measurements
            .iter()
            .map(|m| m.algorithm().clone())
            .collect()
    }

    /// Distinct input categories present, sorted.
    pub fn categories(&self) -> BTreeSet<InputCategory> {
        self.measurements
            .iter()
            .map(|m| m.input_category().clone())
            .collect()
    }
}

impl FromIterator<Measurement> for Dataset {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self {
            measurements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Dataset {
    type Item = Measurement;
    type IntoIter = std::vec::IntoIter<Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}
