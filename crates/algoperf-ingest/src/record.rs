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

//! Raw field collection and conversion into canonical measurements.

use crate::category::CategoryMatcher;
use crate::columns::Column;
use crate::error::SkipReason;
use crate::source::SourceContext;
use crate::units::{MemoryUnit, TimeUnit};
use algoperf_core::{AlgorithmId, InputCategory, Measurement};
use tracing::warn;

/// Untyped fields of one record, as read from a row or a key:value block.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawRecord {
    algorithm: Option<String>,
    test_case: Option<String>,
    category: Option<String>,
    input_size: Option<String>,
    time: Option<(String, TimeUnit)>,
    memory: Option<(String, MemoryUnit)>,
    result: Option<String>,
}

impl RawRecord {
    /// Stores a field value; a later value for the same column replaces it.
    pub(crate) fn assign(&mut self, column: Column, value: &str) {
        let value = value.trim().to_string();
        match column {
            Column::Algorithm => self.algorithm = Some(value),
            Column::TestCase => self.test_case = Some(value),
            Column::Category => self.category = Some(value),
            Column::InputSize => self.input_size = Some(value),
            Column::Time(unit) => self.time = Some((value, unit)),
            Column::Memory(unit) => self.memory = Some((value, unit)),
            Column::Result => self.result = Some(value),
        }
    }

    /// Validates and normalizes into a canonical measurement.
    ///
    /// Fields missing from the record fall back to what the source name
    /// implies (algorithm, input size, test case). Units are converted here
    /// and nowhere else.
    pub(crate) fn into_measurement(
        self,
        source: &SourceContext,
        categories: &CategoryMatcher,
    ) -> Result<Measurement, SkipReason> {
        let algorithm = non_empty(self.algorithm.as_deref())
            .or(source.algorithm())
            .ok_or(SkipReason::MissingField("algorithm"))?;
        let algorithm = AlgorithmId::new(algorithm)?;

        let input_size = match non_empty(self.input_size.as_deref()) {
            Some(raw) => parse_size(raw)?,
            None => source
                .input_size()
                .ok_or(SkipReason::MissingField("n"))?,
        };

        let (raw_time, time_unit) = self
            .time
            .as_ref()
            .filter(|(raw, _)| !raw.is_empty())
            .ok_or(SkipReason::MissingField("time_ms"))?;
        let time_ms = time_unit.to_millis(parse_number("time_ms", raw_time)?);

        // A negative reading is a before/after delta that went backwards;
        // the run itself is still valid.
        let memory_kb = match &self.memory {
            Some((raw, unit)) if !raw.is_empty() => {
                let kb = unit.to_kilobytes(parse_number("memory_kb", raw)?);
                if kb < 0.0 {
                    warn!(
                        source = source.name(),
                        memory_kb = kb,
                        "negative memory reading, treating memory as not measured"
                    );
                    None
                } else {
                    Some(kb)
                }
            }
            _ => None,
        };

        let raw_result = non_empty(self.result.as_deref()).ok_or(SkipReason::MissingField("result"))?;
        let result_value = parse_number("result", raw_result)?;

        let test_case = non_empty(self.test_case.as_deref())
            .or(source.test_case())
            .map(str::to_string);

        let input_category = match non_empty(self.category.as_deref()) {
            Some(raw) => InputCategory::new(raw)?,
            None => categories.classify(test_case.as_deref()),
        };

        let measurement = Measurement::new(
            algorithm,
            input_size,
            input_category,
            time_ms,
            memory_kb,
            result_value,
        )?;

        Ok(match test_case {
            Some(test_case) => measurement.with_test_case(test_case),
            None => measurement,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, SkipReason> {
    raw.parse::<f64>().map_err(|_| SkipReason::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Input sizes are integers; `100.0` is accepted, `100.5` and `-3` are not.
fn parse_size(raw: &str) -> Result<u64, SkipReason> {
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => {
            Ok(n as u64)
        }
        _ => Err(SkipReason::InvalidNumber {
            field: "n",
            value: raw.to_string(),
        }),
    }
}
