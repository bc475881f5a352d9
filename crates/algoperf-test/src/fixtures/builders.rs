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

//! Fluent builders for measurements and raw CSV text.

use algoperf_core::{AlgorithmId, Dataset, InputCategory, Measurement};

/// Builder for [`Measurement`] fixtures.
///
/// Defaults: size 10, category `random`, 1 ms, memory not measured,
/// result 0.
///
/// # Examples
///
/// ```
/// use algoperf_test::fixtures::builders::MeasurementBuilder;
///
/// let m = MeasurementBuilder::new("brute-force")
///     .size(12)
///     .category("blocks")
///     .time_ms(3.5)
///     .memory_kb(512.0)
///     .result(40.0)
///     .build();
///
/// assert_eq!(m.algorithm().as_str(), "brute-force");
/// assert_eq!(m.memory_kb(), Some(512.0));
/// ```
#[derive(Debug, Clone)]
pub struct MeasurementBuilder {
    algorithm: String,
    input_size: u64,
    category: String,
    time_ms: f64,
    memory_kb: Option<f64>,
    result: f64,
    test_case: Option<String>,
}

impl MeasurementBuilder {
    /// Starts a measurement for `algorithm`.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            input_size: 10,
            category: "random".to_string(),
            time_ms: 1.0,
            memory_kb: None,
            result: 0.0,
            test_case: None,
        }
    }

    /// Sets the input size.
    pub fn size(mut self, input_size: u64) -> Self {
        self.input_size = input_size;
        self
    }

    /// Sets the input category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the running time.
    pub fn time_ms(mut self, time_ms: f64) -> Self {
        self.time_ms = time_ms;
        self
    }

    /// Sets the memory footprint.
    pub fn memory_kb(mut self, memory_kb: f64) -> Self {
        self.memory_kb = Some(memory_kb);
        self
    }

    /// Sets the objective value.
    pub fn result(mut self, result: f64) -> Self {
        self.result = result;
        self
    }

    /// Sets the test-case identifier.
    pub fn test_case(mut self, test_case: impl Into<String>) -> Self {
        self.test_case = Some(test_case.into());
        self
    }

    /// Builds the measurement.
    ///
    /// # Panics
    ///
    /// Panics if the fields violate a measurement invariant.
    pub fn build(self) -> Measurement {
        let measurement = Measurement::new(
            AlgorithmId::new(&self.algorithm).expect("fixture algorithm"),
            self.input_size,
            InputCategory::new(&self.category).expect("fixture category"),
            self.time_ms,
            self.memory_kb,
            self.result,
        )
        .expect("fixture measurement");

        match self.test_case {
            Some(test_case) => measurement.with_test_case(test_case),
            None => measurement,
        }
    }
}

/// Builds a dataset from measurement builders.
pub fn dataset<I>(builders: I) -> Dataset
where
    I: IntoIterator<Item = MeasurementBuilder>,
{
    builders.into_iter().map(MeasurementBuilder::build).collect()
}

/// Builder for implicit-layout CSV text (`testcase,n,time_ms,memory_kb,result`).
///
/// # Examples
///
/// ```
/// use algoperf_test::fixtures::builders::CsvSourceBuilder;
///
/// let text = CsvSourceBuilder::new()
///     .header()
///     .row("testcases_5_random_0", 5, 0.2, 0.0, 11.0)
///     .raw("not,a,row")
///     .build();
///
/// assert_eq!(text.lines().count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvSourceBuilder {
    lines: Vec<String>,
}

impl CsvSourceBuilder {
    /// Starts an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the implicit-layout header.
    pub fn header(mut self) -> Self {
        self.lines
            .push("testcase,n,time_ms,memory_kb,result".to_string());
        self
    }

    /// Appends a valid row.
    pub fn row(mut self, test_case: &str, n: u64, time_ms: f64, memory_kb: f64, result: f64) -> Self {
        self.lines
            .push(format!("{},{},{},{},{}", test_case, n, time_ms, memory_kb, result));
        self
    }

    /// Appends a line verbatim.
    pub fn raw(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Joins the lines with trailing newline.
    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
