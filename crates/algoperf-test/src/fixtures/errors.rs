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

//! Malformed record samples.
//!
//! Rows are malformed for their own layout and for the other positional
//! layout too, so they can never change which layout a source is read with.

use crate::SourceList;

/// Malformed implicit-layout rows as (description, row).
pub fn malformed_csv_rows() -> SourceList {
    vec![
        ("short_row", "testcases_3_random_0,3"),
        ("extra_field", "testcases_3_random_0,3,0.1,0,5,9"),
        ("seven_fields", "testcases_3_random_0,3,0.1,0,5,9,9"),
        ("non_numeric_time", "testcases_3_random_0,3,fast,0,5"),
        ("non_numeric_result", "testcases_3_random_0,3,0.1,0,best"),
        ("negative_time", "testcases_3_random_0,3,-0.1,0,5"),
        ("zero_size", "testcases_0_random_0,0,0.1,0,5"),
        ("fractional_size", "testcases_3_random_0,3.5,0.1,0,5"),
        ("missing_time", "testcases_3_random_0,3,,0,5"),
    ]
}

/// Malformed explicit-layout rows
/// (`algorithm,testcase,category,n,time_ms,memory_kb,result`).
pub fn malformed_explicit_rows() -> SourceList {
    vec![
        ("short_row", "greedy1,testcases_3_random_0,random"),
        ("five_fields", "greedy1,testcases_3_random_0,random,3,0.1"),
        ("non_numeric_n", "greedy1,testcases_3_random_0,random,three,0.1,0,5"),
        ("negative_time", "greedy1,testcases_3_random_0,random,3,-1,0,5"),
        ("non_numeric_result", "greedy2,testcases_3_random_0,blocks,3,0.1,0,best"),
        ("zero_size", "greedy2,testcases_0_random_0,random,0,0.1,0,5"),
    ]
}

/// Malformed key:value blocks as (description, block).
pub fn malformed_key_value_blocks() -> SourceList {
    vec![
        ("missing_result", "n: 3\ntime_ms: 0.1\nmemory_kb: 0\n"),
        ("non_numeric_n", "n: three\ntime_ms: 0.1\nresult: 5\n"),
        ("negative_time", "n: 3\ntime_ms: -2\nresult: 5\n"),
    ]
}
