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

//! Canonical raw sources.
//!
//! The sample directory mirrors a real benchmark run: per-test-case
//! key:value files from the exhaustive and exact solvers, a summary CSV for
//! one heuristic, a headerless explicit CSV and an SI-unit CSV. One row in
//! `greedy2.csv` is malformed on purpose.
//!
//! Expected figures for the whole directory live in [`expected`].
//!
//! - **errors**: malformed rows and blocks, one per failure mode
//! - **builders**: measurements and CSV text built field by field

pub mod builders;
pub mod errors;

use crate::SourceList;
use std::io;
use std::path::{Path, PathBuf};

/// Brute force on a 10-element blocks input; the only memory sample there.
pub const BRUTE_FORCE_KV: &str = "n: 10\ntime_ms: 12.5\nmemory_kb: 3584\nresult: 26\n";

/// Greedy 1 on the same input; memory not measured.
pub const GREEDY1_KV: &str = "n: 10\ntime_ms: 0.05\nmemory_kb: 0\nresult: 20\n";

/// Dynamic programming on the same input; agrees with brute force.
pub const DYNAMIC_PROGRAMMING_KV: &str = "n: 10\ntime_ms: 0.3\nmemory_kb: 0\nresult: 26\n";

/// Implicit-layout CSV with a header; the third row has a non-numeric time.
pub const GREEDY2_CSV: &str = "\
testcase,n,time_ms,memory_kb,result
testcases_10_blocks_0,10,0.04,0,24
testcases_100_random_1,100,1.2,128,900
testcases_5_random_0,5,abc,0,3
";

/// Headerless explicit layout.
pub const EXPLICIT_CSV: &str = "\
# algorithm,testcase,category,n,time_ms,memory_kb,result
dynamic-programming,testcases_100_random_1,random,100,45.0,2048,1000
greedy1,testcases_100_random_1,random,100,0.9,0,850
";

/// SI-unit layout with a header; no optimal baseline exists at n = 1000.
pub const SI_CSV: &str = "\
algorithm,testcase,category,n,time_s,memory_bytes,result
greedy1,testcases_1000_random_0,random,1000,0.5,1048576,9000
";

/// All canonical sources as (file name, contents), sorted by file name.
pub fn sample_sources() -> SourceList {
    vec![
        ("greedy2.csv", GREEDY2_CSV),
        ("runs_explicit.csv", EXPLICIT_CSV),
        ("runs_si.csv", SI_CSV),
        ("testcases_10_blocks_0_brute-force.txt", BRUTE_FORCE_KV),
        (
            "testcases_10_blocks_0_dynamic-programming.txt",
            DYNAMIC_PROGRAMMING_KV,
        ),
        ("testcases_10_blocks_0_greedy1.txt", GREEDY1_KV),
    ]
}

/// Writes every sample source into `dir`, creating it if needed.
///
/// Returns the written paths in file-name order.
pub fn write_sample_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut paths = Vec::new();
    for (name, contents) in sample_sources() {
        let path = dir.join(name);
        std::fs::write(&path, contents)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Figures the sample directory must produce.
pub mod expected {
    /// Source files in the sample directory.
    pub const SOURCES: usize = 6;
    /// Valid measurements across all sources.
    pub const MEASUREMENTS: usize = 8;
    /// Malformed records across all sources.
    pub const SKIPPED: usize = 1;
    /// Distinct (algorithm, size, category) groups.
    pub const GROUPS: usize = 8;
    /// Optimal table entries: (10, blocks) and (100, random).
    pub const OPTIMAL_ENTRIES: usize = 2;
    /// Quality records for heuristic groups with a baseline.
    pub const QUALITY_RECORDS: usize = 4;
    /// Heuristic groups without a baseline: greedy1 at (1000, random).
    pub const MISSING_BASELINE: usize = 1;

    /// greedy1 at (10, blocks): 20 / 26.
    pub const GREEDY1_BLOCKS_10_PCT: f64 = 100.0 * 20.0 / 26.0;
    /// greedy2 at (10, blocks): 24 / 26.
    pub const GREEDY2_BLOCKS_10_PCT: f64 = 100.0 * 24.0 / 26.0;
    /// greedy2 at (100, random): 900 / 1000.
    pub const GREEDY2_RANDOM_100_PCT: f64 = 90.0;
    /// greedy1 at (100, random): 850 / 1000.
    pub const GREEDY1_RANDOM_100_PCT: f64 = 85.0;
}
