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

//! Shared test fixtures and builders for algoperf crates.
//!
//! This crate provides canonical measurement sources in every raw shape the
//! parser accepts, malformed-record samples, and builders so that each
//! crate's tests work from the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use algoperf_test::fixtures;
//! use algoperf_test::fixtures::builders::MeasurementBuilder;
//!
//! // Canonical sources as (file name, text) pairs
//! for (name, text) in fixtures::sample_sources() {
//!     assert!(!text.is_empty(), "{} is empty", name);
//! }
//!
//! // Custom measurements
//! let m = MeasurementBuilder::new("greedy1").size(20).category("blocks").result(13.0).build();
//! assert_eq!(m.input_size(), 20);
//! ```

/// A list of named raw sources: (file name, contents).
pub type SourceList = Vec<(&'static str, &'static str)>;

/// Canonical raw sources, malformed samples and builders.
pub mod fixtures;

pub use fixtures::builders::{CsvSourceBuilder, MeasurementBuilder};
pub use fixtures::{expected, sample_sources, write_sample_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sources_have_unique_names() {
        let sources = sample_sources();
        let mut names: Vec<_> = sources.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), sources.len());
        assert_eq!(sources.len(), expected::SOURCES);
    }

    #[test]
    fn test_key_value_sources_follow_naming_scheme() {
        let pattern = regex::Regex::new(r"^testcases_\d+_.+_[^_]+\.txt$").unwrap();
        for (name, _) in sample_sources() {
            if name.ends_with(".txt") {
                assert!(pattern.is_match(name), "bad name {}", name);
            }
        }
    }

    #[test]
    fn test_write_sample_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("results");
        let paths = write_sample_dir(&target).unwrap();
        assert_eq!(paths.len(), expected::SOURCES);
        assert!(paths.iter().all(|p| p.exists() && p.starts_with(&target)));
    }
}
