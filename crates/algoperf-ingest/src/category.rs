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

//! Input category inference from test-case identifiers.

use algoperf_core::InputCategory;
use tracing::debug;

/// Default category tokens produced by the test-input generator.
pub const DEFAULT_CATEGORY_TOKENS: &[&str] = &["random", "blocks"];

/// Maps a test-case identifier to an input category.
///
/// The identifier is split on every non-alphanumeric character and the
/// first token equal (ignoring case) to a configured category wins.
///
/// # Examples
///
/// ```
/// use algoperf_ingest::CategoryMatcher;
///
/// let matcher = CategoryMatcher::default();
/// assert_eq!(matcher.classify(Some("testcases_100_random_1")).as_str(), "random");
/// assert_eq!(matcher.classify(Some("testcases_5_sparse_0")).as_str(), "unknown");
/// assert!(matcher.classify(None).is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatcher {
    categories: Vec<InputCategory>,
}

impl CategoryMatcher {
    /// Builds a matcher from raw tokens; blank tokens are ignored.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<InputCategory> = Vec::new();
        for token in tokens {
            if let Ok(category) = InputCategory::new(token) {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        Self { categories }
    }

    /// Categories this matcher recognizes, in priority order.
    pub fn categories(&self) -> &[InputCategory] {
        &self.categories
    }

    /// Category of a test case, or `unknown`.
    pub fn classify(&self, test_case: Option<&str>) -> InputCategory {
        let Some(test_case) = test_case else {
            return InputCategory::unknown();
        };

        for token in test_case
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if let Some(found) = self
                .categories
                .iter()
                .find(|c| c.as_str().eq_ignore_ascii_case(token))
            {
                return found.clone();
            }
        }

        debug!(test_case, "no category token found");
        InputCategory::unknown()
    }
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_TOKENS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_separators() {
        let matcher = CategoryMatcher::default();
        assert_eq!(matcher.classify(Some("case-blocks.7")).as_str(), "blocks");
        assert_eq!(matcher.classify(Some("TESTCASES_3_BLOCKS_1")).as_str(), "blocks");
    }

    #[test]
    fn test_token_must_match_whole() {
        let matcher = CategoryMatcher::default();
        assert!(matcher.classify(Some("testcases_10_randomized_0")).is_unknown());
    }

    #[test]
    fn test_first_matching_token_wins() {
        let matcher = CategoryMatcher::new(["random", "blocks"]);
        assert_eq!(matcher.classify(Some("blocks_random")).as_str(), "blocks");
    }

    #[test]
    fn test_custom_tokens() {
        let matcher = CategoryMatcher::new(["sorted", " ", "Sorted"]);
        assert_eq!(matcher.categories().len(), 1);
        assert_eq!(matcher.classify(Some("t_sorted_2")).as_str(), "sorted");
        assert!(matcher.classify(Some("t_random_2")).is_unknown());
    }
}
