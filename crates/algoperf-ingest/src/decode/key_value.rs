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

//! `key: value` measurement blocks.

use super::RecordDecoder;
use crate::category::CategoryMatcher;
use crate::columns::Column;
use crate::format::RecordFormat;
use crate::parser::ParseConfig;
use crate::record::RawRecord;
use crate::source::{ParsedSource, SourceContext};
use tracing::{debug, warn};

/// Decodes `key: value` lines.
///
/// A block of consecutive non-blank lines is one record; blank lines
/// separate blocks. Keys use the same vocabulary as CSV headers, unknown
/// keys and lines without `:` are ignored.
#[derive(Debug, Clone)]
pub struct KeyValueDecoder {
    categories: CategoryMatcher,
    max_records: usize,
}

impl KeyValueDecoder {
    /// Creates a decoder configured from `config`.
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            categories: config.category_matcher(),
            max_records: config.max_records,
        }
    }

    fn finish(
        &self,
        block: Option<(u64, RawRecord)>,
        source: &SourceContext,
        parsed: &mut ParsedSource,
    ) {
        let Some((line, record)) = block else {
            return;
        };
        match record.into_measurement(source, &self.categories) {
            Ok(measurement) => parsed.measurements.push(measurement),
            Err(reason) => {
                warn!(source = source.name(), line, %reason, "skipping malformed record");
                parsed.skip(line, reason);
            }
        }
    }
}

impl RecordDecoder for KeyValueDecoder {
    fn format(&self) -> RecordFormat {
        RecordFormat::KeyValue
    }

    fn decode(&self, source: &SourceContext, text: &str) -> ParsedSource {
        let mut parsed = ParsedSource::new(source.name(), RecordFormat::KeyValue);
        let mut block: Option<(u64, RawRecord)> = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index as u64 + 1;
            let line = line.trim();

            if line.is_empty() {
                self.finish(block.take(), source, &mut parsed);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            if block.is_none() {
                if parsed.records_seen() >= self.max_records {
                    warn!(
                        source = source.name(),
                        limit = self.max_records,
                        "record limit reached, ignoring the rest of the source"
                    );
                    parsed.truncated = true;
                    return parsed;
                }
                block = Some((line_no, RawRecord::default()));
            }

            let Some((key, value)) = line.split_once(':') else {
                debug!(source = source.name(), line = line_no, "ignoring line without ':'");
                continue;
            };
            match Column::from_name(key) {
                Some(column) => {
                    if let Some((_, record)) = block.as_mut() {
                        record.assign(column, value);
                    }
                }
                None => debug!(source = source.name(), key, "ignoring unknown key"),
            }
        }

        self.finish(block, source, &mut parsed);
        parsed
    }
}
