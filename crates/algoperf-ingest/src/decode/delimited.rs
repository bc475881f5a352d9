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

//! Delimited rows (comma, tab or semicolon separated).

use super::RecordDecoder;
use crate::category::CategoryMatcher;
use crate::columns::ColumnLayout;
use crate::error::SkipReason;
use crate::format::{sniff_delimiter, RecordFormat};
use crate::parser::ParseConfig;
use crate::record::RawRecord;
use crate::source::{ParsedSource, SourceContext};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

/// Decodes delimited rows.
///
/// A first row that names the size, time and result columns is a header
/// and fixes the layout for the rest of the source. Otherwise the
/// positional layout of the configured format applies.
#[derive(Debug, Clone)]
pub struct DelimitedDecoder {
    format: RecordFormat,
    delimiter: Option<u8>,
    categories: CategoryMatcher,
    max_records: usize,
}

impl DelimitedDecoder {
    /// Creates a decoder for one of the delimited formats.
    pub fn new(format: RecordFormat, config: &ParseConfig) -> Self {
        Self {
            format,
            delimiter: config.delimiter.and_then(|c| u8::try_from(c).ok()),
            categories: config.category_matcher(),
            max_records: config.max_records,
        }
    }

    fn decode_row(
        &self,
        layout: &ColumnLayout,
        row: &StringRecord,
        source: &SourceContext,
    ) -> Result<algoperf_core::Measurement, SkipReason> {
        if row.len() != layout.width() {
            return Err(SkipReason::FieldCount {
                expected: layout.width(),
                actual: row.len(),
            });
        }
        let mut record = RawRecord::default();
        for (index, value) in row.iter().enumerate() {
            if let Some(column) = layout.column(index) {
                record.assign(column, value);
            }
        }
        record.into_measurement(source, &self.categories)
    }
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

impl RecordDecoder for DelimitedDecoder {
    fn format(&self) -> RecordFormat {
        self.format
    }

    fn decode(&self, source: &SourceContext, text: &str) -> ParsedSource {
        let delimiter = self.delimiter.unwrap_or_else(|| sniff_delimiter(text));
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut parsed = ParsedSource::new(source.name(), self.format);
        let mut layout: Option<ColumnLayout> = None;

        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    let line = err.position().map(|p| p.line()).unwrap_or(0);
                    let reason = SkipReason::Csv(err.to_string());
                    warn!(source = source.name(), line, %reason, "skipping malformed record");
                    parsed.skip(line, reason);
                    continue;
                }
            };

            if row.len() == 1 && row[0].is_empty() {
                continue;
            }

            if layout.is_none() {
                if let Some(header) = ColumnLayout::from_header(row.iter()) {
                    debug!(source = source.name(), format = %header.format(), "using header layout");
                    parsed.format = header.format();
                    layout = Some(header);
                    continue;
                }
            }
            let layout = layout.get_or_insert_with(|| ColumnLayout::for_format(self.format));

            if parsed.records_seen() >= self.max_records {
                warn!(
                    source = source.name(),
                    limit = self.max_records,
                    "record limit reached, ignoring the rest of the source"
                );
                parsed.truncated = true;
                break;
            }

            let line = line_of(&row);
            match self.decode_row(layout, &row, source) {
                Ok(measurement) => parsed.measurements.push(measurement),
                Err(reason) => {
                    warn!(source = source.name(), line, %reason, "skipping malformed record");
                    parsed.skip(line, reason);
                }
            }
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(format: RecordFormat, name: &str, text: &str) -> ParsedSource {
        DelimitedDecoder::new(format, &ParseConfig::default()).decode(&SourceContext::new(name), text)
    }

    #[test]
    fn test_implicit_rows() {
        let text = "testcases_10_blocks_0,10,0.04,0,24\ntestcases_100_random_1,100,1.2,128,900\n";
        let parsed = decode(RecordFormat::Csv, "greedy2.csv", text);
        assert_eq!(parsed.measurements.len(), 2);
        assert_eq!(parsed.measurements[1].input_category().as_str(), "random");
        assert_eq!(parsed.measurements[1].memory_kb(), Some(128.0));
        assert!(parsed.measurements.iter().all(|m| m.algorithm().as_str() == "greedy2"));
    }

    #[test]
    fn test_short_row_is_skipped() {
        let text = "a_random,1,1,0,1\na_random,2,1,0,1\na_random,3\na_random,4,1,0,1\na_random,5,1,0,1\n";
        let parsed = decode(RecordFormat::Csv, "greedy1.csv", text);
        assert_eq!(parsed.measurements.len(), 4);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 3);
        assert_eq!(
            parsed.skipped[0].reason,
            SkipReason::FieldCount {
                expected: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn test_header_reorders_columns() {
        let text = "result,n,algorithm,time_s,category\n42,8,greedy1,0.25,blocks\n";
        let parsed = decode(RecordFormat::Csv, "mixed.csv", text);
        assert_eq!(parsed.format, RecordFormat::CsvSiUnits);
        let m = &parsed.measurements[0];
        assert_eq!(m.time_ms(), 250.0);
        assert_eq!(m.input_size(), 8);
        assert_eq!(m.result_value(), 42.0);
        assert_eq!(m.input_category().as_str(), "blocks");
    }

    #[test]
    fn test_explicit_category_column_wins() {
        let text = "greedy1,testcases_10_random_0,blocks,10,1,0,5\n";
        let parsed = decode(RecordFormat::CsvExplicit, "runs.csv", text);
        assert_eq!(parsed.measurements[0].input_category().as_str(), "blocks");
    }

    #[test]
    fn test_si_positional_layout() {
        let text = "greedy1,testcases_1000_random_0,random,1000,0.5,1048576,9000\n";
        let parsed = decode(RecordFormat::CsvSiUnits, "runs_si.csv", text);
        let m = &parsed.measurements[0];
        assert_eq!(m.time_ms(), 500.0);
        assert_eq!(m.memory_kb(), Some(1024.0));
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let text = "# header comment\n\n   \nt_blocks,1,1,0,1\n";
        let parsed = decode(RecordFormat::Csv, "greedy1.csv", text);
        assert_eq!(parsed.measurements.len(), 1);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_tab_delimited() {
        let text = "testcase\tn\ttime_ms\tmemory_kb\tresult\nt_random\t3\t0.1\t\t7\n";
        let parsed = decode(RecordFormat::Csv, "greedy2.tsv", text);
        assert_eq!(parsed.measurements.len(), 1);
        assert_eq!(parsed.measurements[0].memory_kb(), None);
    }

    #[test]
    fn test_record_limit_truncates() {
        let config = ParseConfig {
            max_records: 2,
            ..ParseConfig::default()
        };
        let text = "t,1,1,0,1\nt,2,1,0,1\nt,3,1,0,1\n";
        let parsed = DelimitedDecoder::new(RecordFormat::Csv, &config)
            .decode(&SourceContext::new("greedy1.csv"), text);
        assert_eq!(parsed.measurements.len(), 2);
        assert!(parsed.truncated);
    }
}
