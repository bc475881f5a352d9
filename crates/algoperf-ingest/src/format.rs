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

//! Raw record shapes and format auto-detection.

use crate::category::CategoryMatcher;
use crate::columns::ColumnLayout;
use crate::error::IngestError;
use crate::record::RawRecord;
use crate::source::SourceContext;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// The raw shapes a measurement source may come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RecordFormat {
    /// `key: value` lines, one block per record; algorithm and size in the
    /// file name (`testcases_{n}_{id}_{algorithm}.txt`).
    KeyValue,
    /// `testcase,n,time_ms,memory_kb,result`; algorithm from the file name.
    Csv,
    /// Rows carrying explicit `algorithm` and `category` columns.
    CsvExplicit,
    /// Rows with time in seconds and memory in bytes.
    #[cfg_attr(feature = "serde", serde(rename = "csv-si"))]
    CsvSiUnits,
}

impl RecordFormat {
    /// Stable name used in hints and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::KeyValue => "key-value",
            RecordFormat::Csv => "csv",
            RecordFormat::CsvExplicit => "csv-explicit",
            RecordFormat::CsvSiUnits => "csv-si",
        }
    }

    /// Returns true for the comma-separated shapes.
    pub fn is_delimited(&self) -> bool {
        !matches!(self, RecordFormat::KeyValue)
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "key-value" | "keyvalue" | "kv" | "txt" => Ok(RecordFormat::KeyValue),
            "csv" | "csv-implicit" => Ok(RecordFormat::Csv),
            "csv-explicit" | "explicit" => Ok(RecordFormat::CsvExplicit),
            "csv-si" | "si" | "csv-seconds" => Ok(RecordFormat::CsvSiUnits),
            other => Err(IngestError::UnknownFormat(other.to_string())),
        }
    }
}

/// Rows inspected when choosing a layout for a headerless source.
const DETECTION_SAMPLE_ROWS: usize = 256;

/// Lines that are neither blank nor `#` comments.
fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// First line that is neither blank nor a `#` comment.
pub(crate) fn first_significant_line(text: &str) -> Option<&str> {
    significant_lines(text).next()
}

/// Picks the field separator from the first significant line.
pub(crate) fn sniff_delimiter(text: &str) -> u8 {
    let Some(line) = first_significant_line(text) else {
        return b',';
    };
    [b',', b'\t', b';']
        .into_iter()
        .max_by_key(|d| line.bytes().filter(|b| b == d).count())
        .filter(|d| line.as_bytes().contains(d))
        .unwrap_or(b',')
}

/// Infers the record shape of a source.
///
/// Key:value blocks are recognized by a `.txt` extension or a first line
/// containing `:` but no separator. Delimited sources are classified by
/// their header when they have one. Headerless sources get the positional
/// layout (implicit or explicit) under which more of the sampled rows
/// decode, so a malformed first row cannot decide the layout; a tie keeps
/// the implicit layout.
///
/// # Examples
///
/// ```
/// use algoperf_ingest::{detect_format, RecordFormat};
///
/// let kv = "n: 10\ntime_ms: 0.5\nmemory_kb: 0\nresult: 26\n";
/// assert_eq!(detect_format("testcases_10_blocks_0_greedy1.txt", kv), RecordFormat::KeyValue);
///
/// let si = "algorithm,testcase,category,n,time_s,memory_bytes,result\n";
/// assert_eq!(detect_format("runs.csv", si), RecordFormat::CsvSiUnits);
/// ```
pub fn detect_format(source_name: &str, text: &str) -> RecordFormat {
    let first = first_significant_line(text).unwrap_or("");
    let is_txt = Path::new(source_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    let looks_like_kv = first.contains(':') && !first.contains(',');

    let format = if looks_like_kv || (is_txt && !first.contains(',')) {
        RecordFormat::KeyValue
    } else {
        let delimiter = sniff_delimiter(text) as char;
        match ColumnLayout::from_header(first.split(delimiter)) {
            Some(layout) => layout.format(),
            None => classify_headerless(source_name, text, delimiter),
        }
    };

    debug!(source = source_name, format = %format, "detected record format");
    format
}

/// Picks the positional layout that accepts the most sampled rows.
fn classify_headerless(source_name: &str, text: &str, delimiter: char) -> RecordFormat {
    let source = SourceContext::new(source_name);
    let categories = CategoryMatcher::default();
    let implicit = ColumnLayout::implicit();
    let explicit = ColumnLayout::explicit();

    let (mut fits_implicit, mut fits_explicit) = (0usize, 0usize);
    for line in significant_lines(text).take(DETECTION_SAMPLE_ROWS) {
        let cells: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if accepts(&implicit, &cells, &source, &categories) {
            fits_implicit += 1;
        } else if accepts(&explicit, &cells, &source, &categories) {
            fits_explicit += 1;
        }
    }

    debug!(
        source = source_name,
        fits_implicit, fits_explicit, "classified headerless rows"
    );
    if fits_explicit > fits_implicit {
        RecordFormat::CsvExplicit
    } else {
        RecordFormat::Csv
    }
}

fn accepts(
    layout: &ColumnLayout,
    cells: &[&str],
    source: &SourceContext,
    categories: &CategoryMatcher,
) -> bool {
    if cells.len() != layout.width() {
        return false;
    }
    let mut record = RawRecord::default();
    for (index, value) in cells.iter().enumerate() {
        if let Some(column) = layout.column(index) {
            record.assign(column, value);
        }
    }
    record.into_measurement(source, categories).is_ok()
}
