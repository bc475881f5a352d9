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

//! Column vocabulary shared by the delimited and key:value decoders.

use crate::format::RecordFormat;
use crate::units::{MemoryUnit, TimeUnit};

/// A canonical field a raw column or key can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Algorithm,
    TestCase,
    Category,
    InputSize,
    Time(TimeUnit),
    Memory(MemoryUnit),
    Result,
}

impl Column {
    /// Resolves a header cell or key name, case-insensitively.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let column = match name.as_str() {
            "algorithm" | "algo" => Column::Algorithm,
            "testcase" | "test_case" | "case" | "input" | "input_file" => Column::TestCase,
            "category" | "input_category" | "input_type" => Column::Category,
            "n" | "size" | "input_size" => Column::InputSize,
            "time_ms" | "ms" | "elapsed_ms" => Column::Time(TimeUnit::Milliseconds),
            "time_s" | "time_sec" | "time_seconds" | "seconds" | "elapsed_s" => {
                Column::Time(TimeUnit::Seconds)
            }
            "memory_kb" | "mem_kb" | "kb" => Column::Memory(MemoryUnit::Kilobytes),
            "memory_bytes" | "mem_bytes" | "memory_b" | "bytes" => Column::Memory(MemoryUnit::Bytes),
            "result" | "result_value" | "value" | "objective" => Column::Result,
            _ => return None,
        };
        Some(column)
    }
}

/// Maps field positions to canonical columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnLayout {
    columns: Vec<Option<Column>>,
}

impl ColumnLayout {
    /// `testcase,n,time_ms,memory_kb,result`, algorithm from the file name.
    pub(crate) fn implicit() -> Self {
        Self::positional(&[
            Column::TestCase,
            Column::InputSize,
            Column::Time(TimeUnit::Milliseconds),
            Column::Memory(MemoryUnit::Kilobytes),
            Column::Result,
        ])
    }

    /// `algorithm,testcase,category,n,time_ms,memory_kb,result`.
    pub(crate) fn explicit() -> Self {
        Self::positional(&[
            Column::Algorithm,
            Column::TestCase,
            Column::Category,
            Column::InputSize,
            Column::Time(TimeUnit::Milliseconds),
            Column::Memory(MemoryUnit::Kilobytes),
            Column::Result,
        ])
    }

    /// `algorithm,testcase,category,n,time_s,memory_bytes,result`.
    pub(crate) fn si_units() -> Self {
        Self::positional(&[
            Column::Algorithm,
            Column::TestCase,
            Column::Category,
            Column::InputSize,
            Column::Time(TimeUnit::Seconds),
            Column::Memory(MemoryUnit::Bytes),
            Column::Result,
        ])
    }

    /// Positional preset for a format.
    pub(crate) fn for_format(format: RecordFormat) -> Self {
        match format {
            RecordFormat::CsvExplicit => Self::explicit(),
            RecordFormat::CsvSiUnits => Self::si_units(),
            RecordFormat::Csv | RecordFormat::KeyValue => Self::implicit(),
        }
    }

    fn positional(columns: &[Column]) -> Self {
        Self {
            columns: columns.iter().copied().map(Some).collect(),
        }
    }

    /// Builds a layout from a header row.
    ///
    /// Returns `None` unless the header names at least the size, time and
    /// result columns. Unknown header cells are ignored; a repeated column
    /// keeps its first position.
    pub(crate) fn from_header<'a, I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: Vec<Column> = Vec::new();
        let mut columns = Vec::new();

        for cell in cells {
            let column = Column::from_name(cell).filter(|c| !seen.contains(c));
            if let Some(c) = column {
                seen.push(c);
            }
            columns.push(column);
        }

        let has = |pred: fn(&Column) -> bool| seen.iter().any(pred);
        let complete = has(|c| matches!(c, Column::InputSize))
            && has(|c| matches!(c, Column::Time(_)))
            && has(|c| matches!(c, Column::Result));

        complete.then_some(Self { columns })
    }

    /// Number of fields a row must have.
    pub(crate) fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column at a field position.
    pub(crate) fn column(&self, index: usize) -> Option<Column> {
        self.columns.get(index).copied().flatten()
    }

    /// The raw shape this layout corresponds to.
    pub(crate) fn format(&self) -> RecordFormat {
        let mut explicit = false;
        for column in self.columns.iter().flatten() {
            match column {
                Column::Time(TimeUnit::Seconds) | Column::Memory(MemoryUnit::Bytes) => {
                    return RecordFormat::CsvSiUnits
                }
                Column::Algorithm => explicit = true,
                _ => {}
            }
        }
        if explicit {
            RecordFormat::CsvExplicit
        } else {
            RecordFormat::Csv
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_aliases() {
        assert_eq!(Column::from_name(" N "), Some(Column::InputSize));
        assert_eq!(
            Column::from_name("Time_S"),
            Some(Column::Time(TimeUnit::Seconds))
        );
        assert_eq!(Column::from_name("flux"), None);
    }

    #[test]
    fn test_header_layout_implicit() {
        let layout =
            ColumnLayout::from_header(["testcase", "n", "time_ms", "memory_kb", "result"]).unwrap();
        assert_eq!(layout, ColumnLayout::implicit());
        assert_eq!(layout.format(), RecordFormat::Csv);
    }

    #[test]
    fn test_header_layout_reordered_explicit() {
        let layout =
            ColumnLayout::from_header(["result", "algorithm", "category", "n", "time_ms"]).unwrap();
        assert_eq!(layout.width(), 5);
        assert_eq!(layout.column(0), Some(Column::Result));
        assert_eq!(layout.format(), RecordFormat::CsvExplicit);
    }

    #[test]
    fn test_header_layout_si() {
        let layout = ColumnLayout::from_header([
            "algorithm",
            "testcase",
            "category",
            "n",
            "time_s",
            "memory_bytes",
            "result",
        ])
        .unwrap();
        assert_eq!(layout.format(), RecordFormat::CsvSiUnits);
    }

    #[test]
    fn test_header_requires_core_columns() {
        assert!(ColumnLayout::from_header(["testcase", "n", "memory_kb"]).is_none());
        assert!(ColumnLayout::from_header(["t1", "10", "0.5", "0", "26"]).is_none());
    }

    #[test]
    fn test_unknown_header_cells_ignored() {
        let layout = ColumnLayout::from_header(["n", "host", "time_ms", "result"]).unwrap();
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.column(1), None);
    }
}
