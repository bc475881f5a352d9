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

//! Raw measurement record parsing.
//!
//! Turns a raw measurement source into canonical
//! [`Measurement`](algoperf_core::Measurement)s. Four raw shapes are
//! recognized:
//!
//! | Format | Shape |
//! |--------|-------|
//! | [`RecordFormat::KeyValue`] | `n:`, `time_ms:`, `memory_kb:`, `result:` lines; algorithm from `testcases_{n}_{id}_{algorithm}.txt` |
//! | [`RecordFormat::Csv`] | `testcase,n,time_ms,memory_kb,result`; algorithm from the file name |
//! | [`RecordFormat::CsvExplicit`] | `algorithm,testcase,category,n,time_ms,memory_kb,result` |
//! | [`RecordFormat::CsvSiUnits`] | `algorithm,testcase,category,n,time_s,memory_bytes,result` |
//!
//! Delimited sources with a header row may order and name their columns
//! freely; units follow the header.
//!
//! Malformed records never fail a source. They are skipped, logged with
//! `tracing::warn!`, and listed in [`ParsedSource::skipped`].
//!
//! # Examples
//!
//! ```
//! use algoperf_ingest::{parse_str, ParseConfig};
//!
//! let text = "n: 10\ntime_ms: 0.05\nmemory_kb: 0\nresult: 20\n";
//! let parsed = parse_str("testcases_10_blocks_0_greedy1.txt", text, &ParseConfig::default());
//!
//! let m = &parsed.measurements[0];
//! assert_eq!(m.algorithm().as_str(), "greedy1");
//! assert_eq!(m.input_category().as_str(), "blocks");
//! assert_eq!(m.memory_kb(), None);
//! ```

mod category;
mod columns;
pub mod decode;
mod error;
mod format;
mod parser;
mod record;
mod source;
mod units;

pub use category::{CategoryMatcher, DEFAULT_CATEGORY_TOKENS};
pub use decode::{decoder_for, DelimitedDecoder, KeyValueDecoder, RecordDecoder};
pub use error::{IngestError, Result, SkipReason};
pub use format::{detect_format, RecordFormat};
pub use parser::{
    parse_path, parse_reader, parse_str, ParseConfig, DEFAULT_MAX_RECORDS,
    DEFAULT_MAX_SOURCE_BYTES,
};
pub use source::{ParsedSource, SkippedRecord, SourceContext};
pub use units::{MemoryUnit, TimeUnit};
