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

//! Source-level parsing entry points.

use crate::category::{CategoryMatcher, DEFAULT_CATEGORY_TOKENS};
use crate::decode::decoder_for;
use crate::error::{IngestError, Result};
use crate::format::{detect_format, RecordFormat};
use crate::source::{ParsedSource, SourceContext};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Default cap on records read from one source.
pub const DEFAULT_MAX_RECORDS: usize = 1_000_000;

/// Default cap on the size of one source (1 GB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 1024 * 1024 * 1024;

/// Parsing options shared by every source of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ParseConfig {
    /// Format to use instead of detection.
    pub format: Option<RecordFormat>,
    /// Tokens recognized as input categories in test-case names.
    pub category_tokens: Vec<String>,
    /// Field separator for delimited sources; sniffed when absent.
    pub delimiter: Option<char>,
    /// Records read from one source before the rest is ignored.
    pub max_records: usize,
    /// Largest source accepted by [`parse_path`], in bytes.
    pub max_source_bytes: u64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            format: None,
            category_tokens: DEFAULT_CATEGORY_TOKENS.iter().map(|t| t.to_string()).collect(),
            delimiter: None,
            max_records: DEFAULT_MAX_RECORDS,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

impl ParseConfig {
    /// Category matcher for the configured tokens.
    pub fn category_matcher(&self) -> CategoryMatcher {
        CategoryMatcher::new(&self.category_tokens)
    }

    /// The hinted format, or the one detected from the source.
    pub fn resolve_format(&self, source_name: &str, text: &str) -> RecordFormat {
        self.format
            .unwrap_or_else(|| detect_format(source_name, text))
    }
}

/// Parses in-memory text.
///
/// Never fails: malformed records are reported in
/// [`ParsedSource::skipped`].
///
/// # Examples
///
/// ```
/// use algoperf_ingest::{parse_str, ParseConfig, RecordFormat};
///
/// let text = "testcases_10_blocks_0,10,0.04,0,24\ntestcases_10_blocks_0,10\n";
/// let parsed = parse_str("greedy2.csv", text, &ParseConfig::default());
///
/// assert_eq!(parsed.format, RecordFormat::Csv);
/// assert_eq!(parsed.measurements.len(), 1);
/// assert_eq!(parsed.skipped.len(), 1);
/// ```
pub fn parse_str(source_name: &str, text: &str, config: &ParseConfig) -> ParsedSource {
    let format = config.resolve_format(source_name, text);
    let context = SourceContext::new(source_name);
    let parsed = decoder_for(format, config).decode(&context, text);

    debug!(
        source = source_name,
        format = %parsed.format,
        measurements = parsed.measurements.len(),
        skipped = parsed.skipped.len(),
        "parsed source"
    );
    parsed
}

/// Parses a source from any reader.
///
/// # Errors
///
/// Returns [`IngestError::SourceUnavailable`] if reading fails, the content
/// is not UTF-8, or it exceeds `max_source_bytes`.
pub fn parse_reader<R: Read>(
    source_name: &str,
    reader: R,
    config: &ParseConfig,
) -> Result<ParsedSource> {
    let mut bytes = Vec::new();
    reader
        .take(config.max_source_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| IngestError::unavailable(source_name, &e))?;

    if bytes.len() as u64 > config.max_source_bytes {
        return Err(too_large(source_name, bytes.len() as u64, config));
    }

    let text = String::from_utf8(bytes).map_err(|e| IngestError::SourceUnavailable {
        source_name: source_name.to_string(),
        reason: format!("invalid UTF-8: {}", e.utf8_error()),
    })?;

    Ok(parse_str(source_name, &text, config))
}

/// Parses a file.
///
/// The file size is checked before anything is read.
///
/// # Errors
///
/// Returns [`IngestError::SourceUnavailable`] if the file cannot be opened
/// or read, is not UTF-8, or is larger than `max_source_bytes`.
pub fn parse_path(path: impl AsRef<Path>, config: &ParseConfig) -> Result<ParsedSource> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|e| IngestError::unavailable(&name, &e))?;
    if metadata.len() > config.max_source_bytes {
        return Err(too_large(&name, metadata.len(), config));
    }

    let file = fs::File::open(path).map_err(|e| IngestError::unavailable(&name, &e))?;
    let parsed = parse_reader(&name, file, config)?;
    if parsed.is_empty() {
        warn!(source = %name, "source produced no valid measurements");
    }
    Ok(parsed)
}

fn too_large(source_name: &str, size: u64, config: &ParseConfig) -> IngestError {
    IngestError::SourceUnavailable {
        source_name: source_name.to_string(),
        reason: format!(
            "source is too large ({} bytes, limit {} bytes)",
            size, config.max_source_bytes
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.format, None);
        assert_eq!(config.category_tokens, vec!["random", "blocks"]);
        assert_eq!(config.max_records, 1_000_000);
    }

    #[test]
    fn test_hint_overrides_detection() {
        let config = ParseConfig {
            format: Some(RecordFormat::CsvExplicit),
            ..ParseConfig::default()
        };
        let parsed = parse_str("greedy1.csv", "greedy2,t_random,random,4,1,0,3\n", &config);
        assert_eq!(parsed.format, RecordFormat::CsvExplicit);
        assert_eq!(parsed.measurements[0].algorithm().as_str(), "greedy2");
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x6e, 0x3a, 0xff, 0xfe];
        let err = parse_reader("bad.txt", bytes, &ParseConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_reader_size_limit() {
        let config = ParseConfig {
            max_source_bytes: 4,
            ..ParseConfig::default()
        };
        let err = parse_reader("big.csv", "t,1,1,0,1\n".as_bytes(), &config).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_missing_path_is_unavailable() {
        let err = parse_path("/definitely/not/here.csv", &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::SourceUnavailable { .. }));
    }
}
