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

//! Format-specific record decoders.
//!
//! Every raw shape is decoded behind [`RecordDecoder`]; [`decoder_for`]
//! picks the implementation for a detected or hinted format.

mod delimited;
mod key_value;

pub use delimited::DelimitedDecoder;
pub use key_value::KeyValueDecoder;

use crate::format::RecordFormat;
use crate::parser::ParseConfig;
use crate::source::{ParsedSource, SourceContext};

/// Turns the text of one source into canonical measurements.
///
/// Decoders never fail: a record that cannot be decoded is reported in
/// [`ParsedSource::skipped`] and decoding moves on to the next one.
pub trait RecordDecoder: Send + Sync {
    /// The raw shape this decoder reads.
    fn format(&self) -> RecordFormat;

    /// Decodes every record in `text`.
    fn decode(&self, source: &SourceContext, text: &str) -> ParsedSource;
}

/// Returns the decoder for `format`, configured from `config`.
pub fn decoder_for(format: RecordFormat, config: &ParseConfig) -> Box<dyn RecordDecoder> {
    match format {
        RecordFormat::KeyValue => Box::new(KeyValueDecoder::new(config)),
        RecordFormat::Csv | RecordFormat::CsvExplicit | RecordFormat::CsvSiUnits => {
            Box::new(DelimitedDecoder::new(format, config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_for_each_format() {
        let config = ParseConfig::default();
        for format in [
            RecordFormat::KeyValue,
            RecordFormat::Csv,
            RecordFormat::CsvExplicit,
            RecordFormat::CsvSiUnits,
        ] {
            assert_eq!(decoder_for(format, &config).format(), format);
        }
    }
}
