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

//! Unit normalization for time and memory columns.
//!
//! Conversion happens once, while decoding; everything downstream sees
//! milliseconds and kilobytes only.

/// Unit of a raw time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Seconds.
    Seconds,
    /// Milliseconds (canonical).
    Milliseconds,
}

impl TimeUnit {
    /// Converts a raw value in this unit to milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use algoperf_ingest::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Seconds.to_millis(0.25), 250.0);
    /// assert_eq!(TimeUnit::Milliseconds.to_millis(250.0), 250.0);
    /// ```
    pub fn to_millis(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value * 1_000.0,
            TimeUnit::Milliseconds => value,
        }
    }
}

/// Unit of a raw memory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryUnit {
    /// Bytes.
    Bytes,
    /// Kilobytes (canonical, 1 KB = 1024 bytes).
    Kilobytes,
}

impl MemoryUnit {
    /// Converts a raw value in this unit to kilobytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use algoperf_ingest::MemoryUnit;
    ///
    /// assert_eq!(MemoryUnit::Bytes.to_kilobytes(3_670_016.0), 3584.0);
    /// ```
    pub fn to_kilobytes(self, value: f64) -> f64 {
        match self {
            MemoryUnit::Bytes => value / 1_024.0,
            MemoryUnit::Kilobytes => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_match_milliseconds() {
        for ms in [0.0, 0.001, 1.5, 12.0, 4_500.0] {
            let seconds = ms / 1_000.0;
            let converted = TimeUnit::Seconds.to_millis(seconds);
            assert!((converted - TimeUnit::Milliseconds.to_millis(ms)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bytes_to_kilobytes() {
        assert_eq!(MemoryUnit::Bytes.to_kilobytes(1024.0), 1.0);
        assert_eq!(MemoryUnit::Kilobytes.to_kilobytes(1024.0), 1024.0);
    }
}
