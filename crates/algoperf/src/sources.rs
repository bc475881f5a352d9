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

//! Source discovery.

use crate::error::{AnalysisError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as measurement sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["txt", "csv"];

/// Lists the measurement sources directly inside `dir`.
///
/// The scan is not recursive. Only regular files with a `.txt` or `.csv`
/// extension (any case) are returned, sorted by path.
///
/// # Errors
///
/// Returns [`AnalysisError::Discovery`] if the directory cannot be read.
pub fn discover_sources(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let discovery_error = |e: std::io::Error| AnalysisError::Discovery {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_error)? {
        let path = entry.map_err(discovery_error)?.path();
        if path.is_file() && is_source(&path) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
