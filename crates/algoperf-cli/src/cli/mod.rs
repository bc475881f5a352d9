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

//! Command-line interface definitions.

mod analysis;

use clap::Subcommand;

pub use analysis::AnalysisCommands;

#[derive(Subcommand)]
pub enum Commands {
    // Analysis commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - A source directory or file cannot be read
    /// - No valid measurements were found
    /// - The report cannot be written
    pub fn execute(self) -> Result<(), crate::error::CliError> {
        match self {
            Commands::Analysis(cmd) => cmd.execute(),
        }
    }
}
