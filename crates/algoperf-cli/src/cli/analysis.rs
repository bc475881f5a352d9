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

//! Analysis commands.

use crate::commands::{self, AnalyzeOptions};
use crate::error::CliError;
use algoperf::RecordFormat;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Analyze a directory of measurement results
    ///
    /// Reads every .txt and .csv file in the directory, aggregates the
    /// measurements per algorithm, input size and category, computes
    /// solution quality against the optimal algorithms and writes the
    /// chart datasets as JSON.
    Analyze {
        /// Directory holding measurement files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Report output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analysis configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Algorithms treated as optimal (comma-separated)
        #[arg(long, value_delimiter = ',')]
        optimal: Vec<String>,

        /// Input category tokens (comma-separated)
        #[arg(long = "category-token", value_delimiter = ',')]
        category_tokens: Vec<String>,

        /// Record format (key-value, csv, csv-explicit, csv-si); detected if omitted
        #[arg(short, long)]
        format: Option<RecordFormat>,

        /// Parse sources on a single thread
        #[arg(long)]
        serial: bool,

        /// Print the report JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Parse a single measurement file
    ///
    /// Shows the canonical measurements decoded from one file along with the
    /// records that were skipped and why.
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Record format (key-value, csv, csv-explicit, csv-si); detected if omitted
        #[arg(short, long)]
        format: Option<RecordFormat>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Analyze {
                dir,
                output,
                config,
                optimal,
                category_tokens,
                format,
                serial,
                json,
            } => commands::analyze(&AnalyzeOptions {
                dir,
                output,
                config,
                optimal,
                category_tokens,
                format,
                serial,
                json,
            }),
            AnalysisCommands::Parse { file, format, json } => commands::parse(&file, format, json),
        }
    }
}
