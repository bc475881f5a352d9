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

//! Command-line front end for algoperf.
//!
//! The binary is `algoperf`; this library exposes its commands so they can be
//! driven from tests or other tools.
//!
//! # Commands
//!
//! - `analyze DIR` - run the full pipeline over a directory and write the
//!   chart datasets as JSON
//! - `parse FILE` - decode one source and show its measurements and skipped
//!   records
//!
//! # Environment
//!
//! - `ALGOPERF_MAX_FILE_SIZE` - maximum size of one source in bytes
//!   (default 1 GB)
//! - `RUST_LOG` - log filter, e.g. `algoperf=debug`

pub mod cli;
pub mod commands;
pub mod error;
