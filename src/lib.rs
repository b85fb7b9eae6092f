// Copyright 2025 STARGA Inc.
// Licensed under the Apache License, Version 2.0 (the “License”);
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an “AS IS” BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Part of clc, the OpenCL offline compiler.

//! `clc`: offline OpenCL kernel compiler.
//!
//! Selects a compute device by name, builds kernel sources with the device's
//! compiler and returns the device binary so it can be saved ahead of time.
pub mod cli;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod inspect;
pub mod io;
pub mod naming;
pub mod pipeline;
pub mod resolve;
pub mod runtime;

pub use cli::{parse_args, Command, Mode, Options, Verbosity};
pub use driver::{execute, Outcome};
pub use error::{ClcError, Result};
pub use naming::OutputTarget;
pub use pipeline::{build_binary, BuildRequest, SourceUnit};
pub use resolve::{resolve_device, DeviceMatch, SelectionCriterion};
pub use runtime::{ClStatus, DeviceCatalog, ProgramCompiler};
