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

//! Error taxonomy for a `clc` run.
//!
//! Every variant is fatal; the `Display` text is the message printed after the
//! program name.

use std::fmt;
use std::io;

use crate::resolve::DeviceMatch;
use crate::runtime::{ClStatus, RuntimeError};

#[derive(Debug, thiserror::Error)]
pub enum ClcError {
    /// Malformed, duplicate or unknown flags, or missing inputs.
    #[error("{0}")]
    Usage(String),
    /// A platform or device query failed.
    #[error(transparent)]
    Query(#[from] RuntimeError),
    #[error("-d={criterion}: unable to find matching device")]
    NoMatchingDevice { criterion: String },
    #[error("-d={criterion}: matches multiple devices\n{}", MatchList(.matches))]
    AmbiguousDevice {
        criterion: String,
        matches: Vec<DeviceMatch>,
    },
    #[error("during build: {status}:\n{log}")]
    BuildFailed { status: ClStatus, log: String },
    #[error("clGetProgramInfo(..CL_PROGRAM_BINARIES..): {status}")]
    BinaryRetrievalFailed { status: ClStatus },
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ClcError {
    pub fn usage(message: impl Into<String>) -> Self {
        ClcError::Usage(message.into())
    }

    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        ClcError::Io {
            path: path.into(),
            source,
        }
    }

    /// Usage errors are followed by the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, ClcError::Usage(_))
    }
}

struct MatchList<'a>(&'a [DeviceMatch]);

impl fmt::Display for MatchList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.0 {
            writeln!(f, "  - {}  (from {})", m.name, m.platform)?;
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, ClcError>;
