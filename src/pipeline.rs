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

//! Build orchestration: compile the loaded sources for the selected device and
//! fetch the resulting binary.

use log::{debug, info, warn};

use crate::error::{ClcError, Result};
use crate::runtime::{DeviceId, ProgramCompiler, RuntimeError};

/// Token whose presence in a successful build log marks it as a warning.
pub const WARNING_MARKER: &str = "warning";

/// One compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    /// File path, or `stdin`.
    pub name: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Sources plus the build options handed to the device compiler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildRequest {
    pub sources: Vec<SourceUnit>,
    pub options: String,
}

impl BuildRequest {
    pub fn new(sources: Vec<SourceUnit>, build_options: &[String]) -> Self {
        Self {
            sources,
            options: join_build_options(build_options),
        }
    }
}

/// Joins repeated `-b=` values with single spaces, keeping their order.
pub fn join_build_options(options: &[String]) -> String {
    options.join(" ")
}

/// How a successful build's log is surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSeverity {
    /// Shown at the default verbosity.
    Warning,
    /// Shown only with `-v`.
    Verbose,
}

pub fn classify_build_log(log: &str) -> LogSeverity {
    if log.contains(WARNING_MARKER) {
        LogSeverity::Warning
    } else {
        LogSeverity::Verbose
    }
}

/// Result of a successful build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildProducts {
    pub binary: Vec<u8>,
    pub log: String,
    pub severity: LogSeverity,
}

/// Compiles `request` for `device` and returns its binary.
pub fn build_binary<C: ProgramCompiler>(
    api: &C,
    device: DeviceId,
    request: &BuildRequest,
) -> Result<BuildProducts> {
    for unit in &request.sources {
        debug!("adding source unit {} ({} bytes)", unit.name, unit.text.len());
    }
    let texts: Vec<&str> = request.sources.iter().map(|s| s.text.as_str()).collect();
    let program = api.create_program(device, &texts)?;

    debug!("building with options \"{}\"", request.options);
    if let Err(err) = api.build_program(&program, device, &request.options) {
        let status = match err {
            RuntimeError::Api { status, .. } => status,
            other => return Err(other.into()),
        };
        // The log is best effort here; the build status is what gets reported.
        let log = api.build_log(&program, device).unwrap_or_default();
        return Err(ClcError::BuildFailed { status, log });
    }

    let log = api.build_log(&program, device)?;
    let severity = classify_build_log(&log);
    match severity {
        LogSeverity::Warning => warn!("warnings during build:\n{log}"),
        LogSeverity::Verbose => info!("build log:\n{log}"),
    }

    let binary = fetch_binary(api, &program)?;
    Ok(BuildProducts {
        binary,
        log,
        severity,
    })
}

fn fetch_binary<C: ProgramCompiler>(api: &C, program: &C::Program<'_>) -> Result<Vec<u8>> {
    let sizes = api.binary_sizes(program).map_err(retrieval_error)?;
    if sizes.len() != 1 {
        return Err(RuntimeError::Malformed {
            call: "clGetProgramInfo",
            detail: format!("expected one binary, got {}", sizes.len()),
        }
        .into());
    }
    let mut buffers: Vec<Vec<u8>> = sizes.iter().map(|&size| vec![0u8; size]).collect();
    api.binaries(program, &mut buffers).map_err(retrieval_error)?;
    debug!("fetched {} byte binary", sizes[0]);
    Ok(buffers.swap_remove(0))
}

fn retrieval_error(err: RuntimeError) -> ClcError {
    match err {
        RuntimeError::Api { status, .. } => ClcError::BinaryRetrievalFailed { status },
        other => other.into(),
    }
}
