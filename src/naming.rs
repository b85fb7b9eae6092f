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

//! Output file naming.
//!
//! When no output path is given the binary is named after the first input and
//! the target device's vendor: `dir/foo.cl` built for an NVIDIA device becomes
//! `foo.ptx`. Everything here is pure.

use std::fmt;
use std::path::PathBuf;

/// Names standard input as a source and standard output as a target.
pub const STREAM_SENTINEL: &str = "-";

/// Base name used when the first input is standard input.
pub const STDIN_BASE_NAME: &str = "stdin";

/// Kernel source suffix removed from the base name.
pub const SOURCE_EXTENSION: &str = ".cl";

pub const VENDOR_ID_INTEL: u32 = 0x8086;
pub const VENDOR_ID_NVIDIA: u32 = 0x10de;

/// Where the binary is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Picks the output target for an explicit `-o=` value or derives one.
pub fn output_target(explicit: Option<&str>, first_input: &str, vendor_id: u32) -> OutputTarget {
    match explicit {
        Some(STREAM_SENTINEL) => OutputTarget::Stdout,
        Some(path) if !path.is_empty() => OutputTarget::File(PathBuf::from(path)),
        _ => OutputTarget::File(PathBuf::from(default_output_name(first_input, vendor_id))),
    }
}

/// `BASE.SUFFIX` for the first input and the device vendor.
pub fn default_output_name(first_input: &str, vendor_id: u32) -> String {
    format!("{}.{}", base_name(first_input), vendor_suffix(vendor_id))
}

/// The input's file name without directories or the `.cl` suffix.
pub fn base_name(input: &str) -> &str {
    if input == STREAM_SENTINEL {
        return STDIN_BASE_NAME;
    }
    // Both separators are honoured on every host; the later one wins.
    let file = match input.rfind(|c| c == '/' || c == '\\') {
        Some(sep) => &input[sep + 1..],
        None => input,
    };
    file.strip_suffix(SOURCE_EXTENSION).unwrap_or(file)
}

/// Short binary-format suffix for known vendors, `XXXXbin` otherwise.
pub fn vendor_suffix(vendor_id: u32) -> String {
    match vendor_id {
        VENDOR_ID_NVIDIA => "ptx".to_string(),
        VENDOR_ID_INTEL => "elf".to_string(),
        other => format!("{other:04x}bin"),
    }
}
