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

//! Shared runtime surface types for compute platform adapters.

use crate::runtime::status::ClStatus;

/// Opaque reference to one compute platform.
///
/// The wrapped value is adapter-defined (a native handle for the OpenCL
/// adapter, an index for the in-memory one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlatformId(pub usize);

/// Opaque reference to one compute device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeviceId(pub usize);

/// A device or platform property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoValue {
    Text(String),
    /// Unsigned integers of any native width, including bitfields and enums.
    Uint(u64),
    Sizes(Vec<usize>),
    Bool(bool),
}

impl InfoValue {
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            InfoValue::Uint(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InfoValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in mismatch reports.
    pub fn shape(&self) -> &'static str {
        match self {
            InfoValue::Text(_) => "text",
            InfoValue::Uint(_) => "integer",
            InfoValue::Sizes(_) => "size list",
            InfoValue::Bool(_) => "boolean",
        }
    }
}

/// Structured error for platform adapters.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The native compute library could not be loaded or is incomplete.
    #[error("OpenCL runtime unavailable: {0}")]
    Unavailable(String),
    /// A native call reported a non-success status.
    #[error("{call}: {status}")]
    Api { call: &'static str, status: ClStatus },
    /// A native call returned data of an unexpected shape.
    #[error("{call}: {detail}")]
    Malformed { call: &'static str, detail: String },
}

impl RuntimeError {
    pub fn api(call: &'static str, status: ClStatus) -> Self {
        RuntimeError::Api { call, status }
    }

    /// The native status carried by an [`RuntimeError::Api`] failure.
    pub fn status(&self) -> Option<ClStatus> {
        match self {
            RuntimeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
