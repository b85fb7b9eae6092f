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

//! Compute platform abstractions.
//!
//! The rest of the crate talks to the platform only through [`DeviceCatalog`]
//! and [`ProgramCompiler`]. [`opencl::OpenClRuntime`] implements them over the
//! native OpenCL loader; [`memory::MemoryRuntime`] is a scripted in-memory
//! implementation for tests and benches.

pub mod info;
pub mod memory;
pub mod opencl;
pub mod status;
pub mod types;

pub use info::{DeviceInfo, InfoShape, PlatformInfo};
pub use status::ClStatus;
pub use types::{DeviceId, InfoValue, PlatformId, Result, RuntimeError};

/// Read-only view of the platform/device tree.
pub trait DeviceCatalog {
    /// All platforms, in enumeration order.
    fn platforms(&self) -> Result<Vec<PlatformId>>;

    /// All devices of every type on `platform`, in enumeration order.
    fn devices(&self, platform: PlatformId) -> Result<Vec<DeviceId>>;

    /// The implementation-designated default device.
    fn default_device(&self) -> Result<DeviceId>;

    /// The platform a device belongs to.
    fn device_platform(&self, device: DeviceId) -> Result<PlatformId>;

    fn platform_info(&self, platform: PlatformId, key: PlatformInfo) -> Result<String>;

    fn device_info(&self, device: DeviceId, key: DeviceInfo) -> Result<InfoValue>;

    fn platform_name(&self, platform: PlatformId) -> Result<String> {
        self.platform_info(platform, PlatformInfo::Name)
    }

    fn device_name(&self, device: DeviceId) -> Result<String> {
        self.device_text(device, DeviceInfo::Name)
    }

    fn device_text(&self, device: DeviceId, key: DeviceInfo) -> Result<String> {
        match self.device_info(device, key)? {
            InfoValue::Text(text) => Ok(text),
            other => Err(shape_mismatch(key, "text", &other)),
        }
    }

    fn device_uint(&self, device: DeviceId, key: DeviceInfo) -> Result<u64> {
        let value = self.device_info(device, key)?;
        value
            .as_uint()
            .ok_or_else(|| shape_mismatch(key, "integer", &value))
    }

    fn device_sizes(&self, device: DeviceId, key: DeviceInfo) -> Result<Vec<usize>> {
        match self.device_info(device, key)? {
            InfoValue::Sizes(sizes) => Ok(sizes),
            other => Err(shape_mismatch(key, "size list", &other)),
        }
    }

    fn device_bool(&self, device: DeviceId, key: DeviceInfo) -> Result<bool> {
        let value = self.device_info(device, key)?;
        value
            .as_bool()
            .ok_or_else(|| shape_mismatch(key, "boolean", &value))
    }
}

/// Program construction, compilation and binary retrieval for one device.
pub trait ProgramCompiler: DeviceCatalog {
    /// A program object together with the context that owns it.
    type Program<'a>
    where
        Self: 'a;

    /// Creates a context bound to `device` and a program holding each source
    /// as its own unit.
    fn create_program(&self, device: DeviceId, sources: &[&str]) -> Result<Self::Program<'_>>;

    /// Compiles and links `program` for `device`.
    fn build_program(
        &self,
        program: &Self::Program<'_>,
        device: DeviceId,
        options: &str,
    ) -> Result<()>;

    fn build_log(&self, program: &Self::Program<'_>, device: DeviceId) -> Result<String>;

    /// One size per device the program was built for.
    fn binary_sizes(&self, program: &Self::Program<'_>) -> Result<Vec<usize>>;

    /// Copies the binaries into `buffers`, which the caller sizes from
    /// [`ProgramCompiler::binary_sizes`].
    fn binaries(&self, program: &Self::Program<'_>, buffers: &mut [Vec<u8>]) -> Result<()>;
}

fn shape_mismatch(key: DeviceInfo, expected: &str, found: &InfoValue) -> RuntimeError {
    RuntimeError::Malformed {
        call: "clGetDeviceInfo",
        detail: format!(
            "{}: expected {expected}, found {}",
            key.label(),
            found.shape()
        ),
    }
}
