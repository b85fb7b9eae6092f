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

//! In-memory platform adapter.
//!
//! `MemoryRuntime` serves a fixed platform/device tree and a scripted build
//! outcome. It backs the test suite and the benches, and records the last
//! build it was asked to perform.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::runtime::info::{self, DeviceInfo, PlatformInfo};
use crate::runtime::{
    ClStatus, DeviceCatalog, DeviceId, InfoValue, PlatformId, ProgramCompiler, Result,
    RuntimeError,
};

/// A device description with an arbitrary property map.
#[derive(Clone, Debug)]
pub struct MemoryDevice {
    props: HashMap<DeviceInfo, InfoValue>,
}

impl MemoryDevice {
    /// A device that only knows its name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut props = HashMap::new();
        props.insert(DeviceInfo::Name, InfoValue::Text(name.into()));
        Self { props }
    }

    /// A GPU with every listed property populated.
    pub fn gpu(name: impl Into<String>, vendor_id: u32) -> Self {
        Self::new(name)
            .with(DeviceInfo::Type, InfoValue::Uint(info::DEVICE_TYPE_GPU))
            .with(DeviceInfo::VendorId, InfoValue::Uint(u64::from(vendor_id)))
            .with(DeviceInfo::Vendor, InfoValue::Text("Memory Devices Inc.".into()))
            .with(DeviceInfo::Version, InfoValue::Text("OpenCL 3.0".into()))
            .with(DeviceInfo::DriverVersion, InfoValue::Text("1.0.0".into()))
            .with(DeviceInfo::Profile, InfoValue::Text("FULL_PROFILE".into()))
            .with(DeviceInfo::OpenClCVersion, InfoValue::Text("OpenCL C 1.2".into()))
            .with(DeviceInfo::MaxClockFrequency, InfoValue::Uint(1500))
            .with(DeviceInfo::MaxComputeUnits, InfoValue::Uint(32))
            .with(DeviceInfo::ProfilingTimerResolution, InfoValue::Uint(1000))
            .with(DeviceInfo::EndianLittle, InfoValue::Bool(true))
            .with(
                DeviceInfo::SingleFpConfig,
                InfoValue::Uint(info::FP_DENORM | info::FP_INF_NAN | info::FP_ROUND_TO_NEAREST | info::FP_FMA),
            )
            .with(
                DeviceInfo::QueueProperties,
                InfoValue::Uint(info::QUEUE_PROFILING_ENABLE),
            )
            .with(DeviceInfo::MaxWorkGroupSize, InfoValue::Uint(1024))
            .with(DeviceInfo::MaxWorkItemSizes, InfoValue::Sizes(vec![1024, 1024, 64]))
            .with(DeviceInfo::PreferredVectorWidthChar, InfoValue::Uint(4))
            .with(DeviceInfo::PreferredVectorWidthFloat, InfoValue::Uint(1))
            .with(DeviceInfo::AddressBits, InfoValue::Uint(64))
            .with(DeviceInfo::MemBaseAddrAlign, InfoValue::Uint(4096))
            .with(DeviceInfo::MaxConstantBufferSize, InfoValue::Uint(64 * 1024))
            .with(DeviceInfo::LocalMemSize, InfoValue::Uint(48 * 1024))
            .with(DeviceInfo::GlobalMemSize, InfoValue::Uint(8 * 1024 * 1024 * 1024))
            .with(DeviceInfo::GlobalMemCacheType, InfoValue::Uint(info::CACHE_READ_WRITE))
            .with(DeviceInfo::GlobalMemCachelineSize, InfoValue::Uint(128))
            .with(DeviceInfo::GlobalMemCacheSize, InfoValue::Uint(2 * 1024 * 1024))
            .with(DeviceInfo::ImageSupport, InfoValue::Bool(true))
            .with(DeviceInfo::Image2dMaxWidth, InfoValue::Uint(16384))
            .with(DeviceInfo::Image2dMaxHeight, InfoValue::Uint(16384))
            .with(
                DeviceInfo::Extensions,
                InfoValue::Text("cl_khr_fp64 cl_khr_int64_base_atomics cl_khr_icd".into()),
            )
    }

    pub fn with(mut self, key: DeviceInfo, value: InfoValue) -> Self {
        self.props.insert(key, value);
        self
    }
}

#[derive(Clone, Debug)]
struct MemoryPlatform {
    name: String,
}

/// Outcome served by the next build.
#[derive(Clone, Debug)]
pub struct BuildScript {
    /// Status returned by the build; anything but success fails it.
    pub status: ClStatus,
    pub log: String,
    pub binary: Vec<u8>,
    /// Status returned when the binaries are fetched.
    pub binary_status: ClStatus,
}

impl Default for BuildScript {
    fn default() -> Self {
        Self {
            status: ClStatus::Success,
            log: String::new(),
            binary: b"\x7fELF memory binary".to_vec(),
            binary_status: ClStatus::Success,
        }
    }
}

/// What the last `build_program` call received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedBuild {
    pub device: DeviceId,
    pub sources: Vec<String>,
    pub options: String,
}

/// Scripted catalog and compiler.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    platforms: Vec<MemoryPlatform>,
    /// Flattened devices with the index of their owning platform.
    devices: Vec<(usize, MemoryDevice)>,
    default_device: Option<DeviceId>,
    script: BuildScript,
    last_build: RefCell<Option<RecordedBuild>>,
}

/// Program object of the in-memory adapter.
#[derive(Debug)]
pub struct MemoryProgram {
    device: DeviceId,
    sources: Vec<String>,
    built: Cell<bool>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a platform and its devices; device ids follow insertion order.
    pub fn with_platform(
        mut self,
        name: impl Into<String>,
        devices: impl IntoIterator<Item = MemoryDevice>,
    ) -> Self {
        let platform = self.platforms.len();
        self.platforms.push(MemoryPlatform { name: name.into() });
        self.devices
            .extend(devices.into_iter().map(|device| (platform, device)));
        self
    }

    /// Overrides the default device (the first device otherwise).
    pub fn with_default_device(mut self, device: DeviceId) -> Self {
        self.default_device = Some(device);
        self
    }

    pub fn with_build(mut self, script: BuildScript) -> Self {
        self.script = script;
        self
    }

    pub fn last_build(&self) -> Option<RecordedBuild> {
        self.last_build.borrow().clone()
    }

    fn device(&self, device: DeviceId) -> Result<&(usize, MemoryDevice)> {
        self.devices
            .get(device.0)
            .ok_or_else(|| RuntimeError::api("clGetDeviceInfo", ClStatus::InvalidDevice))
    }

    fn platform(&self, platform: PlatformId) -> Result<&MemoryPlatform> {
        self.platforms
            .get(platform.0)
            .ok_or_else(|| RuntimeError::api("clGetPlatformInfo", ClStatus::InvalidPlatform))
    }
}

impl DeviceCatalog for MemoryRuntime {
    fn platforms(&self) -> Result<Vec<PlatformId>> {
        Ok((0..self.platforms.len()).map(PlatformId).collect())
    }

    fn devices(&self, platform: PlatformId) -> Result<Vec<DeviceId>> {
        self.platform(platform)?;
        Ok(self
            .devices
            .iter()
            .enumerate()
            .filter(|(_, (owner, _))| *owner == platform.0)
            .map(|(index, _)| DeviceId(index))
            .collect())
    }

    fn default_device(&self) -> Result<DeviceId> {
        match self.default_device {
            Some(device) => Ok(device),
            None if !self.devices.is_empty() => Ok(DeviceId(0)),
            None => Err(RuntimeError::api("clGetDeviceIDs", ClStatus::DeviceNotFound)),
        }
    }

    fn device_platform(&self, device: DeviceId) -> Result<PlatformId> {
        self.device(device).map(|(owner, _)| PlatformId(*owner))
    }

    fn platform_info(&self, platform: PlatformId, key: PlatformInfo) -> Result<String> {
        let platform = self.platform(platform)?;
        match key {
            PlatformInfo::Name => Ok(platform.name.clone()),
            PlatformInfo::Vendor => Ok("Memory Devices Inc.".to_string()),
            PlatformInfo::Version => Ok("OpenCL 3.0 memory".to_string()),
        }
    }

    fn device_info(&self, device: DeviceId, key: DeviceInfo) -> Result<InfoValue> {
        let (owner, device) = self.device(device)?;
        if key == DeviceInfo::Platform {
            return Ok(InfoValue::Uint(*owner as u64));
        }
        device
            .props
            .get(&key)
            .cloned()
            .ok_or_else(|| RuntimeError::api("clGetDeviceInfo", ClStatus::InvalidValue))
    }
}

impl ProgramCompiler for MemoryRuntime {
    type Program<'a> = MemoryProgram;

    fn create_program(&self, device: DeviceId, sources: &[&str]) -> Result<MemoryProgram> {
        self.device(device)?;
        Ok(MemoryProgram {
            device,
            sources: sources.iter().map(|s| s.to_string()).collect(),
            built: Cell::new(false),
        })
    }

    fn build_program(&self, program: &MemoryProgram, device: DeviceId, options: &str) -> Result<()> {
        if program.device != device {
            return Err(RuntimeError::api("clBuildProgram", ClStatus::InvalidDevice));
        }
        *self.last_build.borrow_mut() = Some(RecordedBuild {
            device,
            sources: program.sources.clone(),
            options: options.to_string(),
        });
        if !self.script.status.is_success() {
            return Err(RuntimeError::api("clBuildProgram", self.script.status));
        }
        program.built.set(true);
        Ok(())
    }

    fn build_log(&self, _program: &MemoryProgram, _device: DeviceId) -> Result<String> {
        Ok(self.script.log.clone())
    }

    fn binary_sizes(&self, program: &MemoryProgram) -> Result<Vec<usize>> {
        if program.built.get() {
            Ok(vec![self.script.binary.len()])
        } else {
            Ok(vec![0])
        }
    }

    fn binaries(&self, program: &MemoryProgram, buffers: &mut [Vec<u8>]) -> Result<()> {
        if !self.script.binary_status.is_success() {
            return Err(RuntimeError::api("clGetProgramInfo", self.script.binary_status));
        }
        if !program.built.get() {
            return Err(RuntimeError::api("clGetProgramInfo", ClStatus::InvalidProgramExecutable));
        }
        match buffers {
            [only] if only.len() == self.script.binary.len() => {
                only.copy_from_slice(&self.script.binary);
                Ok(())
            }
            _ => Err(RuntimeError::api("clGetProgramInfo", ClStatus::InvalidValue)),
        }
    }
}
