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

//! Native OpenCL adapter over `opencl3`.
//!
//! `opencl3` is built with its `dynamic` feature, so the ICD loader is opened
//! at run time and the crate builds and tests on machines without an OpenCL
//! installation.

use std::cell::RefCell;

use log::debug;
use opencl3::context::Context;
use opencl3::device::{get_device_info, Device};
use opencl3::error_codes::ClError;
use opencl3::platform::{get_platforms, Platform};
use opencl3::program::Program;
use opencl3::types::{cl_device_id, cl_int};

use crate::runtime::info::{self, DeviceInfo, InfoShape, PlatformInfo};
use crate::runtime::{
    ClStatus, DeviceCatalog, DeviceId, InfoValue, PlatformId, ProgramCompiler, Result,
    RuntimeError,
};

/// Platforms found through the ICD loader.
pub struct OpenClRuntime {
    platforms: Vec<Platform>,
}

/// A program and the single-device context that owns it.
pub struct OpenClProgram {
    program: RefCell<Program>,
    // Released after the program.
    _context: Context,
}

impl OpenClRuntime {
    /// Opens the ICD loader and enumerates its platforms.
    pub fn load() -> Result<Self> {
        let platforms = match get_platforms() {
            Ok(platforms) => platforms,
            Err(err) if ClStatus::from_code(err.0) == ClStatus::PlatformNotFound => Vec::new(),
            Err(err) => {
                return Err(RuntimeError::Unavailable(format!(
                    "clGetPlatformIDs: {}",
                    ClStatus::from_code(err.0)
                )))
            }
        };
        debug!("found {} OpenCL platform(s)", platforms.len());
        Ok(Self { platforms })
    }

    fn platform(&self, platform: PlatformId) -> Result<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.id() as usize == platform.0)
            .ok_or_else(|| RuntimeError::api("clGetPlatformInfo", ClStatus::InvalidPlatform))
    }

    fn device_ids(&self, platform: &Platform, device_type: u64) -> Result<Vec<cl_device_id>> {
        match platform.get_devices(device_type) {
            Ok(ids) => Ok(ids),
            Err(err) if ClStatus::from_code(err.0) == ClStatus::DeviceNotFound => Ok(Vec::new()),
            Err(err) => Err(api_error("clGetDeviceIDs")(err)),
        }
    }
}

impl DeviceCatalog for OpenClRuntime {
    fn platforms(&self) -> Result<Vec<PlatformId>> {
        Ok(self
            .platforms
            .iter()
            .map(|p| PlatformId(p.id() as usize))
            .collect())
    }

    fn devices(&self, platform: PlatformId) -> Result<Vec<DeviceId>> {
        let ids = self.device_ids(self.platform(platform)?, info::DEVICE_TYPE_ALL)?;
        Ok(ids.into_iter().map(|id| DeviceId(id as usize)).collect())
    }

    fn default_device(&self) -> Result<DeviceId> {
        let platform = self
            .platforms
            .first()
            .ok_or_else(|| RuntimeError::api("clGetPlatformIDs", ClStatus::PlatformNotFound))?;
        self.device_ids(platform, info::DEVICE_TYPE_DEFAULT)?
            .into_iter()
            .next()
            .map(|id| DeviceId(id as usize))
            .ok_or_else(|| RuntimeError::api("clGetDeviceIDs", ClStatus::DeviceNotFound))
    }

    fn device_platform(&self, device: DeviceId) -> Result<PlatformId> {
        let handle = self.device_uint(device, DeviceInfo::Platform)?;
        Ok(PlatformId(handle as usize))
    }

    fn platform_info(&self, platform: PlatformId, key: PlatformInfo) -> Result<String> {
        let platform = self.platform(platform)?;
        let text = match key {
            PlatformInfo::Name => platform.name(),
            PlatformInfo::Vendor => platform.vendor(),
            PlatformInfo::Version => platform.version(),
        };
        text.map_err(api_error("clGetPlatformInfo"))
    }

    fn device_info(&self, device: DeviceId, key: DeviceInfo) -> Result<InfoValue> {
        let value = get_device_info(device.0 as cl_device_id, key.code())
            .map_err(|code| status_error("clGetDeviceInfo", code))?;
        Ok(match key.shape() {
            InfoShape::Text => InfoValue::Text(String::from(value)),
            InfoShape::U32 => InfoValue::Uint(u64::from(u32::from(value))),
            InfoShape::U64 => InfoValue::Uint(u64::from(value)),
            InfoShape::Size => InfoValue::Uint(usize::from(value) as u64),
            InfoShape::SizeArray => InfoValue::Sizes(Vec::<usize>::from(value)),
            InfoShape::Bool => InfoValue::Bool(u32::from(value) != 0),
            InfoShape::Handle => InfoValue::Uint(isize::from(value) as u64),
        })
    }
}

impl ProgramCompiler for OpenClRuntime {
    type Program<'a> = OpenClProgram;

    fn create_program(&self, device: DeviceId, sources: &[&str]) -> Result<OpenClProgram> {
        let device = Device::new(device.0 as cl_device_id);
        let context = Context::from_device(&device).map_err(api_error("clCreateContext"))?;
        let program = Program::create_from_sources(&context, sources)
            .map_err(api_error("clCreateProgramWithSource"))?;
        Ok(OpenClProgram {
            program: RefCell::new(program),
            _context: context,
        })
    }

    fn build_program(&self, program: &OpenClProgram, device: DeviceId, options: &str) -> Result<()> {
        program
            .program
            .borrow_mut()
            .build(&[device.0 as cl_device_id], options)
            .map_err(api_error("clBuildProgram"))
    }

    fn build_log(&self, program: &OpenClProgram, device: DeviceId) -> Result<String> {
        program
            .program
            .borrow()
            .get_build_log(device.0 as cl_device_id)
            .map_err(api_error("clGetProgramBuildInfo"))
    }

    fn binary_sizes(&self, program: &OpenClProgram) -> Result<Vec<usize>> {
        program
            .program
            .borrow()
            .get_binary_sizes()
            .map_err(api_error("clGetProgramInfo"))
    }

    fn binaries(&self, program: &OpenClProgram, buffers: &mut [Vec<u8>]) -> Result<()> {
        let binaries = program
            .program
            .borrow()
            .get_binaries()
            .map_err(api_error("clGetProgramInfo"))?;
        copy_binaries(&binaries, buffers)
    }
}

/// Maps an `opencl3` failure of `call` onto the code table.
fn api_error(call: &'static str) -> impl Fn(ClError) -> RuntimeError {
    move |err| status_error(call, err.0)
}

fn status_error(call: &'static str, code: cl_int) -> RuntimeError {
    RuntimeError::api(call, ClStatus::from_code(code))
}

/// Copies fetched binaries into caller-sized buffers.
fn copy_binaries(binaries: &[Vec<u8>], buffers: &mut [Vec<u8>]) -> Result<()> {
    if binaries.len() != buffers.len() {
        return Err(RuntimeError::Malformed {
            call: "clGetProgramInfo",
            detail: format!("{} binaries for {} buffers", binaries.len(), buffers.len()),
        });
    }
    for (buffer, binary) in buffers.iter_mut().zip(binaries) {
        if buffer.len() != binary.len() {
            return Err(RuntimeError::Malformed {
                call: "clGetProgramInfo",
                detail: format!("{}-byte binary for a {}-byte buffer", binary.len(), buffer.len()),
            });
        }
        buffer.copy_from_slice(binary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_decode_through_the_code_table() {
        let err = api_error("clBuildProgram")(ClError(-11));
        assert_eq!(err.status(), Some(ClStatus::BuildProgramFailure));
        assert_eq!(err.to_string(), "clBuildProgram: -11 (CL_BUILD_PROGRAM_FAILURE)");

        let err = status_error("clGetDeviceInfo", -4242);
        assert_eq!(err.status(), Some(ClStatus::Unknown(-4242)));
    }

    #[test]
    fn binaries_fill_matching_buffers() {
        let mut buffers = vec![vec![0u8; 3]];
        copy_binaries(&[vec![7, 8, 9]], &mut buffers).expect("copy");
        assert_eq!(buffers, vec![vec![7, 8, 9]]);
    }

    #[test]
    fn mismatched_binaries_are_malformed() {
        let mut short = vec![vec![0u8; 2]];
        let err = copy_binaries(&[vec![7, 8, 9]], &mut short).expect_err("size mismatch");
        assert!(matches!(err, RuntimeError::Malformed { .. }));

        let mut none: Vec<Vec<u8>> = Vec::new();
        assert!(copy_binaries(&[vec![1]], &mut none).is_err());
    }
}
