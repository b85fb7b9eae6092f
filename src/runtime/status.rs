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

//! OpenCL status codes and their symbolic names.
//!
//! The table covers every code defined by the OpenCL 3.0 headers together with
//! the registered extension codes. Anything else decodes to
//! [`ClStatus::Unknown`], whose label is `Unknown code`.

use std::fmt;

macro_rules! status_codes {
    ($( $variant:ident = $code:literal => $name:literal, )*) => {
        /// A status code returned by an OpenCL entry point.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ClStatus {
            $( $variant, )*
            /// A code outside the known table.
            Unknown(i32),
        }

        impl ClStatus {
            /// Every named status, in table order.
            pub const KNOWN: &'static [ClStatus] = &[ $( ClStatus::$variant, )* ];

            /// Decodes a raw status code.
            pub fn from_code(code: i32) -> Self {
                match code {
                    $( $code => ClStatus::$variant, )*
                    other => ClStatus::Unknown(other),
                }
            }

            /// The raw status code.
            pub fn code(self) -> i32 {
                match self {
                    $( ClStatus::$variant => $code, )*
                    ClStatus::Unknown(code) => code,
                }
            }

            /// The symbolic `CL_*` name, or `Unknown code`.
            pub fn name(self) -> &'static str {
                match self {
                    $( ClStatus::$variant => $name, )*
                    ClStatus::Unknown(_) => "Unknown code",
                }
            }
        }
    };
}

status_codes! {
    Success = 0 => "CL_SUCCESS",
    DeviceNotFound = -1 => "CL_DEVICE_NOT_FOUND",
    DeviceNotAvailable = -2 => "CL_DEVICE_NOT_AVAILABLE",
    CompilerNotAvailable = -3 => "CL_COMPILER_NOT_AVAILABLE",
    MemObjectAllocationFailure = -4 => "CL_MEM_OBJECT_ALLOCATION_FAILURE",
    OutOfResources = -5 => "CL_OUT_OF_RESOURCES",
    OutOfHostMemory = -6 => "CL_OUT_OF_HOST_MEMORY",
    ProfilingInfoNotAvailable = -7 => "CL_PROFILING_INFO_NOT_AVAILABLE",
    MemCopyOverlap = -8 => "CL_MEM_COPY_OVERLAP",
    ImageFormatMismatch = -9 => "CL_IMAGE_FORMAT_MISMATCH",
    ImageFormatNotSupported = -10 => "CL_IMAGE_FORMAT_NOT_SUPPORTED",
    BuildProgramFailure = -11 => "CL_BUILD_PROGRAM_FAILURE",
    MapFailure = -12 => "CL_MAP_FAILURE",
    MisalignedSubBufferOffset = -13 => "CL_MISALIGNED_SUB_BUFFER_OFFSET",
    ExecStatusErrorForEventsInWaitList = -14 => "CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST",
    CompileProgramFailure = -15 => "CL_COMPILE_PROGRAM_FAILURE",
    LinkerNotAvailable = -16 => "CL_LINKER_NOT_AVAILABLE",
    LinkProgramFailure = -17 => "CL_LINK_PROGRAM_FAILURE",
    DevicePartitionFailed = -18 => "CL_DEVICE_PARTITION_FAILED",
    KernelArgInfoNotAvailable = -19 => "CL_KERNEL_ARG_INFO_NOT_AVAILABLE",
    InvalidValue = -30 => "CL_INVALID_VALUE",
    InvalidDeviceType = -31 => "CL_INVALID_DEVICE_TYPE",
    InvalidPlatform = -32 => "CL_INVALID_PLATFORM",
    InvalidDevice = -33 => "CL_INVALID_DEVICE",
    InvalidContext = -34 => "CL_INVALID_CONTEXT",
    InvalidQueueProperties = -35 => "CL_INVALID_QUEUE_PROPERTIES",
    InvalidCommandQueue = -36 => "CL_INVALID_COMMAND_QUEUE",
    InvalidHostPtr = -37 => "CL_INVALID_HOST_PTR",
    InvalidMemObject = -38 => "CL_INVALID_MEM_OBJECT",
    InvalidImageFormatDescriptor = -39 => "CL_INVALID_IMAGE_FORMAT_DESCRIPTOR",
    InvalidImageSize = -40 => "CL_INVALID_IMAGE_SIZE",
    InvalidSampler = -41 => "CL_INVALID_SAMPLER",
    InvalidBinary = -42 => "CL_INVALID_BINARY",
    InvalidBuildOptions = -43 => "CL_INVALID_BUILD_OPTIONS",
    InvalidProgram = -44 => "CL_INVALID_PROGRAM",
    InvalidProgramExecutable = -45 => "CL_INVALID_PROGRAM_EXECUTABLE",
    InvalidKernelName = -46 => "CL_INVALID_KERNEL_NAME",
    InvalidKernelDefinition = -47 => "CL_INVALID_KERNEL_DEFINITION",
    InvalidKernel = -48 => "CL_INVALID_KERNEL",
    InvalidArgIndex = -49 => "CL_INVALID_ARG_INDEX",
    InvalidArgValue = -50 => "CL_INVALID_ARG_VALUE",
    InvalidArgSize = -51 => "CL_INVALID_ARG_SIZE",
    InvalidKernelArgs = -52 => "CL_INVALID_KERNEL_ARGS",
    InvalidWorkDimension = -53 => "CL_INVALID_WORK_DIMENSION",
    InvalidWorkGroupSize = -54 => "CL_INVALID_WORK_GROUP_SIZE",
    InvalidWorkItemSize = -55 => "CL_INVALID_WORK_ITEM_SIZE",
    InvalidGlobalOffset = -56 => "CL_INVALID_GLOBAL_OFFSET",
    InvalidEventWaitList = -57 => "CL_INVALID_EVENT_WAIT_LIST",
    InvalidEvent = -58 => "CL_INVALID_EVENT",
    InvalidOperation = -59 => "CL_INVALID_OPERATION",
    InvalidGlObject = -60 => "CL_INVALID_GL_OBJECT",
    InvalidBufferSize = -61 => "CL_INVALID_BUFFER_SIZE",
    InvalidMipLevel = -62 => "CL_INVALID_MIP_LEVEL",
    InvalidGlobalWorkSize = -63 => "CL_INVALID_GLOBAL_WORK_SIZE",
    InvalidProperty = -64 => "CL_INVALID_PROPERTY",
    InvalidImageDescriptor = -65 => "CL_INVALID_IMAGE_DESCRIPTOR",
    InvalidCompilerOptions = -66 => "CL_INVALID_COMPILER_OPTIONS",
    InvalidLinkerOptions = -67 => "CL_INVALID_LINKER_OPTIONS",
    InvalidDevicePartitionCount = -68 => "CL_INVALID_DEVICE_PARTITION_COUNT",
    InvalidPipeSize = -69 => "CL_INVALID_PIPE_SIZE",
    InvalidDeviceQueue = -70 => "CL_INVALID_DEVICE_QUEUE",
    InvalidSpecId = -71 => "CL_INVALID_SPEC_ID",
    MaxSizeRestrictionExceeded = -72 => "CL_MAX_SIZE_RESTRICTION_EXCEEDED",
    InvalidGlSharegroupReference = -1000 => "CL_INVALID_GL_SHAREGROUP_REFERENCE_KHR",
    PlatformNotFound = -1001 => "CL_PLATFORM_NOT_FOUND_KHR",
    InvalidD3d10Device = -1002 => "CL_INVALID_D3D10_DEVICE_KHR",
    InvalidD3d10Resource = -1003 => "CL_INVALID_D3D10_RESOURCE_KHR",
    D3d10ResourceAlreadyAcquired = -1004 => "CL_D3D10_RESOURCE_ALREADY_ACQUIRED_KHR",
    D3d10ResourceNotAcquired = -1005 => "CL_D3D10_RESOURCE_NOT_ACQUIRED_KHR",
    InvalidD3d11Device = -1006 => "CL_INVALID_D3D11_DEVICE_KHR",
    InvalidD3d11Resource = -1007 => "CL_INVALID_D3D11_RESOURCE_KHR",
    D3d11ResourceAlreadyAcquired = -1008 => "CL_D3D11_RESOURCE_ALREADY_ACQUIRED_KHR",
    D3d11ResourceNotAcquired = -1009 => "CL_D3D11_RESOURCE_NOT_ACQUIRED_KHR",
    InvalidDx9MediaAdapter = -1010 => "CL_INVALID_DX9_MEDIA_ADAPTER_KHR",
    InvalidDx9MediaSurface = -1011 => "CL_INVALID_DX9_MEDIA_SURFACE_KHR",
    Dx9MediaSurfaceAlreadyAcquired = -1012 => "CL_DX9_MEDIA_SURFACE_ALREADY_ACQUIRED_KHR",
    Dx9MediaSurfaceNotAcquired = -1013 => "CL_DX9_MEDIA_SURFACE_NOT_ACQUIRED_KHR",
    DevicePartitionFailedExt = -1057 => "CL_DEVICE_PARTITION_FAILED_EXT",
    InvalidPartitionCountExt = -1058 => "CL_INVALID_PARTITION_COUNT_EXT",
    InvalidPartitionNameExt = -1059 => "CL_INVALID_PARTITION_NAME_EXT",
    EglResourceNotAcquired = -1092 => "CL_EGL_RESOURCE_NOT_ACQUIRED_KHR",
    InvalidEglObject = -1093 => "CL_INVALID_EGL_OBJECT_KHR",
    InvalidAccelerator = -1094 => "CL_INVALID_ACCELERATOR_INTEL",
    InvalidAcceleratorType = -1095 => "CL_INVALID_ACCELERATOR_TYPE_INTEL",
    InvalidAcceleratorDescriptor = -1096 => "CL_INVALID_ACCELERATOR_DESCRIPTOR_INTEL",
    AcceleratorTypeNotSupported = -1097 => "CL_ACCELERATOR_TYPE_NOT_SUPPORTED_INTEL",
}

impl ClStatus {
    pub fn is_success(self) -> bool {
        self == ClStatus::Success
    }
}

impl fmt::Display for ClStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_unique() {
        for (i, a) in ClStatus::KNOWN.iter().enumerate() {
            for b in &ClStatus::KNOWN[i + 1..] {
                assert_ne!(a.code(), b.code(), "{} and {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn core_range_is_contiguous() {
        for code in (-19..=0).chain(-72..=-30) {
            assert!(
                !matches!(ClStatus::from_code(code), ClStatus::Unknown(_)),
                "missing code {code}"
            );
        }
    }
}
