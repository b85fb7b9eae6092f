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

//! Property keys and the native constants used to decode them.

/// Native representation of a property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoShape {
    Text,
    U32,
    U64,
    Size,
    SizeArray,
    Bool,
    Handle,
}

macro_rules! info_keys {
    (
        $(#[$meta:meta])*
        $ty:ident {
            $( $variant:ident = $code:literal, $shape:ident, $label:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $ty {
            $( $variant, )*
        }

        impl $ty {
            /// Native parameter code.
            pub fn code(self) -> u32 {
                match self {
                    $( $ty::$variant => $code, )*
                }
            }

            pub fn shape(self) -> InfoShape {
                match self {
                    $( $ty::$variant => InfoShape::$shape, )*
                }
            }

            /// The `CL_*` name printed in device listings.
            pub fn label(self) -> &'static str {
                match self {
                    $( $ty::$variant => $label, )*
                }
            }
        }
    };
}

info_keys! {
    /// Platform properties.
    PlatformInfo {
        Version = 0x0901, Text, "CL_PLATFORM_VERSION";
        Name = 0x0902, Text, "CL_PLATFORM_NAME";
        Vendor = 0x0903, Text, "CL_PLATFORM_VENDOR";
    }
}

info_keys! {
    /// Device properties.
    DeviceInfo {
        Type = 0x1000, U64, "CL_DEVICE_TYPE";
        VendorId = 0x1001, U32, "CL_DEVICE_VENDOR_ID";
        MaxComputeUnits = 0x1002, U32, "CL_DEVICE_MAX_COMPUTE_UNITS";
        MaxWorkGroupSize = 0x1004, Size, "CL_DEVICE_MAX_WORK_GROUP_SIZE";
        MaxWorkItemSizes = 0x1005, SizeArray, "CL_DEVICE_MAX_WORK_ITEM_SIZES";
        PreferredVectorWidthChar = 0x1006, U32, "CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR";
        PreferredVectorWidthFloat = 0x100A, U32, "CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT";
        MaxClockFrequency = 0x100C, U32, "CL_DEVICE_MAX_CLOCK_FREQUENCY";
        AddressBits = 0x100D, U32, "CL_DEVICE_ADDRESS_BITS";
        Image2dMaxWidth = 0x1011, Size, "CL_DEVICE_IMAGE2D_MAX_WIDTH";
        Image2dMaxHeight = 0x1012, Size, "CL_DEVICE_IMAGE2D_MAX_HEIGHT";
        ImageSupport = 0x1016, Bool, "CL_DEVICE_IMAGE_SUPPORT";
        MemBaseAddrAlign = 0x1019, U32, "CL_DEVICE_MEM_BASE_ADDR_ALIGN";
        SingleFpConfig = 0x101B, U64, "CL_DEVICE_SINGLE_FP_CONFIG";
        GlobalMemCacheType = 0x101C, U32, "CL_DEVICE_GLOBAL_MEM_CACHE_TYPE";
        GlobalMemCachelineSize = 0x101D, U32, "CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE";
        GlobalMemCacheSize = 0x101E, U64, "CL_DEVICE_GLOBAL_MEM_CACHE_SIZE";
        GlobalMemSize = 0x101F, U64, "CL_DEVICE_GLOBAL_MEM_SIZE";
        MaxConstantBufferSize = 0x1020, U64, "CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE";
        LocalMemSize = 0x1023, U64, "CL_DEVICE_LOCAL_MEM_SIZE";
        ProfilingTimerResolution = 0x1025, Size, "CL_DEVICE_PROFILING_TIMER_RESOLUTION";
        EndianLittle = 0x1026, Bool, "CL_DEVICE_ENDIAN_LITTLE";
        QueueProperties = 0x102A, U64, "CL_DEVICE_QUEUE_PROPERTIES";
        Name = 0x102B, Text, "CL_DEVICE_NAME";
        Vendor = 0x102C, Text, "CL_DEVICE_VENDOR";
        DriverVersion = 0x102D, Text, "CL_DRIVER_VERSION";
        Profile = 0x102E, Text, "CL_DEVICE_PROFILE";
        Version = 0x102F, Text, "CL_DEVICE_VERSION";
        Extensions = 0x1030, Text, "CL_DEVICE_EXTENSIONS";
        Platform = 0x1031, Handle, "CL_DEVICE_PLATFORM";
        OpenClCVersion = 0x103D, Text, "CL_DEVICE_OPENCL_C_VERSION";
    }
}

pub const DEVICE_TYPE_DEFAULT: u64 = 1 << 0;
pub const DEVICE_TYPE_CPU: u64 = 1 << 1;
pub const DEVICE_TYPE_GPU: u64 = 1 << 2;
pub const DEVICE_TYPE_ACCELERATOR: u64 = 1 << 3;
pub const DEVICE_TYPE_CUSTOM: u64 = 1 << 4;
pub const DEVICE_TYPE_ALL: u64 = 0xFFFF_FFFF;

pub const FP_DENORM: u64 = 1 << 0;
pub const FP_INF_NAN: u64 = 1 << 1;
pub const FP_ROUND_TO_NEAREST: u64 = 1 << 2;
pub const FP_ROUND_TO_ZERO: u64 = 1 << 3;
pub const FP_ROUND_TO_INF: u64 = 1 << 4;
pub const FP_FMA: u64 = 1 << 5;
pub const FP_SOFT_FLOAT: u64 = 1 << 6;
pub const FP_CORRECTLY_ROUNDED_DIVIDE_SQRT: u64 = 1 << 7;

pub const QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE: u64 = 1 << 0;
pub const QUEUE_PROFILING_ENABLE: u64 = 1 << 1;

pub const CACHE_NONE: u64 = 0;
pub const CACHE_READ_ONLY: u64 = 1;
pub const CACHE_READ_WRITE: u64 = 2;

pub const PROGRAM_BINARY_SIZES: u32 = 0x1165;
pub const PROGRAM_BINARIES: u32 = 0x1166;
pub const PROGRAM_BUILD_LOG: u32 = 0x1183;
