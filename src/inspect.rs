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

//! Device listing (`-h=d`).
//!
//! Prints every device's quoted name; with verbose output each name is
//! followed by a block of identity, compute, workgroup, memory, image and
//! extension properties.

use std::io::Write;

use crate::error::{ClcError, Result};
use crate::runtime::info::{self, DeviceInfo, PlatformInfo};
use crate::runtime::{DeviceCatalog, DeviceId, PlatformId};

const FP_FLAGS: &[(u64, &str)] = &[
    (info::FP_DENORM, "CL_FP_DENORM"),
    (info::FP_INF_NAN, "CL_FP_INF_NAN"),
    (info::FP_ROUND_TO_NEAREST, "CL_FP_ROUND_TO_NEAREST"),
    (info::FP_ROUND_TO_ZERO, "CL_FP_ROUND_TO_ZERO"),
    (info::FP_ROUND_TO_INF, "CL_FP_ROUND_TO_INF"),
    (info::FP_FMA, "CL_FP_FMA"),
    (info::FP_CORRECTLY_ROUNDED_DIVIDE_SQRT, "CL_FP_CORRECTLY_ROUNDED_DIVIDE_SQRT"),
    (info::FP_SOFT_FLOAT, "CL_FP_SOFT_FLOAT"),
];

const QUEUE_FLAGS: &[(u64, &str)] = &[
    (
        info::QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE,
        "CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE",
    ),
    (info::QUEUE_PROFILING_ENABLE, "CL_QUEUE_PROFILING_ENABLE"),
];

/// Writes the listing for every device whose name contains `filter`.
///
/// Returns the number of devices listed.
pub fn list_devices<C: DeviceCatalog + ?Sized, W: Write + ?Sized>(
    catalog: &C,
    out: &mut W,
    filter: Option<&str>,
    detailed: bool,
) -> Result<usize> {
    let mut listed = 0;
    for platform in catalog.platforms()? {
        for device in catalog.devices(platform)? {
            let name = catalog.device_name(device)?;
            if !filter.map_or(true, |needle| name.contains(needle)) {
                continue;
            }
            let mut text = format!("\"{name}\"\n");
            if detailed {
                text.push_str(&describe_device(catalog, platform, device)?);
            }
            out.write_all(text.as_bytes())
                .map_err(|err| ClcError::io("stdout", err))?;
            listed += 1;
        }
    }
    out.flush().map_err(|err| ClcError::io("stdout", err))?;
    Ok(listed)
}

/// The verbose property block for one device, without its name line.
pub fn describe_device<C: DeviceCatalog + ?Sized>(
    catalog: &C,
    platform: PlatformId,
    device: DeviceId,
) -> Result<String> {
    let text = |key| catalog.device_text(device, key);
    let uint = |key| catalog.device_uint(device, key);
    let flag = |key| catalog.device_bool(device, key);

    let mut block = Block::default();
    block.field(
        1,
        DeviceInfo::Platform.label(),
        format!("\"{}\"", catalog.platform_name(platform)?),
    );
    for key in [PlatformInfo::Vendor, PlatformInfo::Version] {
        block.field(1, key.label(), catalog.platform_info(platform, key)?);
    }
    block.field(1, DeviceInfo::Vendor.label(), text(DeviceInfo::Vendor)?);
    block.field(
        1,
        DeviceInfo::VendorId.label(),
        format!("0x{:04x}", uint(DeviceInfo::VendorId)?),
    );
    for key in [
        DeviceInfo::Version,
        DeviceInfo::Profile,
        DeviceInfo::OpenClCVersion,
        DeviceInfo::DriverVersion,
    ] {
        block.field(1, key.label(), text(key)?);
    }
    block.field(1, DeviceInfo::Type.label(), device_type_label(uint(DeviceInfo::Type)?));

    block.section("COMPUTE");
    block.field(
        2,
        DeviceInfo::MaxClockFrequency.label(),
        format!("{} MHz", uint(DeviceInfo::MaxClockFrequency)?),
    );
    block.field(2, DeviceInfo::MaxComputeUnits.label(), uint(DeviceInfo::MaxComputeUnits)?);
    block.field(
        2,
        DeviceInfo::ProfilingTimerResolution.label(),
        format!("{} ns", uint(DeviceInfo::ProfilingTimerResolution)?),
    );
    block.field(2, DeviceInfo::EndianLittle.label(), flag(DeviceInfo::EndianLittle)?);
    block.field(
        2,
        DeviceInfo::SingleFpConfig.label(),
        fp_config_labels(uint(DeviceInfo::SingleFpConfig)?),
    );
    block.field(
        2,
        DeviceInfo::QueueProperties.label(),
        queue_property_labels(uint(DeviceInfo::QueueProperties)?),
    );

    block.section("WORKGROUPS");
    block.field(2, DeviceInfo::MaxWorkGroupSize.label(), uint(DeviceInfo::MaxWorkGroupSize)?);
    let item_sizes: Vec<String> = catalog
        .device_sizes(device, DeviceInfo::MaxWorkItemSizes)?
        .iter()
        .map(|s| s.to_string())
        .collect();
    block.field(2, DeviceInfo::MaxWorkItemSizes.label(), item_sizes.join("x"));
    block.field(
        2,
        DeviceInfo::PreferredVectorWidthChar.label(),
        uint(DeviceInfo::PreferredVectorWidthChar)?,
    );
    block.field(
        2,
        DeviceInfo::PreferredVectorWidthFloat.label(),
        uint(DeviceInfo::PreferredVectorWidthFloat)?,
    );

    block.section("MEMORY");
    block.field(2, DeviceInfo::AddressBits.label(), uint(DeviceInfo::AddressBits)?);
    block.field(2, DeviceInfo::MemBaseAddrAlign.label(), uint(DeviceInfo::MemBaseAddrAlign)?);
    for key in [
        DeviceInfo::MaxConstantBufferSize,
        DeviceInfo::LocalMemSize,
        DeviceInfo::GlobalMemSize,
    ] {
        block.field(2, key.label(), format_bytes(uint(key)?));
    }
    block.field(
        2,
        DeviceInfo::GlobalMemCacheType.label(),
        cache_type_label(uint(DeviceInfo::GlobalMemCacheType)?),
    );
    block.field(
        2,
        DeviceInfo::GlobalMemCachelineSize.label(),
        format!("{} B", uint(DeviceInfo::GlobalMemCachelineSize)?),
    );
    block.field(
        2,
        DeviceInfo::GlobalMemCacheSize.label(),
        format_bytes(uint(DeviceInfo::GlobalMemCacheSize)?),
    );

    block.section("IMAGES");
    block.field(2, DeviceInfo::ImageSupport.label(), flag(DeviceInfo::ImageSupport)?);
    block.field(2, DeviceInfo::Image2dMaxWidth.label(), uint(DeviceInfo::Image2dMaxWidth)?);
    block.field(2, DeviceInfo::Image2dMaxHeight.label(), uint(DeviceInfo::Image2dMaxHeight)?);

    block.section("EXTENSIONS");
    for extension in text(DeviceInfo::Extensions)?.split_whitespace() {
        block.line(2, extension);
    }
    Ok(block.text)
}

/// Scales a byte count to the largest of MB/KB/B that divides it exactly.
pub fn scale_bytes(bytes: u64) -> (u64, &'static str) {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes % MB == 0 {
        (bytes / MB, "MB")
    } else if bytes % KB == 0 {
        (bytes / KB, "KB")
    } else {
        (bytes, "B")
    }
}

pub fn format_bytes(bytes: u64) -> String {
    let (value, unit) = scale_bytes(bytes);
    format!("{value} {unit}")
}

/// Symbolic device type, or the raw code followed by `?`.
pub fn device_type_label(device_type: u64) -> String {
    let label = match device_type {
        info::DEVICE_TYPE_DEFAULT => "CL_DEVICE_TYPE_DEFAULT",
        info::DEVICE_TYPE_CPU => "CL_DEVICE_TYPE_CPU",
        info::DEVICE_TYPE_GPU => "CL_DEVICE_TYPE_GPU",
        info::DEVICE_TYPE_ACCELERATOR => "CL_DEVICE_TYPE_ACCELERATOR",
        info::DEVICE_TYPE_CUSTOM => "CL_DEVICE_TYPE_CUSTOM",
        other => return format!("{other}?"),
    };
    label.to_string()
}

/// Set floating-point capability flags, space separated, in a fixed order.
pub fn fp_config_labels(config: u64) -> String {
    flag_labels(config, FP_FLAGS)
}

pub fn queue_property_labels(properties: u64) -> String {
    flag_labels(properties, QUEUE_FLAGS)
}

pub fn cache_type_label(cache_type: u64) -> String {
    let label = match cache_type {
        info::CACHE_NONE => "CL_NONE",
        info::CACHE_READ_ONLY => "CL_READ_ONLY_CACHE",
        info::CACHE_READ_WRITE => "CL_READ_WRITE_CACHE",
        other => return format!("{other}?"),
    };
    label.to_string()
}

fn flag_labels(bits: u64, table: &[(u64, &str)]) -> String {
    table
        .iter()
        .filter(|(flag, _)| bits & flag != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Default)]
struct Block {
    text: String,
}

impl Block {
    fn section(&mut self, title: &str) {
        self.line(1, title);
    }

    fn field(&mut self, depth: usize, label: &str, value: impl std::fmt::Display) {
        self.line(depth, &format!("{label}: {value}"));
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.text.push_str(&format!("{:indent$}{text}\n", "", indent = depth * 2));
    }
}
