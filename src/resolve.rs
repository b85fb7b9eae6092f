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

//! Device selection.
//!
//! A substring criterion is tested against every device of every platform
//! before any decision is taken, so an ambiguous selection can report the
//! complete list of candidates.

use std::fmt;

use log::debug;

use crate::error::{ClcError, Result};
use crate::runtime::{DeviceCatalog, DeviceId};

/// How the target device is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionCriterion {
    /// The platform's default device.
    Default,
    /// Devices whose name contains this (non-empty, case-sensitive) text.
    NameContains(String),
}

impl SelectionCriterion {
    /// `None` or an empty string selects the default device.
    pub fn from_option(device: Option<&str>) -> Self {
        match device {
            Some(needle) if !needle.is_empty() => SelectionCriterion::NameContains(needle.to_string()),
            _ => SelectionCriterion::Default,
        }
    }
}

impl fmt::Display for SelectionCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionCriterion::Default => write!(f, "<default>"),
            SelectionCriterion::NameContains(needle) => write!(f, "{needle}"),
        }
    }
}

/// A device together with the names used to report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceMatch {
    pub device: DeviceId,
    pub name: String,
    pub platform: String,
}

/// Every device whose name contains `needle`, in catalog order.
pub fn matching_devices<C: DeviceCatalog + ?Sized>(
    catalog: &C,
    needle: &str,
) -> Result<Vec<DeviceMatch>> {
    let mut matches = Vec::new();
    for platform in catalog.platforms()? {
        let platform_name = catalog.platform_name(platform)?;
        debug!("scanning platform {platform_name}");
        for device in catalog.devices(platform)? {
            let name = catalog.device_name(device)?;
            debug!("  scanning device {name}");
            if name.contains(needle) {
                matches.push(DeviceMatch {
                    device,
                    name,
                    platform: platform_name.clone(),
                });
            }
        }
    }
    Ok(matches)
}

/// Picks exactly one device for `criterion`.
pub fn resolve_device<C: DeviceCatalog + ?Sized>(
    catalog: &C,
    criterion: &SelectionCriterion,
) -> Result<DeviceMatch> {
    debug!("selecting matching device {criterion}");
    let needle = match criterion {
        SelectionCriterion::Default => {
            let device = catalog.default_device()?;
            let picked = describe(catalog, device)?;
            debug!("  => picked default device {}", picked.name);
            return Ok(picked);
        }
        SelectionCriterion::NameContains(needle) => needle,
    };

    let mut matches = matching_devices(catalog, needle)?;
    match matches.len() {
        0 => Err(ClcError::NoMatchingDevice {
            criterion: needle.clone(),
        }),
        1 => {
            let picked = matches.remove(0);
            debug!("  => picked device {}", picked.name);
            Ok(picked)
        }
        _ => Err(ClcError::AmbiguousDevice {
            criterion: needle.clone(),
            matches,
        }),
    }
}

fn describe<C: DeviceCatalog + ?Sized>(catalog: &C, device: DeviceId) -> Result<DeviceMatch> {
    let name = catalog.device_name(device)?;
    let platform = catalog.platform_name(catalog.device_platform(device)?)?;
    Ok(DeviceMatch {
        device,
        name,
        platform,
    })
}
