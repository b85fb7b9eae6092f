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

use clc::resolve::{matching_devices, resolve_device, SelectionCriterion};
use clc::runtime::memory::{MemoryDevice, MemoryRuntime};
use clc::runtime::DeviceId;
use clc::ClcError;

fn two_platform_catalog() -> MemoryRuntime {
    MemoryRuntime::new()
        .with_platform(
            "Intel(R) OpenCL",
            [
                MemoryDevice::new("Intel(R) Core(TM) i7-8700 CPU"),
                MemoryDevice::new("Intel(R) UHD Graphics 630"),
            ],
        )
        .with_platform(
            "NVIDIA CUDA",
            [
                MemoryDevice::new("GeForce GTX 1080"),
                MemoryDevice::new("GeForce GTX 1080 Ti"),
            ],
        )
}

#[test]
fn substring_returns_every_match_in_catalog_order() {
    let catalog = two_platform_catalog();
    let matches = matching_devices(&catalog, "e").expect("scan");
    let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Intel(R) Core(TM) i7-8700 CPU",
            "Intel(R) UHD Graphics 630",
            "GeForce GTX 1080",
            "GeForce GTX 1080 Ti",
        ]
    );
    assert_eq!(matches[2].platform, "NVIDIA CUDA");
    assert_eq!(matches[0].device, DeviceId(0));
}

#[test]
fn matching_is_case_sensitive_and_literal() {
    let catalog = two_platform_catalog();
    assert!(matching_devices(&catalog, "geforce").expect("scan").is_empty());
    assert!(matching_devices(&catalog, "GTX*").expect("scan").is_empty());
    assert_eq!(matching_devices(&catalog, "(R)").expect("scan").len(), 2);
}

#[test]
fn unique_substring_resolves() {
    let catalog = two_platform_catalog();
    let criterion = SelectionCriterion::NameContains("Ti".to_string());
    let picked = resolve_device(&catalog, &criterion).expect("resolve");
    assert_eq!(picked.name, "GeForce GTX 1080 Ti");
    assert_eq!(picked.platform, "NVIDIA CUDA");
    assert_eq!(picked.device, DeviceId(3));
}

#[test]
fn no_match_reports_the_criterion() {
    let catalog = two_platform_catalog();
    let criterion = SelectionCriterion::NameContains("Radeon".to_string());
    match resolve_device(&catalog, &criterion) {
        Err(ClcError::NoMatchingDevice { criterion }) => assert_eq!(criterion, "Radeon"),
        other => panic!("expected NoMatchingDevice, got {other:?}"),
    }
}

#[test]
fn ambiguous_match_lists_devices_with_platforms() {
    let catalog = two_platform_catalog();
    let criterion = SelectionCriterion::NameContains("1080".to_string());
    let err = resolve_device(&catalog, &criterion).expect_err("ambiguous");
    match &err {
        ClcError::AmbiguousDevice { criterion, matches } => {
            assert_eq!(criterion, "1080");
            assert_eq!(matches.len(), 2);
        }
        other => panic!("expected AmbiguousDevice, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "-d=1080: matches multiple devices\n\
         \x20 - GeForce GTX 1080  (from NVIDIA CUDA)\n\
         \x20 - GeForce GTX 1080 Ti  (from NVIDIA CUDA)\n"
    );
}

#[test]
fn default_criterion_returns_the_designated_device() {
    let catalog = two_platform_catalog().with_default_device(DeviceId(2));
    let picked = resolve_device(&catalog, &SelectionCriterion::Default).expect("default");
    assert_eq!(picked.name, "GeForce GTX 1080");
    assert_eq!(picked.platform, "NVIDIA CUDA");
}

#[test]
fn default_ignores_catalog_size() {
    let many: Vec<MemoryDevice> = (0..50)
        .map(|i| MemoryDevice::new(format!("Device {i}")))
        .collect();
    let catalog = MemoryRuntime::new().with_platform("Bulk", many);
    let picked = resolve_device(&catalog, &SelectionCriterion::Default).expect("default");
    assert_eq!(picked.device, DeviceId(0));
}

#[test]
fn empty_device_option_means_default() {
    assert_eq!(SelectionCriterion::from_option(None), SelectionCriterion::Default);
    assert_eq!(SelectionCriterion::from_option(Some("")), SelectionCriterion::Default);
    assert_eq!(
        SelectionCriterion::from_option(Some("Intel")),
        SelectionCriterion::NameContains("Intel".to_string())
    );
}

#[test]
fn empty_catalog_has_no_default() {
    let catalog = MemoryRuntime::new();
    let err = resolve_device(&catalog, &SelectionCriterion::Default).expect_err("no devices");
    assert!(matches!(err, ClcError::Query(_)), "{err:?}");
}
