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

use clc::ClStatus;

#[test]
fn decodes_known_codes() {
    assert_eq!(ClStatus::from_code(0), ClStatus::Success);
    assert_eq!(ClStatus::from_code(-11).name(), "CL_BUILD_PROGRAM_FAILURE");
    assert_eq!(ClStatus::from_code(-43).name(), "CL_INVALID_BUILD_OPTIONS");
    assert_eq!(ClStatus::from_code(-1001).name(), "CL_PLATFORM_NOT_FOUND_KHR");
}

#[test]
fn unknown_codes_fall_back() {
    let status = ClStatus::from_code(-9999);
    assert_eq!(status, ClStatus::Unknown(-9999));
    assert_eq!(status.name(), "Unknown code");
    assert_eq!(status.code(), -9999);
    assert_eq!(ClStatus::from_code(5).name(), "Unknown code");
}

#[test]
fn every_known_code_round_trips() {
    for status in ClStatus::KNOWN {
        assert_eq!(ClStatus::from_code(status.code()), *status);
        assert!(status.name().starts_with("CL_"), "{}", status.name());
    }
}

#[test]
fn display_shows_code_and_name() {
    assert_eq!(
        ClStatus::BuildProgramFailure.to_string(),
        "-11 (CL_BUILD_PROGRAM_FAILURE)"
    );
    assert_eq!(ClStatus::Unknown(-77).to_string(), "-77 (Unknown code)");
}
