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

use std::process::{Command, Output};

fn clc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clc"))
        .args(args)
        .env_remove("CLC_LOG")
        .output()
        .expect("spawn clc")
}

#[test]
fn help_goes_to_stdout() {
    let output = clc(&["-h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("OpenCL Offline Compiler\n"), "{stdout}");
    assert!(output.stderr.is_empty());
}

#[test]
fn respecified_device_prints_usage_to_stderr() {
    let output = clc(&["-d=a", "-d=b", "k.cl"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("clc: -d=b: argument respecified\n"), "{stderr}");
    assert!(stderr.contains("usage: clc [OPTS] ARGS"), "{stderr}");
}

#[test]
fn unknown_option_fails() {
    let output = clc(&["-z", "k.cl"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("clc: -z: unexpected option\n"), "{stderr}");
}

#[test]
fn missing_input_fails() {
    let output = clc(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("clc: expected input argument\n"), "{stderr}");
}
