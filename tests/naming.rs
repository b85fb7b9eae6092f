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

use std::path::PathBuf;

use clc::naming::{base_name, default_output_name, output_target, vendor_suffix, OutputTarget};

#[test]
fn known_vendors_use_symbolic_suffixes() {
    assert_eq!(default_output_name("foo.cl", 0x8086), "foo.elf");
    assert_eq!(default_output_name("dir/bar.cl", 0x10de), "bar.ptx");
}

#[test]
fn unknown_vendor_uses_hex_suffix() {
    assert_eq!(default_output_name("baz.cl", 0x1002), "baz.1002bin");
    assert_eq!(vendor_suffix(0x0), "0000bin");
    assert_eq!(vendor_suffix(0x13b5), "13b5bin");
}

#[test]
fn stdin_input_is_named_stdin() {
    assert_eq!(base_name("-"), "stdin");
    assert_eq!(default_output_name("-", 0x10de), "stdin.ptx");
}

#[test]
fn directories_are_stripped_at_the_last_separator() {
    assert_eq!(base_name("a/b/c/kernel.cl"), "kernel");
    assert_eq!(base_name("C:\\src\\kernel.cl"), "kernel");
    assert_eq!(base_name("mixed\\dir/kernel.cl"), "kernel");
    assert_eq!(base_name("mixed/dir\\kernel.cl"), "kernel");
    assert_eq!(base_name("plain"), "plain");
}

#[test]
fn explicit_output_is_used_verbatim() {
    assert_eq!(
        output_target(Some("out/k.bin"), "foo.cl", 0x8086),
        OutputTarget::File(PathBuf::from("out/k.bin"))
    );
    assert_eq!(output_target(Some("-"), "foo.cl", 0x8086), OutputTarget::Stdout);
}

#[test]
fn missing_output_is_derived() {
    assert_eq!(
        output_target(None, "kernels/sgemm.cl", 0x10de),
        OutputTarget::File(PathBuf::from("sgemm.ptx"))
    );
}

#[test]
fn derivation_is_deterministic() {
    let first = default_output_name("x/y.cl", 0xabcd);
    let second = default_output_name("x/y.cl", 0xabcd);
    assert_eq!(first, second);
    assert_eq!(first, "y.abcdbin");
}
