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

use std::sync::{Mutex, Once};

use clc::pipeline::{build_binary, BuildRequest, SourceUnit};
use clc::runtime::memory::{BuildScript, MemoryDevice, MemoryRuntime};
use clc::runtime::DeviceId;
use log::{Level, Log, Metadata, Record};

struct Capture;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();
static CAPTURE: Capture = Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .expect("records lock")
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("install logger");
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Builds with `log` as the scripted build log and returns the level of the
/// record that carried it.
fn level_of_build_log(log: &str) -> Option<Level> {
    install();
    let api = MemoryRuntime::new()
        .with_platform("Memory", [MemoryDevice::gpu("Memory GPU", 0x1002)])
        .with_build(BuildScript {
            log: log.to_string(),
            ..BuildScript::default()
        });
    let request = BuildRequest::new(vec![SourceUnit::new("k.cl", "kernel void k() {}")], &[]);
    build_binary(&api, DeviceId(0), &request).expect("build");

    RECORDS
        .lock()
        .expect("records lock")
        .iter()
        .find(|(_, message)| message.contains(log))
        .map(|(level, _)| *level)
}

#[test]
fn warning_log_is_reported_at_warning_level() {
    let level = level_of_build_log("k.cl:1:8: warning: unused variable 'tmp'");
    assert_eq!(level, Some(Level::Warn));
}

#[test]
fn clean_log_is_reported_only_when_verbose() {
    let level = level_of_build_log("k.cl: compiled 1 kernel in 3 ms");
    assert_eq!(level, Some(Level::Info));
}

#[test]
fn warning_marker_is_case_sensitive() {
    let level = level_of_build_log("k.cl: WARNING count 0");
    assert_eq!(level, Some(Level::Info));
}
