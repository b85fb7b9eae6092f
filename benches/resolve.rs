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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use clc::naming::default_output_name;
use clc::runtime::memory::{MemoryDevice, MemoryRuntime};
use clc::{resolve_device, SelectionCriterion};

/// A catalog of `platforms` platforms with `per_platform` devices each.
fn catalog(platforms: usize, per_platform: usize) -> MemoryRuntime {
    (0..platforms).fold(MemoryRuntime::new(), |runtime, p| {
        runtime.with_platform(
            format!("Platform {p}"),
            (0..per_platform).map(move |d| MemoryDevice::gpu(format!("Device {p}.{d}"), 0x10de)),
        )
    })
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_device");
    for &(platforms, per_platform) in &[(1, 4), (4, 16), (16, 64)] {
        let api = catalog(platforms, per_platform);
        let needle = format!("Device {}.{}", platforms - 1, per_platform - 1);
        let criterion = SelectionCriterion::NameContains(needle);
        group.bench_with_input(
            BenchmarkId::from_parameter(platforms * per_platform),
            &criterion,
            |b, criterion| b.iter(|| resolve_device(black_box(&api), black_box(criterion))),
        );
    }
    group.finish();
}

fn bench_output_name(c: &mut Criterion) {
    c.bench_function("default_output_name", |b| {
        b.iter(|| {
            default_output_name(
                black_box("kernels/nested/dir/matrix_multiply.cl"),
                black_box(0x1002),
            )
        })
    });
}

criterion_group!(benches, bench_resolve, bench_output_name);
criterion_main!(benches);
